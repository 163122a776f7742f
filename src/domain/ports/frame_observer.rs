//! Frame Observer Port
//!
//! Renderers observe the current node after every processed input. They
//! receive an immutable `MenuView` and can never mutate navigation state.

use crate::domain::view::MenuView;
use crate::error::MenuResult;

/// Something that draws a frame of the menu
pub trait FrameObserver {
    /// Short name used when reporting failures
    fn name(&self) -> &'static str;

    /// Draw one frame
    fn render(&mut self, view: &MenuView) -> MenuResult<()>;

    /// Release anything held between frames
    fn teardown(&mut self) -> MenuResult<()> {
        Ok(())
    }
}
