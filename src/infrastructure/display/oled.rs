//! Simulated OLED panel.
//!
//! Renders the first `viewport` children of the current node into the
//! framebuffer and persists each frame as a bitmap.

use std::path::{Path, PathBuf};

use crate::config::DisplayConfig;
use crate::domain::ports::FrameObserver;
use crate::domain::view::{MenuView, ViewItem};
use crate::error::{MenuError, MenuResult};

use super::bmp;
use super::framebuffer::{Framebuffer, GlyphBox};

/// Marker drawn in front of the highlighted row
pub const SELECTED_MARKER: char = '>';

/// Text of one panel row
pub fn row_text(item: &ViewItem) -> String {
    let marker = if item.selected { SELECTED_MARKER } else { ' ' };
    format!("{} {}", marker, item.label)
}

/// Framebuffer-backed renderer with an optional bitmap artifact
#[derive(Debug)]
pub struct OledRenderer {
    framebuffer: Option<Framebuffer>,
    viewport: usize,
    line_height: u32,
    glyph: GlyphBox,
    output: Option<PathBuf>,
    frames: usize,
}

impl OledRenderer {
    /// Allocate the panel described by `config`
    pub fn new(config: &DisplayConfig) -> MenuResult<Self> {
        config.validate()?;
        Ok(Self {
            framebuffer: Some(Framebuffer::allocate(config.width, config.height)),
            viewport: config.viewport,
            line_height: config.line_height,
            glyph: GlyphBox {
                width: config.glyph_width,
                height: config.glyph_height,
            },
            output: config.enabled.then(|| config.output.clone()),
            frames: 0,
        })
    }

    /// Same panel, but frames are kept in memory only
    pub fn in_memory(config: &DisplayConfig) -> MenuResult<Self> {
        let mut renderer = Self::new(config)?;
        renderer.output = None;
        Ok(renderer)
    }

    /// Where frames are persisted, if anywhere
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// The panel; `None` after teardown
    pub fn framebuffer(&self) -> Option<&Framebuffer> {
        self.framebuffer.as_ref()
    }

    /// Frames drawn so far
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Clear the panel and draw `view` into it without persisting
    pub fn draw(&mut self, view: &MenuView) -> MenuResult<&Framebuffer> {
        let fb = self
            .framebuffer
            .as_mut()
            .ok_or_else(|| MenuError::InvalidDisplay {
                message: "panel used after teardown".to_string(),
            })?;

        fb.clear();
        let mut y = 0u32;
        for item in view.visible(self.viewport) {
            if y >= fb.height() {
                break;
            }
            fb.draw_text(0, y, &row_text(item), self.glyph);
            y = y.saturating_add(self.line_height);
        }
        self.frames += 1;
        Ok(fb)
    }
}

impl FrameObserver for OledRenderer {
    fn name(&self) -> &'static str {
        "oled"
    }

    fn render(&mut self, view: &MenuView) -> MenuResult<()> {
        self.draw(view)?;
        if let (Some(path), Some(fb)) = (&self.output, &self.framebuffer) {
            bmp::write(path, fb)?;
        }
        Ok(())
    }

    fn teardown(&mut self) -> MenuResult<()> {
        self.framebuffer = None;
        Ok(())
    }
}
