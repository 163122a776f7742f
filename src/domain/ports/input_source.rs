//! Input Source Port
//!
//! Decouples the navigation engine from physical keys. Implementations map
//! whatever they read onto the five-symbol `Input` alphabet.

use crate::domain::navigation::Input;
use crate::error::MenuResult;

/// Blocking producer of navigation input
pub trait InputSource {
    /// Wait for the next input symbol.
    ///
    /// Returns `Ok(None)` once the source is exhausted or closed.
    fn next_input(&mut self) -> MenuResult<Option<Input>>;
}

