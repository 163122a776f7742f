//! Input sources
//!
//! - `keyboard` - crossterm key mapping and raw-mode terminal source
//! - `scripted` - fixed key scripts for non-interactive runs

pub mod keyboard;
pub mod scripted;

pub use keyboard::{is_interrupt, key_to_input, TerminalInput};
pub use scripted::ScriptedInput;
