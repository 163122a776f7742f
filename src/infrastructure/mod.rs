//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `display/` - OLED framebuffer, bitmap encoder, console renderer
//! - `input/` - Terminal and scripted input sources
//! - `events/` - Event sinks (console, JSON)

pub mod display;
pub mod events;
pub mod input;

// Re-export for convenience
pub use display::{ConsoleRenderer, OledRenderer};
pub use events::{ConsoleEventSink, JsonEventSink, JsonFrameObserver};
pub use input::{ScriptedInput, TerminalInput};
