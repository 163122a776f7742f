//! Display backends
//!
//! - `framebuffer` - pixel buffer of the simulated panel
//! - `bmp` - bitmap encoding of a framebuffer
//! - `oled` - panel renderer that persists every frame
//! - `console` - text renderer for the terminal

pub mod bmp;
pub mod console;
pub mod framebuffer;
pub mod oled;

pub use console::ConsoleRenderer;
pub use framebuffer::{Framebuffer, GlyphBox};
pub use oled::OledRenderer;
