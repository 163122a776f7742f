//! Configuration module for oledmenu
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (OLEDMENU_*)
//! 3. Explicit `--config` file, else `./oledmenu.toml`
//! 4. User config (~/.config/oledmenu/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::ConfigWarning;
pub use types::{Config, DisplayConfig, OutputConfig, Verbosity};
