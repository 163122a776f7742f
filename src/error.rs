//! Error types for oledmenu
//!
//! Library code returns `MenuError` through `MenuResult`; the binary wraps
//! everything in `anyhow` at the top level.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for menu operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for menu operations
#[derive(Error, Debug)]
pub enum MenuError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Menu definition could not be parsed
    #[error("invalid menu definition in {file}: {message}")]
    InvalidMenu { file: PathBuf, message: String },

    /// A callback binding names a handler nobody registered
    #[error("unknown callback '{name}' - register a handler or use an announcing registry")]
    UnknownCallback { name: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Display geometry cannot be represented
    #[error("invalid display geometry: {message}")]
    InvalidDisplay { message: String },

    /// Terminal could not be driven (raw mode, event read)
    #[error("terminal error: {0}")]
    Terminal(String),
}
