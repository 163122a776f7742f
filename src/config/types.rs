//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, MenuResult};

use super::loader::{self, ConfigWarning};

/// Largest dimension accepted for the simulated panel
pub const MAX_DIMENSION: u32 = 4096;

/// Simulated OLED panel configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    /// Maximum number of child rows drawn per frame
    #[serde(default = "default_viewport")]
    pub viewport: usize,

    /// Vertical advance between rows, in pixels
    #[serde(default = "default_line_height")]
    pub line_height: u32,

    #[serde(default = "default_glyph_width")]
    pub glyph_width: u32,

    #[serde(default = "default_glyph_height")]
    pub glyph_height: u32,

    /// Bitmap written after every frame
    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            viewport: default_viewport(),
            line_height: default_line_height(),
            glyph_width: default_glyph_width(),
            glyph_height: default_glyph_height(),
            output: default_output(),
            enabled: true,
        }
    }
}

impl DisplayConfig {
    /// Reject geometry that cannot be drawn or encoded
    pub fn validate(&self) -> MenuResult<()> {
        let invalid = |message: String| Err(MenuError::InvalidDisplay { message });

        if self.width == 0 || self.height == 0 {
            return invalid(format!(
                "panel must be at least 1x1, got {}x{}",
                self.width, self.height
            ));
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return invalid(format!(
                "panel {}x{} exceeds {}x{}",
                self.width, self.height, MAX_DIMENSION, MAX_DIMENSION
            ));
        }
        if self.viewport == 0 {
            return invalid("viewport must show at least one row".to_string());
        }
        if self.line_height == 0 || self.glyph_width == 0 || self.glyph_height == 0 {
            return invalid("line height and glyph box must be non-zero".to_string());
        }
        Ok(())
    }
}

fn default_width() -> u32 {
    96
}

fn default_height() -> u32 {
    32
}

fn default_viewport() -> usize {
    4
}

fn default_line_height() -> u32 {
    8
}

fn default_glyph_width() -> u32 {
    1
}

fn default_glyph_height() -> u32 {
    6
}

fn default_output() -> PathBuf {
    PathBuf::from("oled.bmp")
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    /// Draw the text console view
    #[serde(default = "default_true")]
    pub console: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            console: true,
        }
    }
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Map a repeated `-v` count onto a level, never going below `self`
    pub fn raised_by(self, count: u8) -> Self {
        match count {
            0 => self,
            1 => self.max(Verbosity::Verbose),
            _ => Verbosity::Debug,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MenuResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MenuResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from working-directory config, user config, or defaults
    pub fn load_or_default(working_dir: Option<&Path>) -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default(working_dir)
    }

    /// Apply environment variable overrides (OLEDMENU_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
