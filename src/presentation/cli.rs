//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Flags override the config file and `OLEDMENU_*` environment variables
//! - Without `--keys` the session is interactive and needs a terminal

use std::path::PathBuf;

use clap::Parser;

const KEY_HELP: &str = "Keys: ↑/k up, ↓/j down, →/l/Enter select, ←/h/Esc back, Ctrl+C quit.";

/// oledmenu - hierarchical menu navigator with a simulated OLED panel
#[derive(Parser, Debug)]
#[command(name = "oledmenu")]
#[command(author, version, about, long_about = None)]
#[command(after_help = KEY_HELP)]
pub struct Cli {
    /// YAML menu definition (defaults to the built-in demo menu)
    #[arg(short, long)]
    pub menu: Option<PathBuf>,

    /// Configuration file (defaults to ./oledmenu.toml, then the user config)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Bitmap file the panel is written to after every frame
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Replay a key script instead of reading the terminal (e.g. "ddcb")
    #[arg(short, long)]
    pub keys: Option<String>,

    /// Do not write the panel bitmap
    #[arg(long)]
    pub no_bitmap: bool,

    /// Emit navigation events as NDJSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Whether the session reads keys from the terminal
    pub fn is_interactive(&self) -> bool {
        self.keys.is_none()
    }
}
