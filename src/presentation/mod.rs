//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the session with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command-line surface
//! - `factory` - Wires config, observers, input and event sink together
//!
//! ## Usage
//!
//! ```ignore
//! use oledmenu::presentation::factory;
//!
//! let mut session = factory::create_session_use_case(&config, false, false)?;
//! let result = session.execute(&mut system, input.as_mut(), sink.as_ref())?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::Cli;
