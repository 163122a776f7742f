//! Application Layer
//!
//! Use cases that orchestrate the navigation flow.
//! This layer:
//! - Depends on Domain layer (tree, navigation, ports)
//! - Does NOT contain navigation rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SessionUseCase` - Redraw, read input, step, until the session ends

pub mod session;

pub use session::{SessionResult, SessionUseCase};
