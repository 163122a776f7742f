//! oledmenu - hierarchical menu navigation engine
//!
//! A tree of labelled nodes is navigated with four abstract inputs (up, down,
//! commit, back). After every step the current node is offered to frame
//! observers: a text console and a simulated monochrome OLED panel that
//! persists each frame as an 8-bit bitmap.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{SessionResult, SessionUseCase};
pub use config::{Config, Verbosity};
pub use domain::builder::{build_system, build_tree, CallbackRegistry, MenuSpec};
pub use domain::navigation::{Input, MenuSystem, Step};
pub use domain::tree::{Callback, Callbacks, Hook, MenuTree, NodeId};
pub use domain::view::MenuView;
pub use error::{MenuError, MenuResult};
