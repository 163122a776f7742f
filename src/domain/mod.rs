//! Domain Layer
//!
//! The menu model and its navigation rules, free of terminal and file I/O.
//!
//! ## Structure
//!
//! - `tree` - Node arena, parent links, lifecycle callbacks
//! - `navigation` - Input alphabet and the cursor state machine
//! - `view` - Read-only snapshot handed to renderers
//! - `builder` - Declarative menu description and tree construction
//! - `ports` - Interface definitions for infrastructure

pub mod builder;
pub mod navigation;
pub mod ports;
pub mod tree;
pub mod view;
