//! Property tests for oledmenu.
//!
//! Properties use randomized menus and input sequences to protect the
//! navigation laws and the fixed-size panel output.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/navigation.rs"]
mod navigation;

#[path = "properties/rendering.rs"]
mod rendering;
