//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod frame_observer;
pub mod input_source;
pub mod nav_events;

pub use frame_observer::FrameObserver;
pub use input_source::InputSource;
pub use nav_events::{EndReason, NavEvent, NavEventSink, NoopEventSink, RecordingEventSink};
