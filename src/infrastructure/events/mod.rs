//! Event Sink Implementations
//!
//! Provides concrete implementations of NavEventSink:
//! - ConsoleEventSink: Human-readable log lines
//! - JsonEventSink: NDJSON output for scripting
//!
//! `JsonFrameObserver` shares the NDJSON stream and adds one `frame` record
//! per drawn view.

mod console;
mod json;

pub use console::{format_event, ConsoleEventSink};
pub use json::{event_to_json, frame_to_json, JsonEventSink, JsonFrameObserver};
