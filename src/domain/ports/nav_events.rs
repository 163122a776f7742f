//! Navigation Event Port
//!
//! Provides an observable interface for the navigation engine.
//! Enables console logging, JSON event streams, and test assertions.

use crate::domain::tree::{Binding, Hook, NodeId};

/// Why a navigation session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// `Back` was pressed at the root
    BackedOutOfRoot,
    /// The input source has nothing more to give
    InputClosed,
}

impl EndReason {
    pub fn as_str(self) -> &'static str {
        match self {
            EndReason::BackedOutOfRoot => "back_at_root",
            EndReason::InputClosed => "input_closed",
        }
    }
}

/// Event emitted during navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// Session started at the root
    SessionStarted { root: NodeId, label: String },

    /// Selection inside the current node changed
    Moved { node: NodeId, selected: usize },

    /// Cursor descended into a submenu
    Entered { from: NodeId, to: NodeId },

    /// Cursor ascended to the parent
    Ascended { from: NodeId, to: NodeId },

    /// Cursor jumped back to the root after a leaf action
    ReturnedToRoot { from: NodeId, root: NodeId },

    /// A lifecycle callback fired
    HookFired {
        node: NodeId,
        label: String,
        hook: Hook,
        binding: Binding,
    },

    /// Input had no effect on the current node
    InputIgnored,

    /// An observer failed to draw the frame
    RenderFailed { observer: String, error: String },

    /// Session finished
    SessionEnded { reason: EndReason, steps: usize },
}

/// Trait for receiving navigation events
///
/// Implementations can be:
/// - ConsoleEventSink: human-readable lines on stderr
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: Silent operation
pub trait NavEventSink {
    /// Handle a navigation event
    fn on_event(&self, event: &NavEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl NavEventSink for NoopEventSink {
    fn on_event(&self, _event: &NavEvent) {}
}

/// Event sink that records everything it sees
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: std::cell::RefCell<Vec<NavEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded events
    pub fn events(&self) -> Vec<NavEvent> {
        self.events.borrow().clone()
    }

    /// Hooks fired so far, as `(label, hook)` pairs
    pub fn hooks(&self) -> Vec<(String, Hook)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                NavEvent::HookFired { label, hook, .. } => Some((label.clone(), *hook)),
                _ => None,
            })
            .collect()
    }
}

impl NavEventSink for RecordingEventSink {
    fn on_event(&self, event: &NavEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
