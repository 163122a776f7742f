//! JSON Event Sink
//!
//! Outputs navigation events as NDJSON for scripting and automation. The
//! companion frame observer puts every drawn view on the same stream, so a
//! consumer sees what the panel showed between transitions.

use crate::domain::ports::{FrameObserver, NavEvent, NavEventSink};
use crate::domain::tree::Binding;
use crate::domain::view::MenuView;
use crate::error::{MenuError, MenuResult};
use std::cell::RefCell;
use std::io::{self, Write};

/// Write one NDJSON record; raw-mode terminals need an explicit carriage return
fn write_record(
    writer: &mut dyn Write,
    value: &serde_json::Value,
    raw_mode: bool,
) -> io::Result<()> {
    if raw_mode {
        write!(writer, "{}\r\n", value)?;
    } else {
        writeln!(writer, "{}", value)?;
    }
    writer.flush()
}

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: RefCell<Box<dyn Write>>,
    raw_mode: bool,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(raw_mode: bool) -> Self {
        Self {
            writer: RefCell::new(Box::new(io::stdout())),
            raw_mode,
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + 'static>(writer: W, raw_mode: bool) -> Self {
        Self {
            writer: RefCell::new(Box::new(writer)),
            raw_mode,
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        let mut writer = self.writer.borrow_mut();
        let _ = write_record(&mut **writer, &event, self.raw_mode);
    }
}

/// Frame observer that emits each view as a `frame` record
pub struct JsonFrameObserver {
    out: Box<dyn Write>,
    raw_mode: bool,
}

impl JsonFrameObserver {
    pub fn stdout(raw_mode: bool) -> Self {
        Self {
            out: Box::new(io::stdout()),
            raw_mode,
        }
    }

    pub fn with_writer<W: Write + 'static>(writer: W, raw_mode: bool) -> Self {
        Self {
            out: Box::new(writer),
            raw_mode,
        }
    }
}

/// Render a view as a `frame` record
pub fn frame_to_json(view: &MenuView) -> MenuResult<serde_json::Value> {
    let view = serde_json::to_value(view).map_err(|e| MenuError::Io(e.into()))?;
    Ok(serde_json::json!({
        "event": "frame",
        "view": view,
    }))
}

impl FrameObserver for JsonFrameObserver {
    fn name(&self) -> &'static str {
        "json"
    }

    fn render(&mut self, view: &MenuView) -> MenuResult<()> {
        write_record(self.out.as_mut(), &frame_to_json(view)?, self.raw_mode)?;
        Ok(())
    }
}

/// Render an event as one JSON object
pub fn event_to_json(event: &NavEvent) -> serde_json::Value {
    match event {
        NavEvent::SessionStarted { root, label } => serde_json::json!({
            "event": "session_started",
            "root": root.index(),
            "label": label,
        }),

        NavEvent::Moved { node, selected } => serde_json::json!({
            "event": "moved",
            "node": node.index(),
            "selected": selected,
        }),

        NavEvent::Entered { from, to } => serde_json::json!({
            "event": "entered",
            "from": from.index(),
            "to": to.index(),
        }),

        NavEvent::Ascended { from, to } => serde_json::json!({
            "event": "ascended",
            "from": from.index(),
            "to": to.index(),
        }),

        NavEvent::ReturnedToRoot { from, root } => serde_json::json!({
            "event": "returned_to_root",
            "from": from.index(),
            "root": root.index(),
        }),

        NavEvent::HookFired {
            node,
            label,
            hook,
            binding,
        } => {
            let (kind, callback) = match binding {
                Binding::Default => ("default", None),
                Binding::Named(name) => ("named", Some(name.as_str())),
                Binding::Handler => ("handler", None),
            };
            serde_json::json!({
                "event": "hook_fired",
                "node": node.index(),
                "label": label,
                "hook": hook.as_str(),
                "binding": kind,
                "callback": callback,
            })
        }

        NavEvent::InputIgnored => serde_json::json!({
            "event": "input_ignored",
        }),

        NavEvent::RenderFailed { observer, error } => serde_json::json!({
            "event": "render_failed",
            "observer": observer,
            "error": error,
        }),

        NavEvent::SessionEnded { reason, steps } => serde_json::json!({
            "event": "session_ended",
            "reason": reason.as_str(),
            "steps": steps,
        }),
    }
}

impl NavEventSink for JsonEventSink {
    fn on_event(&self, event: &NavEvent) {
        self.write_event(event_to_json(event));
    }
}
