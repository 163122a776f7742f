//! Console Event Sink
//!
//! Human-readable log lines. Hook messages follow the classic menu wording
//! (`[INFO] Entered a menu.`); cursor transitions only show up when verbose.

use crate::config::Verbosity;
use crate::domain::ports::{NavEvent, NavEventSink};
use crate::domain::tree::{Binding, Hook};
use std::cell::RefCell;
use std::io::{self, Write};

/// Event sink that prints log lines, by default to stderr
pub struct ConsoleEventSink {
    writer: RefCell<Box<dyn Write>>,
    verbosity: Verbosity,
    raw_mode: bool,
}

impl ConsoleEventSink {
    pub fn stderr(verbosity: Verbosity, raw_mode: bool) -> Self {
        Self {
            writer: RefCell::new(Box::new(io::stderr())),
            verbosity,
            raw_mode,
        }
    }

    /// Console sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + 'static>(writer: W, verbosity: Verbosity) -> Self {
        Self {
            writer: RefCell::new(Box::new(writer)),
            verbosity,
            raw_mode: false,
        }
    }

    fn write_line(&self, line: &str) {
        let mut writer = self.writer.borrow_mut();
        let _ = if self.raw_mode {
            write!(writer, "{}\r\n", line)
        } else {
            writeln!(writer, "{}", line)
        };
        let _ = writer.flush();
    }
}

fn hook_tag(hook: Hook) -> &'static str {
    match hook {
        Hook::Action => "[ACTION]",
        Hook::Enter | Hook::Exit => "[INFO]",
    }
}

/// Format an event, returning the least verbosity at which it is shown
pub fn format_event(event: &NavEvent) -> (Verbosity, String) {
    match event {
        NavEvent::HookFired {
            label,
            hook,
            binding,
            ..
        } => match binding {
            Binding::Default => (
                Verbosity::Normal,
                format!("{} {}", hook_tag(*hook), hook.default_message()),
            ),
            Binding::Named(name) => (
                Verbosity::Normal,
                format!("{} {} ({} '{}')", hook_tag(*hook), name, hook.as_str(), label),
            ),
            Binding::Handler => (
                Verbosity::Verbose,
                format!("[DEBUG] {} handler ran for '{}'", hook.as_str(), label),
            ),
        },

        NavEvent::RenderFailed { observer, error } => (
            Verbosity::Normal,
            format!("[WARN] {} renderer failed: {}", observer, error),
        ),

        NavEvent::SessionStarted { root, label } => (
            Verbosity::Verbose,
            format!("[DEBUG] session started at '{}' ({})", label, root),
        ),

        NavEvent::Moved { node, selected } => (
            Verbosity::Verbose,
            format!("[DEBUG] {} selection -> {}", node, selected),
        ),

        NavEvent::Entered { from, to } => (
            Verbosity::Verbose,
            format!("[DEBUG] entered {} from {}", to, from),
        ),

        NavEvent::Ascended { from, to } => (
            Verbosity::Verbose,
            format!("[DEBUG] back to {} from {}", to, from),
        ),

        NavEvent::ReturnedToRoot { from, root } => (
            Verbosity::Verbose,
            format!("[DEBUG] returned to root {} from {}", root, from),
        ),

        NavEvent::InputIgnored => (Verbosity::Debug, "[DEBUG] input ignored".to_string()),

        NavEvent::SessionEnded { reason, steps } => (
            Verbosity::Verbose,
            format!("[DEBUG] session ended ({}) after {} steps", reason.as_str(), steps),
        ),
    }
}

impl NavEventSink for ConsoleEventSink {
    fn on_event(&self, event: &NavEvent) {
        if self.verbosity == Verbosity::Quiet {
            return;
        }
        let (level, line) = format_event(event);
        if self.verbosity >= level {
            self.write_line(&line);
        }
    }
}
