//! Session Use Case
//!
//! Drives one navigation session: redraw every observer, block for the next
//! input symbol, apply it, and repeat until `Back` is pressed at the root or
//! the input source closes.

use crate::domain::navigation::{MenuSystem, Step};
use crate::domain::ports::{EndReason, FrameObserver, InputSource, NavEvent, NavEventSink};
use crate::error::MenuResult;

/// Outcome of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionResult {
    /// Why the loop stopped
    pub reason: EndReason,
    /// Number of input symbols applied
    pub steps: usize,
    /// Number of frames offered to the observers
    pub frames: usize,
    /// Number of observer failures reported along the way
    pub render_failures: usize,
}

/// Session Use Case
///
/// Owns the frame observers for the lifetime of one session and tears them
/// down when it ends.
pub struct SessionUseCase {
    observers: Vec<Box<dyn FrameObserver>>,
}

impl SessionUseCase {
    pub fn new(observers: Vec<Box<dyn FrameObserver>>) -> Self {
        Self { observers }
    }

    /// Run `system` until it terminates or `input` closes.
    ///
    /// Observer failures never stop navigation; they are reported as
    /// `NavEvent::RenderFailed`. An input error ends the session and is
    /// returned after the observers have been torn down.
    pub fn execute(
        &mut self,
        system: &mut MenuSystem,
        input: &mut dyn InputSource,
        sink: &dyn NavEventSink,
    ) -> MenuResult<SessionResult> {
        sink.on_event(&NavEvent::SessionStarted {
            root: system.root(),
            label: system.tree().node(system.root()).label().to_string(),
        });

        let mut result = SessionResult {
            reason: EndReason::InputClosed,
            steps: 0,
            frames: 0,
            render_failures: 0,
        };

        let outcome = self.drive(system, input, sink, &mut result);
        result.render_failures += self.teardown(sink);
        outcome?;

        sink.on_event(&NavEvent::SessionEnded {
            reason: result.reason,
            steps: result.steps,
        });
        Ok(result)
    }

    fn drive(
        &mut self,
        system: &mut MenuSystem,
        input: &mut dyn InputSource,
        sink: &dyn NavEventSink,
        result: &mut SessionResult,
    ) -> MenuResult<()> {
        if system.is_terminated() {
            result.reason = EndReason::BackedOutOfRoot;
            return Ok(());
        }

        loop {
            result.render_failures += self.redraw(system, sink);
            result.frames += 1;

            let Some(symbol) = input.next_input()? else {
                result.reason = EndReason::InputClosed;
                return Ok(());
            };

            result.steps += 1;
            if system.handle(symbol, sink) == Step::Terminated {
                result.reason = EndReason::BackedOutOfRoot;
                return Ok(());
            }
        }
    }

    /// Offer the current view to every observer; returns the failure count
    fn redraw(&mut self, system: &MenuSystem, sink: &dyn NavEventSink) -> usize {
        let view = system.view();
        let mut failures = 0;
        for observer in &mut self.observers {
            if let Err(e) = observer.render(&view) {
                failures += 1;
                sink.on_event(&NavEvent::RenderFailed {
                    observer: observer.name().to_string(),
                    error: e.to_string(),
                });
            }
        }
        failures
    }

    fn teardown(&mut self, sink: &dyn NavEventSink) -> usize {
        let mut failures = 0;
        for observer in &mut self.observers {
            if let Err(e) = observer.teardown() {
                failures += 1;
                sink.on_event(&NavEvent::RenderFailed {
                    observer: observer.name().to_string(),
                    error: e.to_string(),
                });
            }
        }
        failures
    }
}
