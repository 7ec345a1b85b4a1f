//! `EventLogObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use log::warn;
use ts_core::Event;
use ts_sim::{RunSummary, SimObserver};

use crate::row::EventRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that formats every forwarded event and hands it to any
/// [`OutputWriter`] backend.
///
/// Errors from formatting or writing are stored internally because
/// `SimObserver` methods have no return value.  After `sim.run()` returns,
/// check for errors with [`take_error`][Self::take_error].
pub struct EventLogObserver<W: OutputWriter> {
    writer:     W,
    written:    u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> EventLogObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0, last_error: None }
    }

    /// Take the stored error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Rows successfully written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Unwrap the inner writer (e.g. to inspect its buffer after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!("event report failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for EventLogObserver<W> {
    fn on_event(&mut self, event: &Event) {
        let result = EventRow::from_event(event).and_then(|row| self.writer.write_event(&row));
        if result.is_ok() {
            self.written += 1;
        }
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _summary: &RunSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
