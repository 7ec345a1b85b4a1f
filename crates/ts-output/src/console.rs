//! Human-readable text report, one line per event.
//!
//! ```text
//! 2 | start shift | 08:00
//! 2 | pick up     | 08:02
//! ```

use std::io::Write;

use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult};

/// Width of the kind column; fits the longest label (`start shift`).
const LABEL_WIDTH: usize = 11;

/// Writes `agent | label | HH:MM` lines to any [`Write`] sink.
pub struct ConsoleWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> ConsoleWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputWriter for ConsoleWriter<W> {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        writeln!(
            self.out,
            "{} | {:<width$} | {}",
            row.agent_id,
            row.label,
            row.clock,
            width = LABEL_WIDTH,
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
