//! CSV output backend.
//!
//! Creates `events.csv` in the configured output directory with columns
//! `agent_id,kind,hours,clock`.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult};

pub const EVENTS_FILE: &str = "events.csv";

/// Writes the event report to a CSV file.
pub struct CsvWriter {
    events:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create (or truncate) `events.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join(EVENTS_FILE))?;
        events.write_record(["agent_id", "kind", "hours", "clock"])?;
        Ok(Self { events, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.agent_id.to_string(),
            row.kind.to_owned(),
            format!("{:.4}", row.hours),
            row.clock.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        Ok(())
    }
}
