//! Integration tests for ts-output.

use ts_core::{AgentId, Event, EventKind, SimTime};

use crate::row::EventRow;

fn event(agent: u32, kind: EventKind, hours: f64) -> Event {
    Event::new(AgentId(agent), kind, SimTime(hours))
}

fn row(agent: u32, kind: EventKind, hours: f64) -> EventRow {
    EventRow::from_event(&event(agent, kind, hours)).unwrap()
}

// ── Row formatting ────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use super::*;
    use crate::OutputError;

    #[test]
    fn fields_from_event() {
        let r = row(2, EventKind::PickUp, 8.5);
        assert_eq!(r.agent_id, 2);
        assert_eq!(r.kind, "pick_up");
        assert_eq!(r.label, "pick up");
        assert_eq!(r.hours, 8.5);
        assert_eq!(r.clock.to_string(), "08:30");
    }

    #[test]
    fn clock_truncates() {
        assert_eq!(row(0, EventKind::DropOff, 8.999).clock.to_string(), "08:59");
        assert_eq!(row(0, EventKind::DropOff, 23.99).clock.to_string(), "23:59");
        assert_eq!(row(0, EventKind::StartShift, 0.0).clock.to_string(), "00:00");
    }

    #[test]
    fn midnight_or_later_is_an_error() {
        let r = EventRow::from_event(&event(0, EventKind::EndShift, 24.0));
        assert!(matches!(r, Err(OutputError::Time(_))));
        let r = EventRow::from_event(&event(0, EventKind::EndShift, -0.5));
        assert!(matches!(r, Err(OutputError::Time(_))));
    }
}

// ── Console ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod console_tests {
    use super::*;
    use crate::console::ConsoleWriter;
    use crate::writer::OutputWriter;

    fn render(rows: &[EventRow]) -> String {
        let mut w = ConsoleWriter::new(Vec::new());
        for r in rows {
            w.write_event(r).unwrap();
        }
        w.finish().unwrap();
        String::from_utf8(w.into_inner()).unwrap()
    }

    #[test]
    fn line_layout() {
        let text = render(&[row(2, EventKind::PickUp, 8.5)]);
        assert_eq!(text, "2 | pick up     | 08:30\n");
    }

    #[test]
    fn label_column_is_fixed_width() {
        let text = render(&[
            row(0, EventKind::StartShift, 8.0),
            row(0, EventKind::PickUp, 8.1),
            row(0, EventKind::DropOff, 8.3),
            row(0, EventKind::EndShift, 15.75),
        ]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "0 | start shift | 08:00");
        assert_eq!(lines[2], "0 | drop off    | 08:18");
        assert_eq!(lines[3], "0 | end shift   | 15:45");
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }

    #[test]
    fn finish_idempotent() {
        let mut w = ConsoleWriter::new(Vec::new());
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::{CsvWriter, EVENTS_FILE};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_file_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(EVENTS_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(EVENTS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["agent_id", "kind", "hours", "clock"]);
    }

    #[test]
    fn csv_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_event(&row(7, EventKind::StartShift, 16.0)).unwrap();
        w.write_event(&row(7, EventKind::PickUp, 16.25)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(EVENTS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "7");
        assert_eq!(&rows[0][1], "start_shift");
        assert_eq!(&rows[1][1], "pick_up");
        assert_eq!(&rows[1][2], "16.2500");
        assert_eq!(&rows[1][3], "16:15");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("nope")).is_err());
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use std::io;

    use ts_sim::{RunSummary, SimObserver};

    use super::*;
    use crate::console::ConsoleWriter;
    use crate::observer::EventLogObserver;
    use crate::writer::{OutputWriter, Tee};
    use crate::{OutputError, OutputResult};

    /// Accepts `capacity` rows, then fails every write.
    struct Flaky {
        capacity: usize,
        rows:     Vec<EventRow>,
        finished: bool,
    }

    impl Flaky {
        fn new(capacity: usize) -> Self {
            Self { capacity, rows: Vec::new(), finished: false }
        }
    }

    impl OutputWriter for Flaky {
        fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
            if self.rows.len() == self.capacity {
                return Err(OutputError::Io(io::Error::other(format!("full at {}", self.capacity))));
            }
            self.rows.push(*row);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn forwards_every_event_and_finishes() {
        let mut obs = EventLogObserver::new(Flaky::new(10));
        obs.on_event(&event(1, EventKind::StartShift, 0.0));
        obs.on_event(&event(1, EventKind::PickUp, 0.1));
        obs.on_sim_end(&RunSummary::default());

        assert!(obs.take_error().is_none());
        assert_eq!(obs.written(), 2);
        let w = obs.into_writer();
        assert!(w.finished);
        assert_eq!(w.rows[1].kind, "pick_up");
    }

    #[test]
    fn keeps_only_the_first_error() {
        let mut obs = EventLogObserver::new(Flaky::new(1));
        obs.on_event(&event(0, EventKind::PickUp, 1.0));
        obs.on_event(&event(0, EventKind::DropOff, 2.0)); // full at 1
        obs.on_event(&event(0, EventKind::EndShift, 30.0)); // out of range

        assert_eq!(obs.written(), 1);
        let err = obs.take_error().expect("first error stored");
        assert!(matches!(err, OutputError::Io(_)), "{err}");
        assert!(obs.take_error().is_none(), "take_error clears the slot");
    }

    #[test]
    fn unformattable_time_is_reported() {
        let mut obs = EventLogObserver::new(ConsoleWriter::new(Vec::new()));
        obs.on_event(&event(0, EventKind::EndShift, 24.5));
        assert!(matches!(obs.take_error(), Some(OutputError::Time(_))));
        assert!(obs.into_writer().into_inner().is_empty());
    }

    #[test]
    fn tee_feeds_both_writers_despite_a_failure() {
        let mut tee = Tee(Flaky::new(0), Flaky::new(5));
        let result = tee.write_event(&row(3, EventKind::PickUp, 4.0));
        assert!(result.is_err());
        assert_eq!(tee.0.rows.len(), 0);
        assert_eq!(tee.1.rows.len(), 1);
        tee.finish().unwrap();
        assert!(tee.0.finished && tee.1.finished);
    }
}

// ── End to end ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod integration {
    use ts_core::{FleetConfig, Shift};
    use ts_process::{FixedShift, MeanSamplers, SequentialIdentities};
    use ts_sim::SimBuilder;

    use crate::console::ConsoleWriter;
    use crate::csv::{CsvWriter, EVENTS_FILE};
    use crate::observer::EventLogObserver;
    use crate::writer::Tee;

    #[test]
    fn three_day_shifts_to_console_and_csv() {
        let config = FleetConfig { taxi_count: 3, ..FleetConfig::default() };
        let mut sim = SimBuilder::new(config)
            .unwrap()
            .identities(SequentialIdentities::new(3))
            .shifts(FixedShift(Shift::new(8.0, 15.5, 30.0)))
            .samplers(MeanSamplers)
            .build()
            .unwrap();

        let dir = tempfile::tempdir().expect("create temp dir");
        let writer = Tee(ConsoleWriter::new(Vec::new()), CsvWriter::new(dir.path()).unwrap());
        let mut obs = EventLogObserver::new(writer);
        sim.run(&mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");
        assert_eq!(obs.written(), 186);

        let Tee(console, _csv) = obs.into_writer();
        let text = String::from_utf8(console.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 186);
        assert_eq!(lines[0], "0 | start shift | 08:00");
        assert_eq!(lines[1], "1 | start shift | 08:00");
        // 30 trips of 13 min plus 32 idle gaps of 60/29 min after 08:00.
        assert_eq!(lines[185], "2 | end shift   | 15:36");

        let mut rdr = csv::Reader::from_path(dir.path().join(EVENTS_FILE)).unwrap();
        assert_eq!(rdr.records().count(), 186);
    }

    #[test]
    fn late_shift_reports_every_forwarded_event() {
        let config = FleetConfig { taxi_count: 1, ..FleetConfig::default() };
        let mut sim = SimBuilder::new(config)
            .unwrap()
            .shifts(FixedShift(Shift::new(20.0, 27.5, 30.0)))
            .samplers(MeanSamplers)
            .build()
            .unwrap();

        let mut obs = EventLogObserver::new(ConsoleWriter::new(Vec::new()));
        let summary = sim.run(&mut obs);
        assert!(obs.take_error().is_none(), "nothing past midnight reaches the sink");
        assert!(summary.emitted > 0);
        assert_eq!(obs.written(), summary.emitted);
    }

    #[test]
    fn config_past_midnight_never_reaches_the_sink() {
        let config = FleetConfig { taxi_count: 1, day_end_hours: 30.0, ..FleetConfig::default() };
        assert!(SimBuilder::new(config).is_err());
    }
}
