//! `ts-output`: event report sinks for the taxisim simulator.
//!
//! | Writer            | Destination                                  |
//! |-------------------|----------------------------------------------|
//! | [`ConsoleWriter`] | any `io::Write`, `agent \| label \| HH:MM`    |
//! | [`CsvWriter`]     | `events.csv` in a directory                  |
//! | [`Tee`]           | two writers at once                          |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`EventLogObserver`], which implements `ts_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ts_output::{ConsoleWriter, EventLogObserver};
//!
//! let mut obs = EventLogObserver::new(ConsoleWriter::new(io::stdout().lock()));
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod console;
pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use console::ConsoleWriter;
pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::EventLogObserver;
pub use row::EventRow;
pub use writer::{OutputWriter, Tee};
