//! Error types for ts-output.

use thiserror::Error;
use ts_core::TsError;

/// Errors that can occur when writing the event report.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// An event reached a sink with a timestamp the clock cannot show.
    #[error("cannot format event time: {0}")]
    Time(#[from] TsError),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
