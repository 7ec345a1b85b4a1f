//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `TsError` as one variant
//! via `#[from]`.

use thiserror::Error;

/// The top-level error type for `ts-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum TsError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("time {0}h is outside the 24-hour clock")]
    TimeOutOfRange(f64),
}

/// Shorthand result type for all `ts-*` crates.
pub type TsResult<T> = Result<T, TsError>;
