//! The `OutputWriter` trait implemented by all report sinks.

use crate::{EventRow, OutputResult};

/// Trait implemented by the console and CSV writers.
///
/// Errors are stored by [`EventLogObserver`][crate::EventLogObserver] and
/// retrieved with its `take_error`, since observer callbacks cannot fail.
pub trait OutputWriter {
    /// Write one event row.
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: OutputWriter + ?Sized> OutputWriter for Box<W> {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        (**self).write_event(row)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}

/// Fans every row out to both writers, `A` first.
///
/// Both writers see every row even when one of them fails; the first error
/// is returned.
pub struct Tee<A, B>(pub A, pub B);

impl<A: OutputWriter, B: OutputWriter> OutputWriter for Tee<A, B> {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        let a = self.0.write_event(row);
        let b = self.1.write_event(row);
        a.and(b)
    }

    fn finish(&mut self) -> OutputResult<()> {
        let a = self.0.finish();
        let b = self.1.finish();
        a.and(b)
    }
}
