//! Simulation time model.
//!
//! # Design
//!
//! Time is a continuous value measured in hours since midnight of the
//! simulated day.  Agent processes advance it by whole-minute delays drawn
//! from their samplers:
//!
//!   t' = t + minutes / 60
//!
//! `SimTime` wraps the raw `f64` and gives it a total order (`f64::total_cmp`)
//! so it can key the scheduler's min-heap directly.  The day boundary is
//! compared numerically against [`DAY_END`]; the `HH:MM` rendering in
//! [`ClockTime`] is for reporting only and never drives control flow.

use std::cmp::Ordering;
use std::fmt;

use crate::{TsError, TsResult};

/// Minutes per simulated hour.
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// End of the simulated operating day (24:00).
pub const DAY_END: SimTime = SimTime(24.0);

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulation time in fractional hours since midnight.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    #[inline]
    pub fn hours(self) -> f64 {
        self.0
    }

    /// Return the time `minutes` after `self`.
    #[inline]
    pub fn after_minutes(self, minutes: f64) -> SimTime {
        SimTime(self.0 + minutes / MINUTES_PER_HOUR)
    }

    /// Render as a 24-hour wall clock reading.
    ///
    /// # Errors
    /// [`TsError::TimeOutOfRange`] when `self` lies outside `[00:00, 24:00)`.
    pub fn to_clock(self) -> TsResult<ClockTime> {
        ClockTime::try_from(self)
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}h", self.0)
    }
}

// ── ClockTime ─────────────────────────────────────────────────────────────────

/// A zero-padded `HH:MM` reading on a 24-hour clock.
///
/// Built by truncation: the integer part of the hour value is the hour, and
/// the integer part of the fractional remainder × 60 is the minute.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ClockTime {
    pub hour:   u8,
    pub minute: u8,
}

impl TryFrom<SimTime> for ClockTime {
    type Error = TsError;

    fn try_from(time: SimTime) -> TsResult<Self> {
        let hours = time.0;
        if !hours.is_finite() || hours < 0.0 || hours >= DAY_END.0 {
            return Err(TsError::TimeOutOfRange(hours));
        }
        let hour = hours.trunc();
        let minute = ((hours - hour) * MINUTES_PER_HOUR).trunc();
        Ok(ClockTime {
            hour:   hour as u8,
            minute: minute.min(59.0) as u8,
        })
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
