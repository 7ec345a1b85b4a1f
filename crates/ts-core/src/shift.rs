//! Shift parameters assigned to each taxi once, at process creation.

use crate::SimTime;

/// The working window and activity level of one taxi for the day.
///
/// `end` is informational: agent processes do not stop at it, and the only
/// hard stop is the driver's day boundary.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shift {
    pub start:              SimTime,
    pub end:                SimTime,
    /// Mean number of trips for the shift.  Drives both the realised trip
    /// count and the mean trip / idle durations.
    pub expected_trip_rate: f64,
}

impl Shift {
    pub fn new(start_hour: f64, end_hour: f64, expected_trip_rate: f64) -> Self {
        Self {
            start: SimTime(start_hour),
            end: SimTime(end_hour),
            expected_trip_rate,
        }
    }

    /// Nominal shift length in hours.
    #[inline]
    pub fn length_hours(&self) -> f64 {
        self.end.0 - self.start.0
    }
}

/// One entry of the discrete shift-start distribution.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShiftCategory {
    /// Hour of day the shift starts.
    pub start_hour:     f64,
    /// Relative probability of drawing this category.
    pub weight:         f64,
    /// Mean trip count for shifts of this category.
    pub expected_trips: f64,
}

impl ShiftCategory {
    pub const fn new(start_hour: f64, weight: f64, expected_trips: f64) -> Self {
        Self { start_hour, weight, expected_trips }
    }

    /// Materialise a concrete shift of `length_hours` from this category.
    pub fn shift(&self, length_hours: f64) -> Shift {
        Shift::new(self.start_hour, self.start_hour + length_hours, self.expected_trips)
    }
}

/// Night, day and evening shifts: 25 % / 50 % / 25 % of the fleet.
pub const DEFAULT_SHIFT_CATEGORIES: [ShiftCategory; 3] = [
    ShiftCategory::new(0.0, 0.25, 8.0),
    ShiftCategory::new(8.0, 0.5, 30.0),
    ShiftCategory::new(16.0, 0.25, 15.0),
];
