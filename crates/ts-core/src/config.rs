//! Top-level fleet configuration.

use crate::shift::DEFAULT_SHIFT_CATEGORIES;
use crate::{DAY_END, ShiftCategory, SimTime, TsError, TsResult};

/// Everything needed to build and run one simulated day.
///
/// Typically built from defaults plus CLI overrides, or loaded from a JSON
/// file by the application crate (requires the `serde` feature).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FleetConfig {
    /// Number of taxis (agent processes) in the fleet.
    pub taxi_count: usize,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Events at or after this hour are never reported.  Default: 24.0.
    pub day_end_hours: f64,

    /// Nominal shift length added to a category's start hour.  Default: 7.5.
    pub shift_length_hours: f64,

    /// Standard deviation of the Normal draw for the realised trip count.
    pub trip_count_std_dev: f64,

    /// Discrete shift-start distribution sampled once per taxi.
    pub shift_categories: Vec<ShiftCategory>,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            taxi_count:         3,
            seed:               42,
            day_end_hours:      24.0,
            shift_length_hours: 7.5,
            trip_count_std_dev: 2.0,
            shift_categories:   DEFAULT_SHIFT_CATEGORIES.to_vec(),
        }
    }
}

impl FleetConfig {
    /// The reporting boundary as a `SimTime`.
    #[inline]
    pub fn day_end(&self) -> SimTime {
        SimTime(self.day_end_hours)
    }

    /// `taxi_count` as the width of the agent id space.
    pub fn fleet_size(&self) -> TsResult<u32> {
        u32::try_from(self.taxi_count).map_err(|_| {
            TsError::Config(format!("taxi_count {} exceeds the agent id space", self.taxi_count))
        })
    }

    /// Check every field for values that would make the run meaningless or
    /// divide by zero downstream.
    pub fn validate(&self) -> TsResult<()> {
        if self.taxi_count == 0 {
            return Err(TsError::Config("taxi_count must be at least 1".into()));
        }
        self.fleet_size()?;
        if !(self.day_end_hours.is_finite() && self.day_end_hours > 0.0 && self.day_end() <= DAY_END) {
            return Err(TsError::Config(format!(
                "day_end_hours must be in (0, {}], got {}",
                DAY_END.hours(),
                self.day_end_hours
            )));
        }
        if !(self.shift_length_hours.is_finite() && self.shift_length_hours >= 0.0) {
            return Err(TsError::Config(format!(
                "shift_length_hours must be non-negative, got {}",
                self.shift_length_hours
            )));
        }
        if !(self.trip_count_std_dev.is_finite() && self.trip_count_std_dev >= 0.0) {
            return Err(TsError::Config(format!(
                "trip_count_std_dev must be non-negative, got {}",
                self.trip_count_std_dev
            )));
        }
        if self.shift_categories.is_empty() {
            return Err(TsError::Config("at least one shift category is required".into()));
        }
        for cat in &self.shift_categories {
            if !(cat.start_hour.is_finite() && cat.start_hour >= 0.0 && SimTime(cat.start_hour) < DAY_END) {
                return Err(TsError::Config(format!(
                    "shift category start hour {} is outside [0, {})",
                    cat.start_hour,
                    DAY_END.hours()
                )));
            }
            if !(cat.weight.is_finite() && cat.weight >= 0.0) {
                return Err(TsError::Config(format!(
                    "shift category at {}h has invalid weight {}",
                    cat.start_hour, cat.weight
                )));
            }
            if !(cat.expected_trips.is_finite() && cat.expected_trips > 1.0) {
                return Err(TsError::Config(format!(
                    "shift category at {}h expects {} trips; must be greater than 1",
                    cat.start_hour, cat.expected_trips
                )));
            }
        }
        if self.shift_categories.iter().all(|c| c.weight == 0.0) {
            return Err(TsError::Config("shift category weights sum to zero".into()));
        }
        Ok(())
    }
}
