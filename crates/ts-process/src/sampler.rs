//! Trip samplers: the stochastic model behind each taxi's timeline.
//!
//! A shift's expected trip rate `r` fixes three means:
//!
//! ```text
//! trip count       ~ round(Normal(r, σ))          σ = FleetConfig::trip_count_std_dev
//! trip duration    ~ Poisson(6.5 / r * 60)   min
//! idle gap         ~ Poisson(60 / (r - 1))   min
//! ```
//!
//! The gap mean is undefined at `r = 1`, so [`ShiftTiming::for_shift`]
//! rejects any rate that is not strictly greater than one.
//!
//! [`TripSampler`] is the seam: [`StochasticSampler`] draws from the
//! distributions above using the agent's own RNG, [`MeanSampler`] returns the
//! means verbatim for deterministic scenarios.

use rand_distr::{Normal, Poisson};
use ts_core::{AgentId, AgentRng, Shift};

use crate::{ProcessError, ProcessResult};

/// Hours of a shift spent carrying passengers, spread evenly over the
/// expected trips.
pub const DRIVING_HOURS_PER_SHIFT: f64 = 6.5;

// ── ShiftTiming ───────────────────────────────────────────────────────────────

/// Means derived from one shift's expected trip rate.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ShiftTiming {
    pub expected_trips:     f64,
    pub trip_count_std_dev: f64,
    /// Mean minutes between pick-up and drop-off.
    pub trip_minutes:       f64,
    /// Mean idle minutes between consecutive events outside a trip.
    pub gap_minutes:        f64,
}

impl ShiftTiming {
    /// Derive the timing means for `shift`.
    ///
    /// # Errors
    /// - [`ProcessError::DegenerateTripRate`] when the rate is `<= 1` or not
    ///   finite.
    /// - [`ProcessError::ShiftStart`] when the shift starts before midnight.
    pub fn for_shift(agent: AgentId, shift: &Shift, trip_count_std_dev: f64) -> ProcessResult<Self> {
        let start = shift.start.hours();
        if !(start.is_finite() && start >= 0.0) {
            return Err(ProcessError::ShiftStart { agent, start });
        }
        let rate = shift.expected_trip_rate;
        if !(rate.is_finite() && rate > 1.0) {
            return Err(ProcessError::DegenerateTripRate { agent, rate });
        }
        Ok(Self {
            expected_trips: rate,
            trip_count_std_dev,
            trip_minutes: DRIVING_HOURS_PER_SHIFT / rate * 60.0,
            gap_minutes: 60.0 / (rate - 1.0),
        })
    }
}

// ── TripSampler ───────────────────────────────────────────────────────────────

/// Per-agent source of the random quantities a taxi process consumes.
pub trait TripSampler {
    /// Realised number of trips, already rounded.  May be negative; the
    /// process clamps it.
    fn trip_count(&mut self) -> i64;

    /// Minutes from pick-up to drop-off.
    fn trip_minutes(&mut self) -> f64;

    /// Idle minutes before the next pick-up or the end of shift.
    fn gap_minutes(&mut self) -> f64;
}

/// Builds one [`TripSampler`] per agent.
pub trait SamplerFactory {
    type Sampler: TripSampler;

    fn sampler(&mut self, agent: AgentId, timing: &ShiftTiming) -> ProcessResult<Self::Sampler>;
}

// ── StochasticSampler ─────────────────────────────────────────────────────────

/// Normal trip count, Poisson durations, driven by a private [`AgentRng`].
pub struct StochasticSampler {
    rng:   AgentRng,
    count: Normal<f64>,
    trip:  Poisson<f64>,
    gap:   Poisson<f64>,
}

impl StochasticSampler {
    pub fn new(agent: AgentId, timing: &ShiftTiming, rng: AgentRng) -> ProcessResult<Self> {
        let invalid = |what: &'static str, reason: String| ProcessError::Distribution { agent, what, reason };
        Ok(Self {
            rng,
            count: Normal::new(timing.expected_trips, timing.trip_count_std_dev)
                .map_err(|e| invalid("trip count", e.to_string()))?,
            trip: Poisson::new(timing.trip_minutes)
                .map_err(|e| invalid("trip duration", e.to_string()))?,
            gap: Poisson::new(timing.gap_minutes)
                .map_err(|e| invalid("idle gap", e.to_string()))?,
        })
    }
}

impl TripSampler for StochasticSampler {
    fn trip_count(&mut self) -> i64 {
        self.rng.sample(&self.count).round() as i64
    }

    fn trip_minutes(&mut self) -> f64 {
        self.rng.sample(&self.trip)
    }

    fn gap_minutes(&mut self) -> f64 {
        self.rng.sample(&self.gap)
    }
}

/// Seeds a [`StochasticSampler`] per agent from the run's global seed.
pub struct StochasticSamplers {
    seed: u64,
}

impl StochasticSamplers {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl SamplerFactory for StochasticSamplers {
    type Sampler = StochasticSampler;

    fn sampler(&mut self, agent: AgentId, timing: &ShiftTiming) -> ProcessResult<StochasticSampler> {
        StochasticSampler::new(agent, timing, AgentRng::new(self.seed, agent))
    }
}

// ── MeanSampler ───────────────────────────────────────────────────────────────

/// Always returns the mean of each distribution; trip count is the expected
/// rate rounded to the nearest integer.
#[derive(Copy, Clone, Debug)]
pub struct MeanSampler {
    timing: ShiftTiming,
}

impl MeanSampler {
    pub fn new(timing: ShiftTiming) -> Self {
        Self { timing }
    }
}

impl TripSampler for MeanSampler {
    fn trip_count(&mut self) -> i64 {
        self.timing.expected_trips.round() as i64
    }

    fn trip_minutes(&mut self) -> f64 {
        self.timing.trip_minutes
    }

    fn gap_minutes(&mut self) -> f64 {
        self.timing.gap_minutes
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct MeanSamplers;

impl SamplerFactory for MeanSamplers {
    type Sampler = MeanSampler;

    fn sampler(&mut self, _agent: AgentId, timing: &ShiftTiming) -> ProcessResult<MeanSampler> {
        Ok(MeanSampler::new(*timing))
    }
}
