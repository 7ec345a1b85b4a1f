//! Fluent builder for constructing a [`FleetSim`] of taxi processes.

use log::debug;
use ts_core::{FleetConfig, SimRng};
use ts_process::{
    IdentitySource, SamplerFactory, ShiftSource, ShuffledIdentities, StochasticSamplers,
    TaxiProcess, WeightedShifts,
};

use crate::{FleetSim, SimError, SimResult};

/// Child-stream offsets under the root `SimRng`.
const IDENTITY_STREAM: u64 = 1;
const SHIFT_STREAM: u64 = 2;

/// Fluent builder for `FleetSim<TaxiProcess<F::Sampler>>`.
///
/// # Defaults
///
/// | Input          | Default from [`SimBuilder::new`]                      |
/// |----------------|-------------------------------------------------------|
/// | identities     | [`ShuffledIdentities`] over `0..taxi_count`           |
/// | shifts         | [`WeightedShifts`] over `config.shift_categories`     |
/// | samplers       | [`StochasticSamplers`] seeded with `config.seed`      |
///
/// Each can be swapped for any other implementation of its trait.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)?
///     .shifts(FixedShift(Shift::new(8.0, 15.5, 30.0)))
///     .samplers(MeanSamplers)
///     .build()?;
/// let summary = sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<I, S, F> {
    config:     FleetConfig,
    identities: I,
    shifts:     S,
    samplers:   F,
}

impl SimBuilder<ShuffledIdentities, WeightedShifts, StochasticSamplers> {
    /// Validate `config` and derive the default allocators from its seed.
    pub fn new(config: FleetConfig) -> SimResult<Self> {
        config.validate()?;
        let taxi_count = config.fleet_size()?;

        let mut root = SimRng::new(config.seed);
        let identities = ShuffledIdentities::new(taxi_count, &mut root.child(IDENTITY_STREAM));
        let shifts = WeightedShifts::from_config(&config, root.child(SHIFT_STREAM))?;
        let samplers = StochasticSamplers::new(config.seed);

        Ok(Self { config, identities, shifts, samplers })
    }
}

impl<I, S, F> SimBuilder<I, S, F>
where
    I: IdentitySource,
    S: ShiftSource,
    F: SamplerFactory,
{
    /// Replace the identity allocator.
    pub fn identities<I2: IdentitySource>(self, identities: I2) -> SimBuilder<I2, S, F> {
        SimBuilder {
            config: self.config,
            identities,
            shifts: self.shifts,
            samplers: self.samplers,
        }
    }

    /// Replace the shift allocator.
    pub fn shifts<S2: ShiftSource>(self, shifts: S2) -> SimBuilder<I, S2, F> {
        SimBuilder {
            config: self.config,
            identities: self.identities,
            shifts,
            samplers: self.samplers,
        }
    }

    /// Replace the per-agent sampler factory.
    pub fn samplers<F2: SamplerFactory>(self, samplers: F2) -> SimBuilder<I, S, F2> {
        SimBuilder {
            config: self.config,
            identities: self.identities,
            shifts: self.shifts,
            samplers,
        }
    }

    /// Draw one identity and one shift per taxi, construct every process,
    /// and seed the scheduler.
    ///
    /// # Errors
    /// - [`SimError::IdentitiesExhausted`] if the identity source runs dry.
    /// - [`SimError::Process`] if any shift is degenerate.
    pub fn build(mut self) -> SimResult<FleetSim<TaxiProcess<F::Sampler>>> {
        let expected = self.config.taxi_count;
        let mut processes = Vec::with_capacity(expected);

        for supplied in 0..expected {
            let agent = self
                .identities
                .next_id()
                .ok_or(SimError::IdentitiesExhausted { expected, supplied })?;
            let shift = self.shifts.next_shift();
            debug!(
                "agent {agent}: shift {:.1}h-{:.1}h, {} expected trips",
                shift.start.hours(),
                shift.end.hours(),
                shift.expected_trip_rate,
            );
            let process = TaxiProcess::new(
                agent,
                shift,
                self.config.trip_count_std_dev,
                &mut self.samplers,
            )?;
            processes.push(process);
        }

        Ok(FleetSim::new(self.config, processes))
    }
}
