//! The `FleetSim` struct and its merge loop.

use log::{debug, info};
use ts_core::{EventSource, FleetConfig};
use ts_schedule::EventScheduler;

use crate::{RunSummary, SimObserver, StopReason};

/// The simulation driver.
///
/// Owns the scheduler (and through it every agent process) and runs the
/// merge loop:
///
/// 1. **Peek** the frontier minimum.
/// 2. **Stop** if the frontier is empty, or the minimum is at or past
///    `config.day_end()`.  The crossing event is left pending, so no agent
///    is resumed past the boundary.
/// 3. **Pop** the event, which refills its agent's slot.
/// 4. **Emit** it to the observer and repeat.
///
/// Create via [`SimBuilder`][crate::SimBuilder], or directly with
/// [`FleetSim::new`] for hand-built processes.
pub struct FleetSim<P: EventSource> {
    pub config:    FleetConfig,
    pub scheduler: EventScheduler<P>,
}

impl<P: EventSource> FleetSim<P> {
    /// Seed a scheduler with `processes` and wrap it in a driver.
    pub fn new<I: IntoIterator<Item = P>>(config: FleetConfig, processes: I) -> Self {
        Self {
            config,
            scheduler: EventScheduler::from_processes(processes),
        }
    }

    /// Run until the day boundary or until every agent is exhausted.
    ///
    /// Every event strictly before the boundary reaches `observer` exactly
    /// once, in non-decreasing time order.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunSummary {
        let day_end = self.config.day_end();
        let active = self.scheduler.active_agents();
        info!("simulating {active} taxis until {day_end}");
        observer.on_sim_start(&self.config, active);

        let mut summary = RunSummary::default();
        let stop = loop {
            let Some(next_time) = self.scheduler.peek_time() else {
                break StopReason::Exhausted;
            };
            if next_time >= day_end {
                debug!("day boundary reached: next event at {next_time}");
                break StopReason::DayEnded(next_time);
            }
            let Some(event) = self.scheduler.pop_next() else {
                break StopReason::Exhausted;
            };
            summary.record(&event);
            observer.on_event(&event);
        };
        summary.stop = stop;

        info!(
            "run finished ({:?}): {} events, {} trips completed, {} taxis still active",
            summary.stop,
            summary.emitted,
            summary.completed_trips(),
            self.scheduler.active_agents(),
        );
        observer.on_sim_end(&summary);
        summary
    }
}
