//! Simulation observer trait: the output sink seam.

use ts_core::{Event, FleetConfig};

use crate::RunSummary;

/// Callbacks invoked by [`FleetSim::run`][crate::FleetSim::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: console printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_event(&mut self, event: &Event) {
///         println!("{} {} {}", event.agent, event.kind, event.time);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first event is pulled.
    fn on_sim_start(&mut self, _config: &FleetConfig, _active_agents: usize) {}

    /// Called for every event that falls before the day boundary, in global
    /// time order.
    fn on_event(&mut self, _event: &Event) {}

    /// Called once after the loop stops, for either reason.
    fn on_sim_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// only care about the returned summary.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
