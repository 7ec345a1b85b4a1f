//! `ts-sim`: the simulation driver for the taxisim event simulator.
//!
//! # Merge loop
//!
//! ```text
//! build:  for each of N taxis:
//!           id    = identities.next_id()
//!           shift = shifts.next_shift()
//!           TaxiProcess::new(id, shift, samplers)
//!         EventScheduler::seed(processes)
//! run:    loop:
//!           t = scheduler.peek_time()         : none left  → Exhausted
//!           t >= day_end                      : boundary   → DayEnded(t)
//!           event = scheduler.pop_next()
//!           observer.on_event(event)
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ts_core::FleetConfig;
//! use ts_sim::{NoopObserver, SimBuilder};
//!
//! let config = FleetConfig { taxi_count: 100, ..FleetConfig::default() };
//! let mut sim = SimBuilder::new(config)?.build()?;
//! let summary = sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod summary;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::FleetSim;
pub use summary::{RunSummary, StopReason};
