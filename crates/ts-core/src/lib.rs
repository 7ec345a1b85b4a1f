//! `ts-core`: foundational types for the `taxisim` discrete-event simulator.
//!
//! This crate is a dependency of every other `ts-*` crate.  It intentionally
//! has no `ts-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`time`]        | `SimTime` (fractional hours), `ClockTime` (`HH:MM`)   |
//! | [`event`]       | `Event`, `EventKind`, `EventSource` trait             |
//! | [`shift`]       | `Shift`, `ShiftCategory`                              |
//! | [`config`]      | `FleetConfig`                                         |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`error`]       | `TsError`, `TsResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod event;
pub mod ids;
pub mod rng;
pub mod shift;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::FleetConfig;
pub use error::{TsError, TsResult};
pub use event::{Event, EventKind, EventSource};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use shift::{Shift, ShiftCategory};
pub use time::{ClockTime, DAY_END, SimTime};
