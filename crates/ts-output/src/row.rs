//! Plain data row written by output backends.

use ts_core::{ClockTime, Event};

use crate::OutputResult;

/// One forwarded event, pre-formatted for reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventRow {
    pub agent_id: u32,
    /// Machine-readable kind, e.g. `pick_up`.
    pub kind:     &'static str,
    /// Human-readable kind, e.g. `pick up`.
    pub label:    &'static str,
    pub hours:    f64,
    pub clock:    ClockTime,
}

impl EventRow {
    /// Fails if the event time is outside `[0, 24)` hours.
    pub fn from_event(event: &Event) -> OutputResult<Self> {
        Ok(Self {
            agent_id: event.agent.0,
            kind:     event.kind.as_str(),
            label:    event.kind.label(),
            hours:    event.time.hours(),
            clock:    event.time.to_clock()?,
        })
    }
}
