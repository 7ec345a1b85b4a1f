//! What a finished run reports back.

use rustc_hash::FxHashMap;
use ts_core::{AgentId, Event, EventKind, SimTime};

/// Why the merge loop stopped.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub enum StopReason {
    /// Every agent process was exhausted before the day boundary.
    #[default]
    Exhausted,
    /// The earliest pending event was at or past the boundary; it carries
    /// that event's timestamp.  The event stays pending and its agent is not
    /// resumed.
    DayEnded(SimTime),
}

/// Counts of the events forwarded to the observer during one run.
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    pub emitted:   u64,
    /// Timestamp of the last forwarded event.
    pub last_time: Option<SimTime>,
    pub stop:      StopReason,
    by_kind:       [u64; 4],
    by_agent:      FxHashMap<AgentId, u64>,
}

impl RunSummary {
    pub(crate) fn record(&mut self, event: &Event) {
        self.emitted += 1;
        self.last_time = Some(event.time);
        self.by_kind[kind_index(event.kind)] += 1;
        *self.by_agent.entry(event.agent).or_default() += 1;
    }

    /// Forwarded events of `kind`.
    pub fn count(&self, kind: EventKind) -> u64 {
        self.by_kind[kind_index(kind)]
    }

    /// Forwarded events attributed to `agent`.
    pub fn agent_count(&self, agent: AgentId) -> u64 {
        self.by_agent.get(&agent).copied().unwrap_or(0)
    }

    /// Distinct agents that contributed at least one forwarded event.
    pub fn agents_seen(&self) -> usize {
        self.by_agent.len()
    }

    /// Trips fully completed before the stop (drop-offs forwarded).
    pub fn completed_trips(&self) -> u64 {
        self.count(EventKind::DropOff)
    }
}

fn kind_index(kind: EventKind) -> usize {
    match kind {
        EventKind::StartShift => 0,
        EventKind::PickUp     => 1,
        EventKind::DropOff    => 2,
        EventKind::EndShift   => 3,
    }
}
