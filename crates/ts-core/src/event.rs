//! Timestamped agent events and the producer trait the scheduler consumes.

use std::fmt;

use crate::{AgentId, SimTime};

/// The fixed set of things that can happen to a taxi.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EventKind {
    StartShift,
    PickUp,
    DropOff,
    EndShift,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::StartShift,
        EventKind::PickUp,
        EventKind::DropOff,
        EventKind::EndShift,
    ];

    /// Human-readable label, e.g. `"pick up"`.
    pub fn label(self) -> &'static str {
        match self {
            EventKind::StartShift => "start shift",
            EventKind::PickUp     => "pick up",
            EventKind::DropOff    => "drop off",
            EventKind::EndShift   => "end shift",
        }
    }

    /// Stable machine-readable name, e.g. `"pick_up"`.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::StartShift => "start_shift",
            EventKind::PickUp     => "pick_up",
            EventKind::DropOff    => "drop_off",
            EventKind::EndShift   => "end_shift",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One immutable occurrence attributable to a single agent.
///
/// Events are compared by the scheduler on `time` only; the ordering of two
/// events at the same time is decided by the scheduler's tie-break, not here.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub agent: AgentId,
    pub kind:  EventKind,
    pub time:  SimTime,
}

impl Event {
    #[inline]
    pub fn new(agent: AgentId, kind: EventKind, time: SimTime) -> Self {
        Self { agent, kind, time }
    }
}

/// A lazily evaluated, locally time-ordered stream of events for one agent.
///
/// Implementors must yield events with non-decreasing `time` and, once
/// `next_event` has returned `None`, keep returning `None`.  The scheduler
/// never calls `next_event` again after it has observed exhaustion.
pub trait EventSource {
    /// The agent every event from this source is attributed to.
    fn agent(&self) -> AgentId;

    /// Resume the process until it produces its next event, or report
    /// exhaustion with `None`.
    fn next_event(&mut self) -> Option<Event>;
}

impl<S: EventSource + ?Sized> EventSource for Box<S> {
    fn agent(&self) -> AgentId {
        (**self).agent()
    }

    fn next_event(&mut self) -> Option<Event> {
        (**self).next_event()
    }
}
