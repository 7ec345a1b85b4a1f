//! A pre-recorded event stream, replayed one event at a time.

use ts_core::{AgentId, Event, EventKind, EventSource, SimTime};

/// Replays a fixed list of events for one agent.
///
/// Useful for driving the scheduler with hand-built or adversarial
/// interleavings that a stochastic taxi would rarely produce.
pub struct ScriptedSource {
    agent:  AgentId,
    events: std::vec::IntoIter<Event>,
}

impl ScriptedSource {
    /// Replay `events` as given.  The caller is responsible for keeping them
    /// in non-decreasing time order.
    pub fn new(agent: AgentId, events: Vec<Event>) -> Self {
        Self { agent, events: events.into_iter() }
    }

    /// Build from `(kind, hours)` pairs attributed to `agent`.
    pub fn from_hours(agent: AgentId, script: &[(EventKind, f64)]) -> Self {
        let events = script
            .iter()
            .map(|&(kind, hours)| Event::new(agent, kind, SimTime(hours)))
            .collect();
        Self::new(agent, events)
    }

    /// Events not yet replayed.
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventSource for ScriptedSource {
    fn agent(&self) -> AgentId {
        self.agent
    }

    fn next_event(&mut self) -> Option<Event> {
        self.events.next()
    }
}
