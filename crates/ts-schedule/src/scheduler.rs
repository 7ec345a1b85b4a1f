//! `EventScheduler`: one-slot-per-producer k-way merge.
//!
//! # Cost
//!
//! The frontier holds at most one pending event per still-active agent:
//! memory is O(A) and each extraction is O(log A), where A = active agents.
//! Processes are never drained ahead of the merge.
//!
//! # Ordering
//!
//! Entries are ordered by `(time, agent, slot)`.  Equal timestamps therefore
//! pop in ascending `AgentId`; `slot` (seeding order) only separates two
//! processes that report the same agent.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};
use ts_core::{AgentId, Event, EventSource, SimTime};

// ── FrontierEntry ─────────────────────────────────────────────────────────────

/// A pending event plus the slot of the process that produced it.
struct FrontierEntry {
    event: Event,
    slot:  usize,
}

impl FrontierEntry {
    #[inline]
    fn key(&self) -> (SimTime, AgentId, usize) {
        (self.event.time, self.event.agent, self.slot)
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap a min-heap.
        other.key().cmp(&self.key())
    }
}

// ── EventScheduler ────────────────────────────────────────────────────────────

/// Holds the agent processes and the frontier of their next events.
///
/// Exhausted processes are dropped from their slot the moment they report
/// `None` and are never resumed again.
pub struct EventScheduler<P: EventSource> {
    processes: Vec<Option<P>>,
    frontier:  BinaryHeap<FrontierEntry>,
    retired:   usize,
    emitted:   u64,
}

impl<P: EventSource> Default for EventScheduler<P> {
    fn default() -> Self {
        Self {
            processes: Vec::new(),
            frontier:  BinaryHeap::new(),
            retired:   0,
            emitted:   0,
        }
    }
}

impl<P: EventSource> EventScheduler<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scheduler already seeded with `processes`.
    pub fn from_processes<I: IntoIterator<Item = P>>(processes: I) -> Self {
        let mut scheduler = Self::new();
        scheduler.seed(processes);
        scheduler
    }

    /// Pull the first event of every process into the frontier.
    ///
    /// A process that yields nothing at all is retired immediately.  May be
    /// called more than once; new processes join the existing frontier.
    pub fn seed<I: IntoIterator<Item = P>>(&mut self, processes: I) {
        for mut process in processes {
            let slot = self.processes.len();
            match process.next_event() {
                Some(event) => {
                    debug_assert_eq!(event.agent, process.agent(), "event attributed to wrong agent");
                    self.frontier.push(FrontierEntry { event, slot });
                    self.processes.push(Some(process));
                }
                None => {
                    debug!("agent {} produced no events; retired at seed", process.agent());
                    self.processes.push(None);
                    self.retired += 1;
                }
            }
        }
    }

    /// Remove and return the globally earliest pending event, refilling its
    /// agent's slot from the same process (or retiring it if exhausted).
    ///
    /// Returns `None` once every process is exhausted.
    pub fn pop_next(&mut self) -> Option<Event> {
        let FrontierEntry { event, slot } = self.frontier.pop()?;
        self.emitted += 1;
        trace!("agent {} {} at {}", event.agent, event.kind, event.time);

        let refill = self.processes[slot].as_mut().and_then(EventSource::next_event);
        match refill {
            Some(next) => {
                debug_assert!(next.time >= event.time, "agent {} went back in time", event.agent);
                self.frontier.push(FrontierEntry { event: next, slot });
            }
            None => {
                debug!("agent {} exhausted at {}", event.agent, event.time);
                self.processes[slot] = None;
                self.retired += 1;
            }
        }
        Some(event)
    }

    /// Timestamp of the next event `pop_next` would return.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.frontier.peek().map(|entry| entry.event.time)
    }

    /// Number of pending events (equal to the number of active agents).
    pub fn len(&self) -> usize {
        self.frontier.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Agents that still have an event in the frontier.
    pub fn active_agents(&self) -> usize {
        self.frontier.len()
    }

    /// Agents whose process has reported exhaustion.
    pub fn retired_agents(&self) -> usize {
        self.retired
    }

    /// Total events handed out by `pop_next` so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}

impl<P: EventSource> Iterator for EventScheduler<P> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        self.pop_next()
    }
}
