//! `TaxiProcess`: one taxi's day as a resumable state machine.
//!
//! # Phases
//!
//! ```text
//! NotStarted ──start shift──▶ Idle ──pick up──▶ InTrip ──drop off──▶ Idle …
//!      │                       (repeated `planned_trips` times)         │
//!      └───────(0 trips)───────────────▶ Ending ◀───────────────────────┘
//!                                          │ end shift
//!                                          ▼
//!                                        Ended
//! ```
//!
//! Each call to [`EventSource::next_event`] performs exactly one emission
//! and the time advance that follows it, so the draws happen in the same
//! order as a straight-line walk through the shift:
//!
//! 1. `start shift` at `shift.start`, then idle gap.
//! 2. Per trip: `pick up`, trip duration, `drop off`, idle gap.
//! 3. One more idle gap, then `end shift`.

use log::debug;
use ts_core::{AgentId, Event, EventKind, EventSource, Shift, SimTime};

use crate::{ProcessResult, SamplerFactory, ShiftTiming, TripSampler};

/// Where a taxi is in its shift.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Phase {
    NotStarted,
    /// Waiting for the next pick-up; `remaining` trips still to run.
    Idle { remaining: u32 },
    /// Passenger on board; `remaining` includes the current trip.
    InTrip { remaining: u32 },
    /// All trips done; the closing gap and `end shift` are still pending.
    Ending,
    Ended,
}

/// A lazily advanced event stream for one taxi.
pub struct TaxiProcess<S: TripSampler> {
    agent:         AgentId,
    shift:         Shift,
    sampler:       S,
    now:           SimTime,
    planned_trips: u32,
    phase:         Phase,
}

impl<S: TripSampler> TaxiProcess<S> {
    /// Validate `shift`, build the agent's sampler from `samplers`, and draw
    /// the realised trip count.
    ///
    /// # Errors
    /// Fails when the shift's trip rate is degenerate (`<= 1`) or the
    /// sampler cannot be built for it.
    pub fn new<F>(
        agent:              AgentId,
        shift:              Shift,
        trip_count_std_dev: f64,
        samplers:           &mut F,
    ) -> ProcessResult<Self>
    where
        F: SamplerFactory<Sampler = S>,
    {
        let timing = ShiftTiming::for_shift(agent, &shift, trip_count_std_dev)?;
        let mut sampler = samplers.sampler(agent, &timing)?;

        let drawn = sampler.trip_count();
        if drawn < 0 {
            debug!("agent {agent}: trip count sample {drawn} clamped to 0");
        }
        let planned_trips = u32::try_from(drawn.max(0)).unwrap_or(u32::MAX);

        Ok(Self {
            agent,
            shift,
            sampler,
            now: shift.start,
            planned_trips,
            phase: Phase::NotStarted,
        })
    }

    pub fn shift(&self) -> &Shift {
        &self.shift
    }

    /// Number of pick-up / drop-off pairs this taxi will emit.
    pub fn planned_trips(&self) -> u32 {
        self.planned_trips
    }

    /// Total events this process emits over its lifetime.
    pub fn planned_events(&self) -> u64 {
        2 + 2 * u64::from(self.planned_trips)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_exhausted(&self) -> bool {
        self.phase == Phase::Ended
    }

    fn after_idle(&self, remaining: u32) -> Phase {
        if remaining == 0 {
            Phase::Ending
        } else {
            Phase::Idle { remaining }
        }
    }

    fn emit(&self, kind: EventKind) -> Event {
        Event::new(self.agent, kind, self.now)
    }
}

impl<S: TripSampler> EventSource for TaxiProcess<S> {
    fn agent(&self) -> AgentId {
        self.agent
    }

    fn next_event(&mut self) -> Option<Event> {
        let (event, next) = match self.phase {
            Phase::NotStarted => {
                let event = self.emit(EventKind::StartShift);
                self.now = self.now.after_minutes(self.sampler.gap_minutes());
                (event, self.after_idle(self.planned_trips))
            }
            Phase::Idle { remaining } => {
                let event = self.emit(EventKind::PickUp);
                self.now = self.now.after_minutes(self.sampler.trip_minutes());
                (event, Phase::InTrip { remaining })
            }
            Phase::InTrip { remaining } => {
                let event = self.emit(EventKind::DropOff);
                self.now = self.now.after_minutes(self.sampler.gap_minutes());
                (event, self.after_idle(remaining - 1))
            }
            Phase::Ending => {
                self.now = self.now.after_minutes(self.sampler.gap_minutes());
                (self.emit(EventKind::EndShift), Phase::Ended)
            }
            Phase::Ended => return None,
        };
        self.phase = next;
        Some(event)
    }
}
