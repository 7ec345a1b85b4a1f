//! `ts-schedule`: merges many per-agent event streams into one global,
//! time-ordered stream.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`scheduler`] | `EventScheduler` (`BinaryHeap` frontier, one slot per agent) |
//!
//! # Merge model (summary)
//!
//! ```text
//! seed:   for each process: head = process.next_event(); push (head, slot)
//! next:   (event, slot) = frontier.pop_min()
//!         match processes[slot].next_event():
//!             Some(head) → push (head, slot)
//!             None       → retire slot
//!         return event
//! ```
//!
//! Each process is locally sorted and only its head is exposed, so the
//! frontier minimum is always the globally earliest event not yet emitted.

pub mod scheduler;


pub use scheduler::EventScheduler;
