//! `ts-process`: the event producers and their per-agent inputs.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`allocator`] | `IdentitySource`, `ShiftSource` and their implementations       |
//! | [`sampler`]   | `ShiftTiming`, `TripSampler`, `SamplerFactory`, stochastic/mean samplers |
//! | [`taxi`]      | `TaxiProcess` state machine, `Phase`                            |
//! | [`scripted`]  | `ScriptedSource`, replays a fixed event list                   |
//! | [`error`]     | `ProcessError`, `ProcessResult<T>`                              |
//!
//! # Design notes
//!
//! A taxi never looks at another taxi.  Everything it needs (identity,
//! shift, sampler with its own RNG) is handed over at construction; after
//! that it only advances when the scheduler asks for its next event, so
//! processes can be resumed in any order without changing what they emit.

pub mod allocator;
pub mod error;
pub mod sampler;
pub mod scripted;
pub mod taxi;


pub use allocator::{
    FixedShift, IdentitySource, SequentialIdentities, ShiftSource, ShuffledIdentities,
    WeightedShifts,
};
pub use error::{ProcessError, ProcessResult};
pub use sampler::{
    MeanSampler, MeanSamplers, SamplerFactory, ShiftTiming, StochasticSampler,
    StochasticSamplers, TripSampler,
};
pub use scripted::ScriptedSource;
pub use taxi::{Phase, TaxiProcess};
