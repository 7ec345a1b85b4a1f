//! Strongly typed identifier wrapper.
//!
//! `AgentId` is `Copy + Ord + Hash` so it can be used as a map key and as the
//! tie-break component of the scheduler's frontier ordering.

use std::fmt;

/// Identifier of one simulated taxi.  Unique per run; drawn from a shuffled
/// `0..N` permutation by the identity allocator.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
