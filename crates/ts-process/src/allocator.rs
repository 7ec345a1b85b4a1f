//! Identity and shift allocators: the per-agent inputs consumed once at
//! process creation.
//!
//! Both are lazy sources: the identity source hands out a fixed permutation
//! of `0..N`, and the shift source draws a fresh shift from a discrete
//! category distribution on every call with no memory between draws.

use rand::distributions::WeightedIndex;
use ts_core::{AgentId, FleetConfig, Shift, ShiftCategory, SimRng};

use crate::{ProcessError, ProcessResult};

// ── Identities ────────────────────────────────────────────────────────────────

/// Supplies one agent identifier per taxi.
pub trait IdentitySource {
    /// The next unused identifier, or `None` once the pool is spent.
    fn next_id(&mut self) -> Option<AgentId>;
}

/// A uniformly random permutation of `0..count`.
pub struct ShuffledIdentities {
    ids: std::vec::IntoIter<AgentId>,
}

impl ShuffledIdentities {
    pub fn new(count: u32, rng: &mut SimRng) -> Self {
        let mut ids: Vec<AgentId> = (0..count).map(AgentId).collect();
        rng.shuffle(&mut ids);
        Self { ids: ids.into_iter() }
    }

    /// Identifiers not yet handed out.
    pub fn remaining(&self) -> usize {
        self.ids.len()
    }
}

impl IdentitySource for ShuffledIdentities {
    fn next_id(&mut self) -> Option<AgentId> {
        self.ids.next()
    }
}

/// `0, 1, 2, …, count - 1` in order.  Useful for reproducible scenarios where
/// the identity shuffle would only obscure the output.
pub struct SequentialIdentities {
    next: u32,
    end:  u32,
}

impl SequentialIdentities {
    pub fn new(count: u32) -> Self {
        Self { next: 0, end: count }
    }
}

impl IdentitySource for SequentialIdentities {
    fn next_id(&mut self) -> Option<AgentId> {
        if self.next >= self.end {
            return None;
        }
        let id = AgentId(self.next);
        self.next += 1;
        Some(id)
    }
}

// ── Shifts ────────────────────────────────────────────────────────────────────

/// Supplies one shift per taxi.  Infinite: every call returns a shift.
pub trait ShiftSource {
    fn next_shift(&mut self) -> Shift;
}

/// Draws the shift start from a weighted set of categories and returns
/// `(start, start + length, category.expected_trips)`.
pub struct WeightedShifts {
    rng:          SimRng,
    index:        WeightedIndex<f64>,
    categories:   Vec<ShiftCategory>,
    length_hours: f64,
}

impl WeightedShifts {
    pub fn new(categories: &[ShiftCategory], length_hours: f64, rng: SimRng) -> ProcessResult<Self> {
        let index = WeightedIndex::new(categories.iter().map(|c| c.weight))
            .map_err(|e| ProcessError::ShiftCategories(e.to_string()))?;
        Ok(Self {
            rng,
            index,
            categories: categories.to_vec(),
            length_hours,
        })
    }

    /// Build from the categories and shift length in `config`.
    pub fn from_config(config: &FleetConfig, rng: SimRng) -> ProcessResult<Self> {
        config.validate()?;
        Self::new(&config.shift_categories, config.shift_length_hours, rng)
    }
}

impl ShiftSource for WeightedShifts {
    fn next_shift(&mut self) -> Shift {
        let i = self.rng.sample(&self.index);
        self.categories[i].shift(self.length_hours)
    }
}

/// Hands every taxi the same shift.
#[derive(Copy, Clone, Debug)]
pub struct FixedShift(pub Shift);

impl ShiftSource for FixedShift {
    fn next_shift(&mut self) -> Shift {
        self.0
    }
}
