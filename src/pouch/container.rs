//! A single essence pouch and its clamped holding

use serde::{Deserialize, Serialize};

/// One pouch tier as the tracker believes it to be
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pouch {
    base_capacity: u32,
    degraded_capacity: u32,
    degraded: bool,
    holding: u32,
    /// True until the holding was confirmed by a check or a saturating transfer
    uncertain: bool,
}

impl Pouch {
    pub fn new(base_capacity: u32, degraded_capacity: u32) -> Self {
        Self {
            base_capacity,
            degraded_capacity,
            degraded: false,
            holding: 0,
            uncertain: true,
        }
    }

    /// Capacity of whichever state the pouch is in
    pub fn capacity(&self) -> u32 {
        if self.degraded {
            self.degraded_capacity
        } else {
            self.base_capacity
        }
    }

    pub fn holding(&self) -> u32 {
        self.holding
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn is_uncertain(&self) -> bool {
        self.uncertain
    }

    pub fn remaining(&self) -> u32 {
        self.capacity() - self.holding
    }

    /// Adjust the holding by `delta`, clamped into `[0, capacity]`
    pub fn add_holding(&mut self, delta: i64) {
        let next = (self.holding as i64 + delta).clamp(0, self.capacity() as i64);
        self.holding = next as u32;
    }

    /// Zero the holding without touching certainty
    pub fn empty(&mut self) {
        self.holding = 0;
    }

    pub fn set_degraded(&mut self, degraded: bool) {
        if degraded != self.degraded {
            self.degraded = degraded;
            self.holding = self.holding.min(self.capacity());
        }
    }

    /// Pin the holding to a confirmed value
    pub fn pin(&mut self, value: u32) {
        self.holding = value.min(self.capacity());
        self.uncertain = false;
    }

    /// Clear uncertainty when at least a full pouch worth was available
    ///
    /// With that much essence (or free space) on hand a fill (or empty) must
    /// have saturated (or drained) the pouch.
    pub fn mark_certain_if_saturated(&mut self, observed_available: u32) {
        if self.uncertain && observed_available >= self.capacity() {
            self.uncertain = false;
        }
    }

    /// Back to the freshly constructed state
    pub fn reset(&mut self) {
        self.degraded = false;
        self.holding = 0;
        self.uncertain = true;
    }
}
