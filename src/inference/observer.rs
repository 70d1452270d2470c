//! Last observed essence count and free inventory space

use serde::{Deserialize, Serialize};

/// A trusted pair of counts to replay transfers against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Baseline {
    pub pool: u32,
    pub space: u32,
}

/// Holds the baseline, or nothing right after a reset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolObserver {
    baseline: Option<Baseline>,
}

impl PoolObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn baseline(&self) -> Option<Baseline> {
        self.baseline
    }

    pub fn is_unknown(&self) -> bool {
        self.baseline.is_none()
    }

    /// Store a new baseline, returning the previous one
    pub fn observe(&mut self, pool: u32, space: u32) -> Option<Baseline> {
        self.baseline.replace(Baseline { pool, space })
    }

    pub fn reset(&mut self) {
        self.baseline = None;
    }
}
