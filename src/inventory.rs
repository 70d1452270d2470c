//! Inventory snapshots as the tracker sees them

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::{ItemCode, PouchKind};
use crate::pouch::catalog::{self, PURE_ESSENCE};

/// Essence count, free space, and the decay state of every pouch present
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub pool_count: u32,
    pub free_space: u32,
    /// Pouches absent from the inventory keep whatever state they had
    #[serde(default)]
    pub degraded: AHashMap<PouchKind, bool>,
}

impl InventorySnapshot {
    pub fn new(pool_count: u32, free_space: u32) -> Self {
        Self {
            pool_count,
            free_space,
            degraded: AHashMap::new(),
        }
    }

    pub fn with_degraded(mut self, kind: PouchKind, degraded: bool) -> Self {
        self.degraded.insert(kind, degraded);
        self
    }

    /// Build a snapshot from raw inventory slots, `None` being an empty slot
    pub fn from_slots(slots: &[Option<ItemCode>]) -> Self {
        let mut snapshot = Self::default();
        for slot in slots {
            match slot {
                None => snapshot.free_space += 1,
                Some(code) if *code == PURE_ESSENCE => snapshot.pool_count += 1,
                Some(code) => {
                    if let Some(entry) = catalog::lookup(*code) {
                        snapshot.degraded.insert(entry.kind, entry.degraded);
                    }
                }
            }
        }
        snapshot
    }
}
