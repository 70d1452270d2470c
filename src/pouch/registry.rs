//! Owned registry of every tracked pouch

use crate::core::types::PouchKind;
use super::container::Pouch;

/// Maps each pouch kind to the tracker's belief about it
///
/// Slots are indexed by tier, so every kind always has a pouch.
#[derive(Debug, Clone)]
pub struct PouchRegistry {
    pouches: [Pouch; 4],
}

impl PouchRegistry {
    pub fn new() -> Self {
        Self {
            pouches: PouchKind::ALL.map(|kind| Pouch::new(kind.base_capacity(), kind.degraded_capacity())),
        }
    }

    pub fn get(&self, kind: PouchKind) -> &Pouch {
        &self.pouches[kind.tier() as usize]
    }

    pub fn get_mut(&mut self, kind: PouchKind) -> &mut Pouch {
        &mut self.pouches[kind.tier() as usize]
    }

    /// Iterate pouches in tier order
    pub fn iter(&self) -> impl Iterator<Item = (PouchKind, &Pouch)> + '_ {
        PouchKind::ALL.into_iter().zip(self.pouches.iter())
    }

    pub fn any_degraded(&self) -> bool {
        self.pouches.iter().any(|p| p.is_degraded())
    }

    pub fn reset(&mut self) {
        for pouch in &mut self.pouches {
            pouch.reset();
        }
    }
}

impl Default for PouchRegistry {
    fn default() -> Self {
        Self::new()
    }
}
