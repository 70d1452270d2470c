//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Host game tick counter (logical clock, never wall time)
pub type Tick = u64;

/// Opaque item identifier as reported by the host inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemCode(pub i32);

/// Essence pouch tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PouchKind {
    Small,
    Medium,
    Large,
    Giant,
}

impl PouchKind {
    /// Every pouch kind, ordered by tier
    pub const ALL: [PouchKind; 4] = [
        PouchKind::Small,
        PouchKind::Medium,
        PouchKind::Large,
        PouchKind::Giant,
    ];

    pub fn tier(&self) -> u8 {
        match self {
            PouchKind::Small => 0,
            PouchKind::Medium => 1,
            PouchKind::Large => 2,
            PouchKind::Giant => 3,
        }
    }

    /// Capacity while intact
    pub fn base_capacity(&self) -> u32 {
        match self {
            PouchKind::Small => 3,
            PouchKind::Medium => 6,
            PouchKind::Large => 9,
            PouchKind::Giant => 12,
        }
    }

    /// Capacity once the pouch has decayed
    ///
    /// The small pouch never decays, so both capacities match.
    pub fn degraded_capacity(&self) -> u32 {
        match self {
            PouchKind::Small => 3,
            PouchKind::Medium => 3,
            PouchKind::Large => 7,
            PouchKind::Giant => 9,
        }
    }
}

impl fmt::Display for PouchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PouchKind::Small => "small",
            PouchKind::Medium => "medium",
            PouchKind::Large => "large",
            PouchKind::Giant => "giant",
        };
        f.write_str(name)
    }
}
