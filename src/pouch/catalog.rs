//! Item code lookup for pouches and essence
//!
//! Data only: every code the host can report for a pouch maps to a kind plus
//! the degraded flag that code implies.

use crate::core::types::{ItemCode, PouchKind};

/// Pure essence, the pooled resource pouches store
pub const PURE_ESSENCE: ItemCode = ItemCode(7936);

/// What an item code says about a pouch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub kind: PouchKind,
    pub degraded: bool,
}

const POUCH_CODES: [(ItemCode, PouchKind, bool); 7] = [
    (ItemCode(5509), PouchKind::Small, false),
    (ItemCode(5510), PouchKind::Medium, false),
    (ItemCode(5511), PouchKind::Medium, true),
    (ItemCode(5512), PouchKind::Large, false),
    (ItemCode(5513), PouchKind::Large, true),
    (ItemCode(5514), PouchKind::Giant, false),
    (ItemCode(5515), PouchKind::Giant, true),
];

/// Resolve an item code to a pouch, if it is one
pub fn lookup(code: ItemCode) -> Option<CatalogEntry> {
    POUCH_CODES
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|&(_, kind, degraded)| CatalogEntry { kind, degraded })
}

/// Item code of a pouch in the given state
///
/// Returns `None` for a degraded small pouch, which does not exist.
pub fn code_for(kind: PouchKind, degraded: bool) -> Option<ItemCode> {
    POUCH_CODES
        .iter()
        .find(|(_, k, d)| *k == kind && *d == degraded)
        .map(|(c, _, _)| *c)
}
