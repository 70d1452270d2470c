//! Operations issued by the player and awaiting confirmation

use serde::{Deserialize, Serialize};
use crate::core::types::{PouchKind, Tick};

/// Which way essence moves in a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Essence moves from the inventory into the pouch
    Fill,
    /// Essence moves from the pouch back into the inventory
    Empty,
}

impl Direction {
    /// Signed unit applied to the pouch holding
    pub fn sign(&self) -> i64 {
        match self {
            Direction::Fill => 1,
            Direction::Empty => -1,
        }
    }
}

/// A fill or empty awaiting an inventory snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferOp {
    pub pouch: PouchKind,
    pub direction: Direction,
    /// Last tick at which this operation may still be confirmed
    pub expiry: Tick,
}

/// A check awaiting its chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeOp {
    pub pouch: PouchKind,
    pub expiry: Tick,
}

impl TransferOp {
    pub fn new(pouch: PouchKind, direction: Direction, expiry: Tick) -> Self {
        Self { pouch, direction, expiry }
    }

    pub fn is_expired(&self, now: Tick) -> bool {
        now > self.expiry
    }
}

impl ProbeOp {
    pub fn new(pouch: PouchKind, expiry: Tick) -> Self {
        Self { pouch, expiry }
    }

    pub fn is_expired(&self, now: Tick) -> bool {
        now > self.expiry
    }
}
