//! FIFO transfer queue and LIFO probe stack

use std::collections::VecDeque;
use crate::core::types::{PouchKind, Tick};
use super::operation::{Direction, ProbeOp, TransferOp};

/// Owns every operation still waiting for confirmation
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// Oldest first
    transfers: VecDeque<TransferOp>,
    /// Most recent at the back
    probes: VecDeque<ProbeOp>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue_transfer(&mut self, pouch: PouchKind, direction: Direction, expiry: Tick) {
        self.transfers.push_back(TransferOp::new(pouch, direction, expiry));
    }

    pub fn enqueue_probe(&mut self, pouch: PouchKind, expiry: Tick) {
        self.probes.push_back(ProbeOp::new(pouch, expiry));
    }

    /// Take every queued transfer still valid at `now`, in issue order
    ///
    /// The queue is left empty. Expired transfers are dropped for good.
    pub fn drain_transfers(&mut self, now: Tick) -> Vec<TransferOp> {
        self.transfers
            .drain(..)
            .filter(|op| {
                if op.is_expired(now) {
                    tracing::trace!(pouch = %op.pouch, expiry = op.expiry, now, "dropping expired transfer");
                    false
                } else {
                    true
                }
            })
            .collect()
    }

    /// Discard all queued transfers without applying them
    pub fn clear_transfers(&mut self) {
        self.transfers.clear();
    }

    /// Pop the most recent probe still valid at `now`
    ///
    /// Expired probes above it on the stack are discarded on the way.
    pub fn pop_valid_probe(&mut self, now: Tick) -> Option<ProbeOp> {
        while let Some(op) = self.probes.pop_back() {
            if !op.is_expired(now) {
                return Some(op);
            }
            tracing::trace!(pouch = %op.pouch, expiry = op.expiry, now, "dropping expired check");
        }
        None
    }

    /// Drop every check that can no longer be answered at `now`
    ///
    /// Returns how many were dropped. Valid checks keep their stack order.
    pub fn prune_expired_probes(&mut self, now: Tick) -> usize {
        let before = self.probes.len();
        self.probes.retain(|op| !op.is_expired(now));
        before - self.probes.len()
    }

    pub fn pending_transfers(&self) -> usize {
        self.transfers.len()
    }

    pub fn pending_probes(&self) -> usize {
        self.probes.len()
    }

    pub fn clear(&mut self) {
        self.transfers.clear();
        self.probes.clear();
    }
}
