//! Replay of queued transfers against an inventory snapshot
//!
//! A snapshot only says how much essence and free space the inventory has
//! now. The delta is ambiguous once several pouches and several clicks
//! interleave, so instead of matching it directly every queued transfer is
//! replayed greedily, in the order the player issued it, against running
//! counters seeded from the previous snapshot:
//!
//! - Fill moves `min(remaining, available essence)` into the pouch
//! - Empty moves `min(holding, available space)` out of the pouch
//!
//! This can misattribute essence when a click was abandoned mid-flight; a
//! later check or saturating transfer corrects it.

use crate::core::types::Tick;
use crate::ledger::{Direction, Ledger};
use crate::pouch::PouchRegistry;
use super::observer::PoolObserver;

/// What a single reconciliation pass did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// The snapshot only established a baseline
    pub baselined: bool,
    /// Transfers replayed against the counters
    pub applied: usize,
    /// Essence moved into pouches
    pub filled: u32,
    /// Essence moved out of pouches
    pub emptied: u32,
}

/// Reconcile pending transfers with a new snapshot
pub fn reconcile(
    pouches: &mut PouchRegistry,
    ledger: &mut Ledger,
    observer: &mut PoolObserver,
    pool_count: u32,
    free_space: u32,
    now: Tick,
) -> ReconcileReport {
    let mut report = ReconcileReport::default();

    let Some(previous) = observer.observe(pool_count, free_space) else {
        // Nothing trustworthy to diff against yet
        let dropped = ledger.pending_transfers();
        ledger.clear_transfers();
        tracing::debug!(pool_count, free_space, dropped, "inventory baseline established");
        report.baselined = true;
        return report;
    };

    let mut available_pool = previous.pool;
    let mut available_space = previous.space;

    for op in ledger.drain_transfers(now) {
        let pouch = pouches.get_mut(op.pouch);

        let moved = match op.direction {
            Direction::Fill => {
                pouch.mark_certain_if_saturated(available_pool);
                let amount = pouch.remaining().min(available_pool);
                available_pool -= amount;
                available_space = available_space.saturating_add(amount);
                report.filled += amount;
                amount
            }
            Direction::Empty => {
                pouch.mark_certain_if_saturated(available_space);
                let amount = pouch.holding().min(available_space);
                available_space -= amount;
                available_pool = available_pool.saturating_add(amount);
                report.emptied += amount;
                amount
            }
        };

        pouch.add_holding(op.direction.sign() * moved as i64);
        report.applied += 1;

        tracing::debug!(
            pouch = %op.pouch,
            direction = ?op.direction,
            moved,
            holding = pouch.holding(),
            uncertain = pouch.is_uncertain(),
            "replayed transfer"
        );
    }

    report
}
