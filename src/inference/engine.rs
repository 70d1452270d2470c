//! The tracker the host talks to
//!
//! The host serializes every signal onto one tick-ordered stream: player
//! clicks, inventory snapshots, chat messages and resets. Display code only
//! reads state back through [`PouchTracker::status`] and friends.

use serde::{Deserialize, Serialize};

use crate::core::config::TrackerConfig;
use crate::core::types::{ItemCode, PouchKind, Tick};
use crate::inventory::InventorySnapshot;
use crate::ledger::{Direction, Ledger};
use crate::pouch::{catalog, PouchRegistry};
use super::observer::PoolObserver;
use super::probe::{self, TextOutcome, DECAY_MESSAGE};
use super::reconcile::{self, ReconcileReport};

/// Menu options the player can use on a pouch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PouchAction {
    Fill,
    Empty,
    /// Ask the host how much the pouch holds
    Check,
    /// Pick the pouch up from the ground
    Take,
}

/// Read-only view of one pouch for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PouchStatus {
    pub pouch: PouchKind,
    pub holding: u32,
    pub remaining: u32,
    pub capacity: u32,
    pub degraded: bool,
    pub uncertain: bool,
}

/// Infers pouch contents from clicks, snapshots and check messages
#[derive(Debug, Clone)]
pub struct PouchTracker {
    config: TrackerConfig,
    pouches: PouchRegistry,
    ledger: Ledger,
    observer: PoolObserver,
    current_tick: Tick,
    degraded_in_inventory: bool,
}

impl PouchTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            pouches: PouchRegistry::new(),
            ledger: Ledger::new(),
            observer: PoolObserver::new(),
            current_tick: 0,
            degraded_in_inventory: false,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn tick(&self) -> Tick {
        self.current_tick
    }

    /// Move the logical clock forward
    ///
    /// The host clock never runs backwards; an older tick is ignored.
    pub fn advance_to(&mut self, tick: Tick) {
        if tick < self.current_tick {
            tracing::warn!(current = self.current_tick, requested = tick, "ignoring clock regression");
            return;
        }
        self.current_tick = tick;
    }

    /// Record a menu action on a pouch
    pub fn on_user_action(&mut self, pouch: PouchKind, action: PouchAction) {
        let expiry = self.current_tick.saturating_add(self.config.expiry_window);
        match action {
            PouchAction::Fill => self.ledger.enqueue_transfer(pouch, Direction::Fill, expiry),
            PouchAction::Empty => self.ledger.enqueue_transfer(pouch, Direction::Empty, expiry),
            PouchAction::Check => self.ledger.enqueue_probe(pouch, expiry),
            PouchAction::Take => {
                // Dropped pouches lose their contents
                self.pouches.get_mut(pouch).empty();
            }
        }
        tracing::trace!(%pouch, ?action, expiry, "pouch action recorded");
    }

    /// Record a menu action on a raw item, returning whether it was a pouch
    pub fn on_item_action(&mut self, code: ItemCode, action: PouchAction) -> bool {
        match catalog::lookup(code) {
            Some(entry) => {
                self.on_user_action(entry.kind, action);
                true
            }
            None => false,
        }
    }

    /// Apply decay transitions, then reconcile pending transfers
    pub fn on_inventory_snapshot(&mut self, snapshot: &InventorySnapshot) -> ReconcileReport {
        for (&kind, &degraded) in &snapshot.degraded {
            self.pouches.get_mut(kind).set_degraded(degraded);
        }
        self.degraded_in_inventory = self.pouches.any_degraded();

        let pruned = self.ledger.prune_expired_probes(self.current_tick);
        if pruned > 0 {
            tracing::trace!(pruned, tick = self.current_tick, "dropped unanswered checks");
        }

        reconcile::reconcile(
            &mut self.pouches,
            &mut self.ledger,
            &mut self.observer,
            snapshot.pool_count,
            snapshot.free_space,
            self.current_tick,
        )
    }

    /// Handle a game chat message
    pub fn on_text_message(&mut self, text: &str) -> TextOutcome {
        if text.contains(DECAY_MESSAGE) {
            return if self.config.notify_on_decay {
                TextOutcome::DecayNotice
            } else {
                TextOutcome::Ignored
            };
        }

        let Some(value) = probe::parse_check_message(text) else {
            return TextOutcome::Ignored;
        };

        match probe::correlate(&mut self.pouches, &mut self.ledger, value, self.current_tick) {
            Some(pouch) => TextOutcome::Pinned { pouch, value },
            None => {
                tracing::debug!(value, tick = self.current_tick, "check result with no pending check");
                TextOutcome::Unmatched { value }
            }
        }
    }

    /// Forget everything; used on login, world hop and plugin restart
    pub fn on_reset(&mut self) {
        self.pouches.reset();
        self.ledger.clear();
        self.observer.reset();
        self.degraded_in_inventory = false;
        tracing::debug!(tick = self.current_tick, "tracker reset");
    }

    pub fn holding(&self, pouch: PouchKind) -> u32 {
        self.pouches.get(pouch).holding()
    }

    pub fn remaining(&self, pouch: PouchKind) -> u32 {
        self.pouches.get(pouch).remaining()
    }

    pub fn is_uncertain(&self, pouch: PouchKind) -> bool {
        self.pouches.get(pouch).is_uncertain()
    }

    pub fn degraded_pouch_in_inventory(&self) -> bool {
        self.degraded_in_inventory
    }

    pub fn pending_transfers(&self) -> usize {
        self.ledger.pending_transfers()
    }

    pub fn pending_checks(&self) -> usize {
        self.ledger.pending_probes()
    }

    pub fn status(&self, pouch: PouchKind) -> PouchStatus {
        let p = self.pouches.get(pouch);
        PouchStatus {
            pouch,
            holding: p.holding(),
            remaining: p.remaining(),
            capacity: p.capacity(),
            degraded: p.is_degraded(),
            uncertain: p.is_uncertain(),
        }
    }

    /// Status of every pouch, in tier order
    pub fn statuses(&self) -> Vec<PouchStatus> {
        PouchKind::ALL.iter().map(|&kind| self.status(kind)).collect()
    }
}

impl Default for PouchTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}
