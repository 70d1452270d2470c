//! Integration tests for the pouch tracker
//!
//! These tests drive the tracker the way a host does: clicks, snapshots and
//! chat messages on one tick-ordered stream.

use pouch_tracker::core::types::ItemCode;
use pouch_tracker::pouch::catalog::{code_for, PURE_ESSENCE};
use pouch_tracker::{
    InventorySnapshot, PouchAction, PouchKind, PouchTracker, TextOutcome, TrackerConfig,
};

fn inventory(pouches: &[ItemCode], essence: usize, empty: usize) -> Vec<Option<ItemCode>> {
    let mut slots: Vec<Option<ItemCode>> = pouches.iter().map(|&c| Some(c)).collect();
    slots.extend(std::iter::repeat(Some(PURE_ESSENCE)).take(essence));
    slots.extend(std::iter::repeat(None).take(empty));
    slots
}

// ============================================================================
// Scenario Tests
// ============================================================================

/// A full fill at tick 0 is confirmed by the snapshot at tick 1, and a stray
/// check result at tick 5 for a check issued at tick 0 is dropped.
#[test]
fn test_end_to_end_fill_then_stray_check() {
    let mut tracker = PouchTracker::new(TrackerConfig::new().with_expiry_window(3));
    tracker.on_inventory_snapshot(&InventorySnapshot::new(20, 4));

    tracker.on_user_action(PouchKind::Large, PouchAction::Fill);
    tracker.on_user_action(PouchKind::Small, PouchAction::Check);

    tracker.advance_to(1);
    tracker.on_inventory_snapshot(&InventorySnapshot::new(11, 13));

    assert_eq!(tracker.holding(PouchKind::Large), 9);
    assert!(!tracker.is_uncertain(PouchKind::Large));

    tracker.advance_to(5);
    let outcome = tracker.on_text_message("There are two essences in this pouch.");
    assert_eq!(outcome, TextOutcome::Unmatched { value: 2 });
    assert!(tracker.is_uncertain(PouchKind::Small));
    assert_eq!(tracker.holding(PouchKind::Small), 0);
    assert_eq!(tracker.pending_checks(), 0);
}

/// The classic run: fill every pouch from a full inventory of essence
#[test]
fn test_fill_all_pouches_from_raw_inventory() {
    let pouch_codes: Vec<ItemCode> = PouchKind::ALL
        .iter()
        .map(|&k| code_for(k, false).unwrap())
        .collect();

    let mut tracker = PouchTracker::default();
    tracker.on_inventory_snapshot(&InventorySnapshot::from_slots(&inventory(&pouch_codes, 24, 0)));

    for kind in PouchKind::ALL {
        tracker.on_user_action(kind, PouchAction::Fill);
    }
    tracker.advance_to(1);
    // 3 + 6 + 9 + 12 = 30 wanted, only 24 available
    tracker.on_inventory_snapshot(&InventorySnapshot::from_slots(&inventory(&pouch_codes, 0, 24)));

    assert_eq!(tracker.holding(PouchKind::Small), 3);
    assert_eq!(tracker.holding(PouchKind::Medium), 6);
    assert_eq!(tracker.holding(PouchKind::Large), 9);
    assert_eq!(tracker.holding(PouchKind::Giant), 6);

    assert!(!tracker.is_uncertain(PouchKind::Small));
    assert!(!tracker.is_uncertain(PouchKind::Medium));
    assert!(!tracker.is_uncertain(PouchKind::Large));
    // Only 6 essence were left when the giant pouch was filled
    assert!(tracker.is_uncertain(PouchKind::Giant));
}

/// Checks are answered newest first; older ones stay pending
#[test]
fn test_checks_answered_lifo() {
    let mut tracker = PouchTracker::default();
    tracker.on_user_action(PouchKind::Medium, PouchAction::Check);
    tracker.on_user_action(PouchKind::Giant, PouchAction::Check);

    let outcome = tracker.on_text_message("There are eleven pure essences in this pouch.");
    assert_eq!(outcome, TextOutcome::Pinned { pouch: PouchKind::Giant, value: 11 });
    assert_eq!(tracker.pending_checks(), 1);
    assert!(tracker.is_uncertain(PouchKind::Medium));

    let outcome = tracker.on_text_message("There is one essence in this pouch.");
    assert_eq!(outcome, TextOutcome::Pinned { pouch: PouchKind::Medium, value: 1 });
    assert_eq!(tracker.remaining(PouchKind::Medium), 5);
}

/// Emptying a checked pouch returns essence to the inventory
#[test]
fn test_empty_after_check() {
    let mut tracker = PouchTracker::default();
    tracker.on_inventory_snapshot(&InventorySnapshot::new(0, 20));
    tracker.on_user_action(PouchKind::Giant, PouchAction::Check);
    tracker.on_text_message("There are eight essences in this pouch.");

    tracker.advance_to(2);
    tracker.on_user_action(PouchKind::Giant, PouchAction::Empty);
    tracker.advance_to(3);
    tracker.on_inventory_snapshot(&InventorySnapshot::new(8, 12));

    assert_eq!(tracker.holding(PouchKind::Giant), 0);
    assert!(!tracker.is_uncertain(PouchKind::Giant));
}

/// Decay observed through the inventory shrinks a full pouch
#[test]
fn test_decay_shrinks_full_pouch() {
    let mut tracker = PouchTracker::default();
    tracker.on_user_action(PouchKind::Giant, PouchAction::Check);
    tracker.on_text_message("There are twelve essences in this pouch.");

    let decayed = code_for(PouchKind::Giant, true).unwrap();
    tracker.on_inventory_snapshot(&InventorySnapshot::from_slots(&inventory(&[decayed], 0, 27)));

    assert!(tracker.degraded_pouch_in_inventory());
    assert_eq!(tracker.holding(PouchKind::Giant), 9);
    assert_eq!(tracker.remaining(PouchKind::Giant), 0);
}

/// Transfers queued before the first snapshot cannot be trusted
#[test]
fn test_transfers_before_baseline_are_dropped() {
    let mut tracker = PouchTracker::default();
    tracker.on_user_action(PouchKind::Large, PouchAction::Fill);
    tracker.advance_to(1);
    let report = tracker.on_inventory_snapshot(&InventorySnapshot::new(10, 18));

    assert!(report.baselined);
    assert_eq!(tracker.holding(PouchKind::Large), 0);
    assert_eq!(tracker.pending_transfers(), 0);
}

/// An abandoned fill is never applied by a later snapshot
#[test]
fn test_expired_fill_not_applied() {
    let mut tracker = PouchTracker::default();
    tracker.on_inventory_snapshot(&InventorySnapshot::new(20, 8));
    tracker.on_user_action(PouchKind::Medium, PouchAction::Fill);

    tracker.advance_to(4);
    tracker.on_inventory_snapshot(&InventorySnapshot::new(20, 8));
    assert_eq!(tracker.holding(PouchKind::Medium), 0);

    tracker.advance_to(5);
    tracker.on_inventory_snapshot(&InventorySnapshot::new(14, 14));
    assert_eq!(tracker.holding(PouchKind::Medium), 0);
}

// ============================================================================
// Reset Tests
// ============================================================================

#[test]
fn test_reset_clears_everything() {
    let mut tracker = PouchTracker::default();
    tracker.on_inventory_snapshot(&InventorySnapshot::new(5, 5).with_degraded(PouchKind::Medium, true));
    tracker.on_user_action(PouchKind::Medium, PouchAction::Check);
    tracker.on_text_message("There are two essences in this pouch.");
    tracker.on_user_action(PouchKind::Small, PouchAction::Fill);
    tracker.on_user_action(PouchKind::Large, PouchAction::Check);

    tracker.on_reset();

    assert_eq!(tracker.pending_transfers(), 0);
    assert_eq!(tracker.pending_checks(), 0);
    assert!(!tracker.degraded_pouch_in_inventory());
    for status in tracker.statuses() {
        assert_eq!(status.holding, 0);
        assert!(status.uncertain);
        assert!(!status.degraded);
    }

    // The next snapshot only re-establishes the baseline
    let report = tracker.on_inventory_snapshot(&InventorySnapshot::new(10, 10));
    assert!(report.baselined);
}

#[test]
fn test_double_reset_matches_single() {
    let mut once = PouchTracker::default();
    let mut twice = PouchTracker::default();
    for tracker in [&mut once, &mut twice] {
        tracker.on_inventory_snapshot(&InventorySnapshot::new(12, 3));
        tracker.on_user_action(PouchKind::Giant, PouchAction::Fill);
        tracker.on_user_action(PouchKind::Small, PouchAction::Check);
    }

    once.on_reset();
    twice.on_reset();
    twice.on_reset();

    assert_eq!(once.statuses(), twice.statuses());
    assert_eq!(once.pending_transfers(), twice.pending_transfers());
    assert_eq!(once.pending_checks(), twice.pending_checks());
}
