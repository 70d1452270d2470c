//! Pouch Tracker - infers essence pouch contents the game never reports

pub mod core;
pub mod inference;
pub mod inventory;
pub mod ledger;
pub mod pouch;
pub mod replay;

pub use crate::core::config::TrackerConfig;
pub use crate::core::types::{ItemCode, PouchKind, Tick};
pub use crate::inference::{PouchAction, PouchStatus, PouchTracker, TextOutcome};
pub use crate::inventory::InventorySnapshot;
