//! Inference of pouch contents from indirect observations
//!
//! Two signals feed the tracker:
//! - inventory snapshots, reconciled against queued fills and empties
//! - check messages, correlated with the most recent pending check

pub mod engine;
pub mod observer;
pub mod probe;
pub mod reconcile;

pub use engine::{PouchAction, PouchStatus, PouchTracker};
pub use observer::{Baseline, PoolObserver};
pub use probe::{parse_check_message, TextOutcome, DECAY_MESSAGE};
pub use reconcile::{reconcile, ReconcileReport};
