//! Scripted event replay
//!
//! A script is a JSON-lines file, one host event per line:
//!
//! ```text
//! # comments and blank lines are skipped
//! {"event": "snapshot", "pool": 20, "space": 4}
//! {"event": "action", "pouch": "large", "action": "fill"}
//! {"event": "tick", "tick": 1}
//! {"event": "message", "text": "There are nine essences in this pouch."}
//! ```

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, TrackerError};
use crate::core::types::{ItemCode, PouchKind, Tick};
use crate::inference::{PouchAction, PouchTracker, TextOutcome};
use crate::inventory::InventorySnapshot;

/// One host event in a replay script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// Advance the logical clock
    Tick { tick: Tick },
    Action { pouch: PouchKind, action: PouchAction },
    /// Raw inventory slots, `null` for an empty slot
    Inventory { slots: Vec<Option<ItemCode>> },
    /// Pre-counted inventory
    Snapshot {
        pool: u32,
        space: u32,
        #[serde(default)]
        degraded: AHashMap<PouchKind, bool>,
    },
    Message { text: String },
    Reset,
}

/// Parse a JSON-lines script
pub fn load_script(content: &str) -> Result<Vec<ScriptEvent>> {
    let mut events = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(line).map_err(|source| TrackerError::Script {
            line: idx + 1,
            source,
        })?;
        events.push(event);
    }
    Ok(events)
}

/// Feed events to the tracker in order, collecting every message outcome
pub fn run_script(tracker: &mut PouchTracker, events: &[ScriptEvent]) -> Vec<TextOutcome> {
    let mut outcomes = Vec::new();
    for event in events {
        match event {
            ScriptEvent::Tick { tick } => tracker.advance_to(*tick),
            ScriptEvent::Action { pouch, action } => tracker.on_user_action(*pouch, *action),
            ScriptEvent::Inventory { slots } => {
                tracker.on_inventory_snapshot(&InventorySnapshot::from_slots(slots));
            }
            ScriptEvent::Snapshot { pool, space, degraded } => {
                let snapshot = InventorySnapshot {
                    pool_count: *pool,
                    free_space: *space,
                    degraded: degraded.clone(),
                };
                tracker.on_inventory_snapshot(&snapshot);
            }
            ScriptEvent::Message { text } => outcomes.push(tracker.on_text_message(text)),
            ScriptEvent::Reset => tracker.on_reset(),
        }
    }
    outcomes
}
