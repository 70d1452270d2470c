//! Check-message parsing and correlation with pending checks
//!
//! Checking a pouch makes the host print one of:
//!
//! ```text
//! There is one essence in this pouch.
//! There are twelve pure essences in this pouch.
//! ```
//!
//! The message does not say which pouch it answers, so it is credited to the
//! most recently checked pouch whose check has not expired.

use nom::branch::alt;
use nom::bytes::complete::{tag, take_while1};
use nom::combinator::{all_consuming, opt};
use nom::sequence::delimited;
use nom::{IResult, Parser};
use serde::{Deserialize, Serialize};

use crate::core::types::{PouchKind, Tick};
use crate::ledger::Ledger;
use crate::pouch::PouchRegistry;

/// Chat notice printed when a pouch decays
pub const DECAY_MESSAGE: &str = "Your pouch has decayed through use.";

/// Spelled-out counts the host uses in check messages
const COUNT_WORDS: [(&str, u32); 13] = [
    ("no", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
];

/// What the tracker made of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TextOutcome {
    /// Not a message the tracker cares about
    Ignored,
    /// A check result was credited to a pouch
    Pinned { pouch: PouchKind, value: u32 },
    /// A check result arrived with no valid check pending
    Unmatched { value: u32 },
    /// A pouch decayed; the host may want to notify the player
    DecayNotice,
}

fn count_word(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_lowercase()).parse(input)
}

fn check_message(input: &str) -> IResult<&str, &str> {
    delimited(
        (tag("There "), alt((tag("is"), tag("are"))), tag(" ")),
        count_word,
        (
            opt(tag(" pure")),
            tag(" essence"),
            opt(tag("s")),
            tag(" in this pouch."),
        ),
    )
    .parse(input)
}

fn word_value(word: &str) -> Option<u32> {
    COUNT_WORDS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, n)| *n)
}

/// Extract the essence count from a check message
pub fn parse_check_message(text: &str) -> Option<u32> {
    let (_, word) = all_consuming(check_message).parse(text).ok()?;
    word_value(word)
}

/// Credit a check result to the most recent valid pending check
///
/// Returns the pouch that was pinned, if any. Expired checks passed over on
/// the way are gone for good.
pub fn correlate(
    pouches: &mut PouchRegistry,
    ledger: &mut Ledger,
    value: u32,
    now: Tick,
) -> Option<PouchKind> {
    let op = ledger.pop_valid_probe(now)?;
    pouches.get_mut(op.pouch).pin(value);
    tracing::debug!(pouch = %op.pouch, value, now, "check result pinned");
    Some(op.pouch)
}
