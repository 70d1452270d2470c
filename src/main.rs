//! Pouch Replay - headless runner for recorded host events
//!
//! Feeds a JSON-lines event script through the tracker and prints every
//! check-message outcome followed by the final state of each pouch.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use pouch_tracker::core::error::Result;
use pouch_tracker::replay::{load_script, run_script};
use pouch_tracker::{PouchStatus, PouchTracker, TextOutcome, TrackerConfig};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Replay host events and report inferred pouch contents
#[derive(Parser, Debug)]
#[command(name = "pouch-replay")]
#[command(about = "Replay recorded host events through the pouch tracker")]
struct Args {
    /// JSON-lines event script
    script: PathBuf,

    /// Tracker config (TOML); defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Text,
}

fn parse_format(name: &str) -> Option<OutputFormat> {
    match name {
        "json" => Some(OutputFormat::Json),
        "text" => Some(OutputFormat::Text),
        _ => None,
    }
}

/// JSON output structure
#[derive(Serialize)]
struct ReplayResult {
    final_tick: u64,
    outcomes: Vec<TextOutcome>,
    pouches: Vec<PouchStatus>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pouch_tracker=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let format = parse_format(&args.format).unwrap_or_else(|| {
        eprintln!("Unknown format '{}', defaulting to text", args.format);
        OutputFormat::Text
    });

    let config = match &args.config {
        Some(path) => TrackerConfig::load(path)?,
        None => TrackerConfig::default(),
    };

    let content = fs::read_to_string(&args.script)?;
    let events = load_script(&content)?;
    let mut tracker = PouchTracker::new(config);
    tracing::info!(
        events = events.len(),
        script = ?args.script,
        expiry_window = tracker.config().expiry_window,
        "replaying script"
    );

    let outcomes = run_script(&mut tracker, &events);

    let result = ReplayResult {
        final_tick: tracker.tick(),
        outcomes,
        pouches: tracker.statuses(),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => print_text(&result),
    }

    Ok(())
}

fn print_text(result: &ReplayResult) {
    println!("=== POUCH REPLAY (tick {}) ===", result.final_tick);
    for outcome in &result.outcomes {
        match outcome {
            TextOutcome::Pinned { pouch, value } => println!("  check: {} pouch holds {}", pouch, value),
            TextOutcome::Unmatched { value } => println!("  check: {} (no pending check)", value),
            TextOutcome::DecayNotice => println!("  notice: a pouch has decayed"),
            TextOutcome::Ignored => {}
        }
    }
    println!();
    for status in &result.pouches {
        let marker = if status.uncertain { "?" } else { "" };
        let degraded = if status.degraded { " (degraded)" } else { "" };
        println!(
            "  {:<7} {:>2}{:<1} / {:>2}{}",
            status.pouch.to_string(),
            status.holding,
            marker,
            status.capacity,
            degraded
        );
    }
}
