pub mod config;
pub mod error;
pub mod types;

pub use config::TrackerConfig;
pub use error::{Result, TrackerError};
pub use types::{ItemCode, PouchKind, Tick};
