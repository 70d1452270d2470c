//! Essence pouches - capacity-bounded holders whose contents are never reported directly

pub mod catalog;
pub mod container;
pub mod registry;

pub use catalog::{CatalogEntry, PURE_ESSENCE};
pub use container::Pouch;
pub use registry::PouchRegistry;
