//! Pending-operation ledger
//!
//! Speculative pouch operations wait here until an inventory snapshot or a
//! check message confirms them, or until they expire.

pub mod pending;
pub mod operation;

pub use pending::Ledger;
pub use operation::{Direction, ProbeOp, TransferOp};
