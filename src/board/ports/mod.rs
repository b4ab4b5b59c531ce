//! Port contracts for the weekly task board.
//!
//! Ports define storage-agnostic interfaces used by board services.

pub mod store;

pub use store::{BoardSnapshot, BoardStore, BoardStoreError, BoardStoreResult, Revision};

#[cfg(test)]
pub use store::MockBoardStore;
