//! In-memory adapters for the board store port.

mod board;

pub use board::InMemoryBoardStore;
