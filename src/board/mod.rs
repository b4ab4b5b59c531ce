//! Weekly task board.
//!
//! Tasks are grouped into three ordered stages and moved between them by
//! drag gestures. The module follows hexagonal architecture:
//!
//! - Domain types and the reorder engine in [`domain`]
//! - The board store contract in [`ports`]
//! - The in-memory store and the gesture normalizer in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
