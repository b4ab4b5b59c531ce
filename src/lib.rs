//! Weekboard: a weekly task board with drag-to-reorder stages.
//!
//! This crate provides the board state model, the reorder engine that turns
//! a completed drag gesture into the next board, and the boundary adapter
//! that normalizes drag-library events into canonical gestures.
//!
//! # Architecture
//!
//! Weekboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for holding the current board
//! - **Adapters**: Concrete implementations of ports and event boundaries
//!
//! # Modules
//!
//! - [`board`]: Board state, reorder engine, and orchestration
//! - [`settings`]: Serde-backed session configuration
//! - [`week`]: Seven-day window navigation

pub mod board;
pub mod settings;
pub mod week;
