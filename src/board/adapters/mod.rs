//! Adapter implementations for the board ports and the gesture boundary.

pub mod gesture;
pub mod memory;
