//! Gesture normalization adapter.
//!
//! Converts drag-library events into the canonical gesture record so the
//! reorder engine never sees library-specific payloads.

mod normalizer;
mod raw;

pub use normalizer::{DropPrecision, GestureNormalizer};
pub use raw::{DroppableDragEnd, DroppableLocation, RawDragEvent, SortableDragEnd, SortableItem};
