//! Raw drag-end payloads as emitted by presentation drag libraries.
//!
//! Two shapes are understood. The sortable shape reports the dragged item
//! and whatever it was released over, which may be a column or another card.
//! The droppable shape reports explicit source and destination slots.

use serde::{Deserialize, Serialize};

/// A drag-end event in one of the supported library shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDragEvent {
    /// Sortable-list shape: `{ "active": {..}, "over": {..} | null }`.
    Sortable(SortableDragEnd),
    /// Droppable-column shape with explicit source and destination slots.
    Droppable(DroppableDragEnd),
}

impl RawDragEvent {
    /// Parses a raw event from JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the payload matches neither shape.
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }

    /// Returns the identifier of the dragged card as the library reported it.
    #[must_use]
    pub fn dragged_id(&self) -> &str {
        match self {
            Self::Sortable(sortable) => &sortable.active.id,
            Self::Droppable(droppable) => &droppable.draggable_id,
        }
    }

    /// Returns `true` when the card was released outside every drop target.
    #[must_use]
    pub const fn is_released_outside(&self) -> bool {
        match self {
            Self::Sortable(sortable) => sortable.over.is_none(),
            Self::Droppable(droppable) => droppable.destination.is_none(),
        }
    }
}

/// Drag-end event from a sortable list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortableDragEnd {
    /// The dragged card.
    pub active: SortableItem,
    /// The column or card under the pointer on release, if any.
    #[serde(default)]
    pub over: Option<SortableItem>,
}

/// Identifier of a sortable element: a task id or a stage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortableItem {
    /// Element identifier.
    pub id: String,
}

/// Drag-end event from droppable columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DroppableDragEnd {
    /// Identifier of the dragged card.
    pub draggable_id: String,
    /// Slot the card was picked up from.
    pub source: DroppableLocation,
    /// Slot the card was released into, if any.
    #[serde(default)]
    pub destination: Option<DroppableLocation>,
}

/// A column slot in the droppable shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DroppableLocation {
    /// Column identifier; a stage key.
    pub droppable_id: String,
    /// Zero-based slot within the column.
    pub index: usize,
}
