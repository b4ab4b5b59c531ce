//! Canonical drag gesture record consumed by the reorder engine.

use super::{Stage, TaskId, TaskLocation};
use serde::{Deserialize, Serialize};

/// Where a dragged task was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropTarget {
    /// Stage the task was dropped into.
    pub stage: Stage,
    /// Insertion index, or `None` for a stage-only drop that appends.
    pub index: Option<usize>,
}

impl DropTarget {
    /// A drop at a precise index within `stage`.
    #[must_use]
    pub const fn at(stage: Stage, index: usize) -> Self {
        Self {
            stage,
            index: Some(index),
        }
    }

    /// A coarse drop onto `stage` with no index; the task is appended.
    #[must_use]
    pub const fn stage_only(stage: Stage) -> Self {
        Self { stage, index: None }
    }
}

/// A completed drag of one task from a source position to a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragGesture {
    /// Task being moved.
    pub dragged_task_id: TaskId,
    /// Where the drag began.
    pub source: TaskLocation,
    /// Where the drag ended, or `None` when released outside any target.
    pub destination: Option<DropTarget>,
}

impl DragGesture {
    /// Starts a gesture for the task at `source_stage[source_index]`.
    ///
    /// The gesture has no destination until one of the `dropped_*` methods
    /// is called.
    #[must_use]
    pub const fn new(dragged_task_id: TaskId, source_stage: Stage, source_index: usize) -> Self {
        Self {
            dragged_task_id,
            source: TaskLocation::new(source_stage, source_index),
            destination: None,
        }
    }

    /// Sets a precise destination.
    #[must_use]
    pub const fn dropped_at(mut self, stage: Stage, index: usize) -> Self {
        self.destination = Some(DropTarget::at(stage, index));
        self
    }

    /// Sets a stage-only destination.
    #[must_use]
    pub const fn dropped_on_stage(mut self, stage: Stage) -> Self {
        self.destination = Some(DropTarget::stage_only(stage));
        self
    }

    /// Sets the destination from an optional target.
    #[must_use]
    pub const fn with_destination(mut self, destination: Option<DropTarget>) -> Self {
        self.destination = destination;
        self
    }
}
