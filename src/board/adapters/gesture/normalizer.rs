//! Translates raw drag-end events into canonical [`DragGesture`] records.

use super::raw::{DroppableDragEnd, RawDragEvent, SortableDragEnd};
use crate::board::domain::{
    Board, BoardDomainError, DragGesture, DropTarget, Stage, Staleness, TaskId, TaskLocation,
};
use serde::{Deserialize, Serialize};

/// How much of the drop position the normalizer keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropPrecision {
    /// Keep the exact slot the task was released at.
    #[default]
    IndexPrecise,
    /// Keep only the destination stage; the task is appended to it.
    StageOnly,
}

/// Normalizes raw drag events against the board they were captured on.
///
/// A normalizer is built with one [`DropPrecision`] and applies it to every
/// event, so a board never receives a mix of precise and stage-only drops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureNormalizer {
    precision: DropPrecision,
}

impl GestureNormalizer {
    /// Creates a normalizer with the given precision.
    #[must_use]
    pub const fn new(precision: DropPrecision) -> Self {
        Self { precision }
    }

    /// Returns the precision applied to every destination.
    #[must_use]
    pub const fn precision(self) -> DropPrecision {
        self.precision
    }

    /// Resolves `event` into a canonical gesture.
    ///
    /// The dragged card must still be on `board` even when the event has no
    /// destination; check [`RawDragEvent::is_released_outside`] first to treat
    /// such events as no-ops.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidStage`] when a column identifier is
    /// not a stage key, or [`BoardDomainError::StaleGesture`] when a task the
    /// event names is not on `board`.
    pub fn normalize(
        self,
        board: &Board,
        event: &RawDragEvent,
    ) -> Result<DragGesture, BoardDomainError> {
        match event {
            RawDragEvent::Sortable(sortable) => self.normalize_sortable(board, sortable),
            RawDragEvent::Droppable(droppable) => self.normalize_droppable(droppable),
        }
    }

    fn normalize_sortable(
        self,
        board: &Board,
        event: &SortableDragEnd,
    ) -> Result<DragGesture, BoardDomainError> {
        let (dragged_task_id, source) = locate_on_board(board, &event.active.id)?;
        let destination = event
            .over
            .as_ref()
            .map(|over| self.resolve_over(board, &over.id))
            .transpose()?;
        Ok(DragGesture::new(dragged_task_id, source.stage, source.index)
            .with_destination(destination))
    }

    /// Resolves the element under the pointer: a column key drops at the end
    /// of that column, a card drops into the card's slot.
    fn resolve_over(self, board: &Board, over_id: &str) -> Result<DropTarget, BoardDomainError> {
        if let Ok(stage) = Stage::try_from(over_id) {
            return Ok(self.target(stage, board.stage_len(stage)));
        }
        if TaskId::parse(over_id).is_none() {
            return Err(BoardDomainError::InvalidStage(over_id.to_owned()));
        }
        let (_, location) = locate_on_board(board, over_id)?;
        Ok(self.target(location.stage, location.index))
    }

    fn normalize_droppable(
        self,
        event: &DroppableDragEnd,
    ) -> Result<DragGesture, BoardDomainError> {
        let dragged_task_id = TaskId::parse(&event.draggable_id).ok_or_else(|| {
            BoardDomainError::StaleGesture(Staleness::UnknownTask(event.draggable_id.clone()))
        })?;
        let source_stage = Stage::try_from(event.source.droppable_id.as_str())?;
        let destination = event
            .destination
            .as_ref()
            .map(|slot| {
                Stage::try_from(slot.droppable_id.as_str())
                    .map(|stage| self.target(stage, slot.index))
            })
            .transpose()?;
        Ok(
            DragGesture::new(dragged_task_id, source_stage, event.source.index)
                .with_destination(destination),
        )
    }

    const fn target(self, stage: Stage, index: usize) -> DropTarget {
        match self.precision {
            DropPrecision::IndexPrecise => DropTarget::at(stage, index),
            DropPrecision::StageOnly => DropTarget::stage_only(stage),
        }
    }
}

fn locate_on_board(board: &Board, raw_id: &str) -> Result<(TaskId, TaskLocation), BoardDomainError> {
    TaskId::parse(raw_id)
        .and_then(|id| board.locate(id).map(|location| (id, location)))
        .ok_or_else(|| BoardDomainError::StaleGesture(Staleness::UnknownTask(raw_id.to_owned())))
}
