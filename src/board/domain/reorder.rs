//! Reorder engine: computes the next board for a completed drag gesture.
//!
//! The engine is a pure function of the current board and the gesture. It
//! never mutates its input and never guesses: a gesture whose source slot no
//! longer holds the dragged task is rejected as stale.

use super::{Board, BoardDomainError, DragGesture, Staleness};

/// Result of applying a gesture to a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The drop landed outside every valid target; the board is unchanged.
    NoOp,
    /// The board that replaces the current one.
    Next(Board),
}

impl Transition {
    /// Returns `true` for [`Transition::NoOp`].
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp)
    }

    /// Returns the board after the transition, cloning `current` for a no-op.
    #[must_use]
    pub fn into_board(self, current: &Board) -> Board {
        match self {
            Self::NoOp => current.clone(),
            Self::Next(board) => board,
        }
    }
}

/// Computes the board that results from `gesture`.
///
/// The dragged task is removed from its source slot and inserted at the
/// destination index, measured against the destination sequence after the
/// removal. Indices past the end, and stage-only destinations, append. Stages
/// the gesture does not touch keep their sequences as they were.
///
/// # Errors
///
/// Returns [`BoardDomainError::StaleGesture`] when the source slot does not
/// hold the dragged task.
pub fn compute_next_board(
    board: &Board,
    gesture: &DragGesture,
) -> Result<Transition, BoardDomainError> {
    let Some(destination) = gesture.destination else {
        return Ok(Transition::NoOp);
    };

    let source = gesture.source;
    let holds_dragged = board
        .task_at(source)
        .is_some_and(|task| task.id() == gesture.dragged_task_id);
    if !holds_dragged {
        return Err(BoardDomainError::StaleGesture(Staleness::SourceMismatch {
            task_id: gesture.dragged_task_id,
            stage: source.stage,
            index: source.index,
        }));
    }

    let mut next = board.clone();
    let moved = next.stage_mut(source.stage).remove(source.index);
    let target = next.stage_mut(destination.stage);
    let len = target.len();
    let insert_at = destination.index.map_or(len, |index| index.min(len));
    target.insert(insert_at, moved);

    Ok(Transition::Next(next))
}
