//! Error types for board validation, stage parsing, and reordering.

use super::{Stage, TaskId};
use std::fmt;
use thiserror::Error;

/// Errors returned while constructing board values or computing transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The stage identifier is not one of the three fixed stages.
    #[error("invalid stage '{0}', expected pending, inProgress, or completed")]
    InvalidStage(String),

    /// The gesture no longer matches the board it is applied to.
    #[error("stale gesture: {0}")]
    StaleGesture(Staleness),

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// A task with the same identifier is already on the board.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),
}

impl BoardDomainError {
    /// Returns `true` when the error reports a stale gesture.
    #[must_use]
    pub const fn is_stale(&self) -> bool {
        matches!(self, Self::StaleGesture(_))
    }
}

impl From<ParseStageError> for BoardDomainError {
    fn from(err: ParseStageError) -> Self {
        Self::InvalidStage(err.0)
    }
}

/// Describes why a gesture was judged stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Staleness {
    /// The source slot does not hold the dragged task.
    SourceMismatch {
        /// Task the gesture claims to move.
        task_id: TaskId,
        /// Stage the gesture claims the drag started in.
        stage: Stage,
        /// Index the gesture claims the drag started at.
        index: usize,
    },
    /// The referenced task is not on the board.
    UnknownTask(String),
}

impl fmt::Display for Staleness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceMismatch {
                task_id,
                stage,
                index,
            } => write!(f, "task {task_id} is not at {stage}[{index}]"),
            Self::UnknownTask(raw) => write!(f, "task '{raw}' is not on the board"),
        }
    }
}

/// Error returned while parsing stage identifiers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown stage: {0}")]
pub struct ParseStageError(pub String);
