//! Board aggregate: three ordered task sequences keyed by stage.

use super::{BoardDomainError, Stage, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Position of a task on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskLocation {
    /// Stage holding the task.
    pub stage: Stage,
    /// Zero-based position within the stage's sequence.
    pub index: usize,
}

impl TaskLocation {
    /// Creates a location from a stage and index.
    #[must_use]
    pub const fn new(stage: Stage, index: usize) -> Self {
        Self { stage, index }
    }
}

/// Number of tasks held by each stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageCounts {
    /// Tasks in [`Stage::Pending`].
    pub pending: usize,
    /// Tasks in [`Stage::InProgress`].
    pub in_progress: usize,
    /// Tasks in [`Stage::Completed`].
    pub completed: usize,
}

impl StageCounts {
    /// Returns the count for a single stage.
    #[must_use]
    pub const fn get(self, stage: Stage) -> usize {
        match stage {
            Stage::Pending => self.pending,
            Stage::InProgress => self.in_progress,
            Stage::Completed => self.completed,
        }
    }

    /// Returns the number of tasks across all stages.
    #[must_use]
    pub const fn total(self) -> usize {
        self.pending + self.in_progress + self.completed
    }
}

/// The board: every task lives in exactly one stage, exactly once.
///
/// Boards are values. Transitions produce a new board rather than mutating a
/// shared one; the only mutable cell is the store that holds the current
/// board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pending: Vec<Task>,
    in_progress: Vec<Task>,
    completed: Vec<Task>,
}

impl Board {
    /// Creates a board with all three stages empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: Vec::new(),
            in_progress: Vec::new(),
            completed: Vec::new(),
        }
    }

    /// Returns the ordered tasks of `stage`.
    #[must_use]
    pub fn stage(&self, stage: Stage) -> &[Task] {
        match stage {
            Stage::Pending => &self.pending,
            Stage::InProgress => &self.in_progress,
            Stage::Completed => &self.completed,
        }
    }

    pub(crate) const fn stage_mut(&mut self, stage: Stage) -> &mut Vec<Task> {
        match stage {
            Stage::Pending => &mut self.pending,
            Stage::InProgress => &mut self.in_progress,
            Stage::Completed => &mut self.completed,
        }
    }

    /// Returns the number of tasks in `stage`.
    #[must_use]
    pub fn stage_len(&self, stage: Stage) -> usize {
        self.stage(stage).len()
    }

    /// Returns `true` when `stage` holds no tasks.
    #[must_use]
    pub fn is_stage_empty(&self, stage: Stage) -> bool {
        self.stage(stage).is_empty()
    }

    /// Returns per-stage task counts.
    #[must_use]
    pub fn counts(&self) -> StageCounts {
        StageCounts {
            pending: self.pending.len(),
            in_progress: self.in_progress.len(),
            completed: self.completed.len(),
        }
    }

    /// Returns the number of tasks on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts().total()
    }

    /// Returns `true` when no stage holds a task.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over every task together with its location, in stage order.
    pub fn iter(&self) -> impl Iterator<Item = (TaskLocation, &Task)> {
        Stage::ALL.into_iter().flat_map(move |stage| {
            self.stage(stage)
                .iter()
                .enumerate()
                .map(move |(index, task)| (TaskLocation::new(stage, index), task))
        })
    }

    /// Finds where a task currently sits.
    ///
    /// Returns `None` when the task is not on the board.
    #[must_use]
    pub fn locate(&self, id: TaskId) -> Option<TaskLocation> {
        self.iter()
            .find(|(_, task)| task.id() == id)
            .map(|(location, _)| location)
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.iter().map(|(_, task)| task).find(|task| task.id() == id)
    }

    /// Returns the task at `location`, if any.
    #[must_use]
    pub fn task_at(&self, location: TaskLocation) -> Option<&Task> {
        self.stage(location.stage).get(location.index)
    }

    /// Returns `true` when the task is on the board.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.locate(id).is_some()
    }

    /// Returns a copy of this board with `task` appended to `stage`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateTask`] when a task with the same
    /// identifier is already on the board.
    pub fn with_appended(&self, stage: Stage, task: Task) -> Result<Self, BoardDomainError> {
        if self.contains(task.id()) {
            return Err(BoardDomainError::DuplicateTask(task.id()));
        }
        let mut next = self.clone();
        next.stage_mut(stage).push(task);
        Ok(next)
    }

    /// Verifies that no task identifier appears more than once.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateTask`] naming the first repeated
    /// identifier.
    pub fn check_integrity(&self) -> Result<(), BoardDomainError> {
        let mut seen = HashSet::with_capacity(self.len());
        for (_, task) in self.iter() {
            if !seen.insert(task.id()) {
                return Err(BoardDomainError::DuplicateTask(task.id()));
            }
        }
        Ok(())
    }
}
