//! Service layer driving the board through creations and drag gestures.

use crate::board::{
    adapters::gesture::{GestureNormalizer, RawDragEvent},
    domain::{
        Board, BoardDomainError, DragGesture, NewTask, Stage, Task, Transition,
        compute_next_board,
    },
    ports::{BoardSnapshot, BoardStore, BoardStoreError},
};
use crate::settings::BoardSettings;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload from the task creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
}

impl CreateTaskRequest {
    /// Creates a request with the given title and an empty description.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// What a drag gesture did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The task was released outside every drop target.
    DroppedOutside,
    /// The task was dropped back where it started; nothing was replaced.
    Unchanged,
    /// The board was replaced with the contained board.
    Moved(Board),
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Domain validation or reordering failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] BoardStoreError),
    /// A raw drag event matched no supported shape.
    #[error("malformed drag event: {0}")]
    MalformedEvent(#[from] serde_json::Error),
}

impl BoardServiceError {
    /// Returns `true` when the gesture was rejected because the board moved
    /// on underneath it, either before or during the transition.
    #[must_use]
    pub const fn is_stale(&self) -> bool {
        match self {
            Self::Domain(err) => err.is_stale(),
            Self::Store(BoardStoreError::RevisionConflict { .. }) => true,
            Self::Store(BoardStoreError::Persistence(_)) | Self::MalformedEvent(_) => false,
        }
    }
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Board orchestration service.
///
/// Every mutation reads a snapshot, computes the next board from it, and
/// installs the result against the snapshot's revision. A failure at any
/// step leaves the stored board untouched.
#[derive(Clone)]
pub struct BoardService<S, C>
where
    S: BoardStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    normalizer: GestureNormalizer,
}

impl<S, C> BoardService<S, C>
where
    S: BoardStore,
    C: Clock + Send + Sync,
{
    /// Creates a board service with default settings.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self::with_settings(store, clock, &BoardSettings::default())
    }

    /// Creates a board service configured by `settings`.
    #[must_use]
    pub const fn with_settings(store: Arc<S>, clock: Arc<C>, settings: &BoardSettings) -> Self {
        Self {
            store,
            clock,
            normalizer: GestureNormalizer::new(settings.drop_precision),
        }
    }

    /// Returns the current board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store cannot be read.
    pub fn board(&self) -> BoardServiceResult<Board> {
        Ok(self.store.snapshot()?.into_board())
    }

    /// Validates the creation form input and appends the new task to
    /// [`Stage::Pending`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the title is blank; no
    /// task is constructed in that case.
    pub fn create_task(&self, request: CreateTaskRequest) -> BoardServiceResult<Task> {
        let content = NewTask::new(request.title)?.with_description(request.description);
        let task = Task::create(content, &*self.clock);
        self.append_to(Stage::Pending, task.clone())?;
        info!(task_id = %task.id(), title = %task.title(), "task created");
        Ok(task)
    }

    /// Appends `task` to the end of the stage named by `stage_key`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidStage`] for an unknown stage key
    /// and [`BoardDomainError::DuplicateTask`] when the task is already on
    /// the board.
    pub fn append(&self, stage_key: &str, task: Task) -> BoardServiceResult<Board> {
        let stage = Stage::try_from(stage_key).map_err(BoardDomainError::from)?;
        self.append_to(stage, task)
    }

    /// Appends `task` to the end of `stage`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateTask`] when the task is already
    /// on the board, or a store error when the replace fails.
    pub fn append_to(&self, stage: Stage, task: Task) -> BoardServiceResult<Board> {
        let snapshot = self.store.snapshot()?;
        let next = snapshot.board().with_appended(stage, task)?;
        self.install(&snapshot, next.clone())?;
        Ok(next)
    }

    /// Installs `next` as the current board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateTask`] when `next` holds a task
    /// twice, or a store error when the replace fails.
    pub fn replace(&self, next: Board) -> BoardServiceResult<()> {
        next.check_integrity()?;
        let snapshot = self.store.snapshot()?;
        self.install(&snapshot, next)
    }

    /// Applies a canonical drag gesture.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::StaleGesture`] when the gesture's source
    /// slot no longer holds the dragged task, and
    /// [`BoardStoreError::RevisionConflict`] when another transition landed
    /// while this one was computed. The board is unchanged in both cases.
    pub fn apply_gesture(&self, gesture: &DragGesture) -> BoardServiceResult<GestureOutcome> {
        let snapshot = self.store.snapshot()?;
        self.transition(&snapshot, gesture)
    }

    /// Normalizes a raw drag-library event and applies it.
    ///
    /// An event released outside every drop target reports
    /// [`GestureOutcome::DroppedOutside`] without consulting the board, and
    /// the dragged card is not checked for staleness.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::MalformedEvent`] when the payload matches
    /// no supported shape, [`BoardDomainError::InvalidStage`] for an unknown
    /// column, and the errors of [`Self::apply_gesture`].
    pub fn apply_raw_event(&self, payload: &str) -> BoardServiceResult<GestureOutcome> {
        let event = RawDragEvent::from_json(payload)?;
        if event.is_released_outside() {
            debug!(task_id = event.dragged_id(), "task dropped outside any stage");
            return Ok(GestureOutcome::DroppedOutside);
        }
        let snapshot = self.store.snapshot()?;
        let gesture = self
            .normalizer
            .normalize(snapshot.board(), &event)
            .inspect_err(|err| warn!(error = %err, "drag event rejected during normalization"))?;
        self.transition(&snapshot, &gesture)
    }

    fn transition(
        &self,
        snapshot: &BoardSnapshot,
        gesture: &DragGesture,
    ) -> BoardServiceResult<GestureOutcome> {
        let transition = compute_next_board(snapshot.board(), gesture).inspect_err(|err| {
            warn!(
                task_id = %gesture.dragged_task_id,
                error = %err,
                "drag gesture rejected"
            );
        })?;

        let next = match transition {
            Transition::NoOp => {
                debug!(task_id = %gesture.dragged_task_id, "task dropped outside any stage");
                return Ok(GestureOutcome::DroppedOutside);
            }
            Transition::Next(next) => next,
        };
        if &next == snapshot.board() {
            debug!(task_id = %gesture.dragged_task_id, "task dropped in place");
            return Ok(GestureOutcome::Unchanged);
        }

        self.install(snapshot, next.clone())?;
        debug!(
            task_id = %gesture.dragged_task_id,
            from_stage = %gesture.source.stage,
            from_index = gesture.source.index,
            to_stage = ?gesture.destination.map(|target| target.stage),
            to_index = ?gesture.destination.and_then(|target| target.index),
            "task moved"
        );
        Ok(GestureOutcome::Moved(next))
    }

    fn install(&self, snapshot: &BoardSnapshot, next: Board) -> BoardServiceResult<()> {
        self.store
            .replace(snapshot.revision(), next)
            .inspect_err(|err| warn!(error = %err, "board replace rejected"))?;
        Ok(())
    }
}
