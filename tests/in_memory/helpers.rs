//! Shared test helpers for in-memory board integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use weekboard::board::{
    adapters::memory::InMemoryBoardStore,
    domain::{Board, Stage, TaskId},
    services::{BoardService, CreateTaskRequest},
};

/// Service type used by the integration tests.
pub type TestService = BoardService<InMemoryBoardStore, DefaultClock>;

/// Provides a service over a fresh, empty in-memory store.
#[fixture]
pub fn service() -> TestService {
    BoardService::new(Arc::new(InMemoryBoardStore::new()), Arc::new(DefaultClock))
}

/// Creates pending tasks with the given titles, in order.
pub fn create_all(service: &TestService, titles: &[&str]) -> Vec<TaskId> {
    titles
        .iter()
        .map(|title| {
            service
                .create_task(CreateTaskRequest::new(*title))
                .expect("task creation should succeed")
                .id()
        })
        .collect()
}

/// Returns the titles held by `stage`, in order.
pub fn titles(board: &Board, stage: Stage) -> Vec<String> {
    board
        .stage(stage)
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect()
}

/// Returns the current board from the service.
pub fn current(service: &TestService) -> Board {
    service.board().expect("board should be readable")
}
