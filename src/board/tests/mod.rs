//! Unit tests for the board module.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]


use crate::board::domain::{Board, NewTask, Stage, Task, TaskId};
use chrono::{DateTime, TimeZone, Utc};

/// Fixed creation time shared by fixture tasks.
fn fixture_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 12, 9, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Builds a task with a fresh identifier and the fixture creation time.
fn task(title: &str) -> Task {
    let created_at = fixture_time();
    Task::from_parts(
        TaskId::for_creation_at(created_at),
        NewTask::new(title).expect("fixture titles are non-empty"),
        created_at,
    )
}

/// Builds a board whose stages hold tasks with the given titles, in order.
fn board_of(pending: &[&str], in_progress: &[&str], completed: &[&str]) -> Board {
    let stages = [
        (Stage::Pending, pending),
        (Stage::InProgress, in_progress),
        (Stage::Completed, completed),
    ];
    stages
        .into_iter()
        .flat_map(|(stage, titles)| titles.iter().map(move |title| (stage, *title)))
        .fold(Board::new(), |board, (stage, title)| {
            board
                .with_appended(stage, task(title))
                .expect("fixture tasks are unique")
        })
}

/// Returns the titles of `stage` in board order.
fn titles(board: &Board, stage: Stage) -> Vec<String> {
    board
        .stage(stage)
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect()
}

/// Returns the identifier of the task titled `title`.
fn id_of(board: &Board, title: &str) -> TaskId {
    board
        .iter()
        .find(|(_, task)| task.title().as_str() == title)
        .map(|(_, task)| task.id())
        .expect("fixture title is on the board")
}
