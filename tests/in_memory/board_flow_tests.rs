//! In-memory integration tests for creation and drag sequences.

use super::helpers::{TestService, create_all, current, service, titles};
use rstest::rstest;
use weekboard::board::{
    domain::{DragGesture, Stage},
    services::{BoardServiceError, CreateTaskRequest, GestureOutcome},
};

#[rstest]
fn new_service_starts_with_an_empty_board(service: TestService) {
    let board = current(&service);

    assert!(board.is_empty());
    for stage in Stage::ALL {
        assert!(board.is_stage_empty(stage));
    }
}

#[rstest]
fn created_tasks_queue_in_pending(service: TestService) {
    let ids = create_all(&service, &["Plan week", "Buy milk"]);
    let board = current(&service);

    assert_eq!(titles(&board, Stage::Pending), vec!["Plan week", "Buy milk"]);
    assert_eq!(board.counts().total(), 2);
    assert_ne!(ids.first(), ids.last());
}

#[rstest]
fn task_travels_through_every_stage(service: TestService) {
    let ids = create_all(&service, &["Ship release"]);
    let id = *ids.first().expect("one task was created");

    service
        .apply_gesture(&DragGesture::new(id, Stage::Pending, 0).dropped_at(Stage::InProgress, 0))
        .expect("start work");
    service
        .apply_gesture(&DragGesture::new(id, Stage::InProgress, 0).dropped_on_stage(Stage::Completed))
        .expect("finish work");

    let board = current(&service);
    assert_eq!(titles(&board, Stage::Completed), vec!["Ship release"]);
    assert!(board.is_stage_empty(Stage::Pending));
    assert!(board.is_stage_empty(Stage::InProgress));
}

#[rstest]
fn reorder_then_create_keeps_every_task_once(service: TestService) {
    let ids = create_all(&service, &["A", "B", "C", "D"]);
    let a = *ids.first().expect("tasks were created");

    let outcome = service
        .apply_gesture(&DragGesture::new(a, Stage::Pending, 0).dropped_at(Stage::Pending, 2))
        .expect("reorder applies");
    service
        .create_task(CreateTaskRequest::new("E"))
        .expect("task creation should succeed");

    assert!(matches!(outcome, GestureOutcome::Moved(_)));
    let board = current(&service);
    assert_eq!(titles(&board, Stage::Pending), vec!["B", "C", "A", "D", "E"]);
    assert!(board.check_integrity().is_ok());
}

#[rstest]
fn gesture_with_outdated_source_slot_is_rejected(service: TestService) {
    let ids = create_all(&service, &["A", "B"]);
    let b = *ids.last().expect("tasks were created");
    let a = *ids.first().expect("tasks were created");
    service
        .apply_gesture(&DragGesture::new(a, Stage::Pending, 0).dropped_on_stage(Stage::Completed))
        .expect("first move applies");
    let before = current(&service);

    let result =
        service.apply_gesture(&DragGesture::new(b, Stage::Pending, 1).dropped_at(Stage::Pending, 0));

    assert!(result.as_ref().is_err_and(BoardServiceError::is_stale));
    assert_eq!(current(&service), before);
}
