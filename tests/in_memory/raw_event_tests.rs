//! In-memory integration tests for drag-library payloads.

use std::sync::Arc;

use super::helpers::{TestService, create_all, current, service, titles};
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::json;
use weekboard::{
    board::{
        adapters::{gesture::DropPrecision, memory::InMemoryBoardStore},
        domain::{BoardDomainError, Stage},
        services::{BoardService, BoardServiceError, GestureOutcome},
    },
    settings::BoardSettings,
};

#[rstest]
fn sortable_drop_on_column_appends(service: TestService) {
    let ids = create_all(&service, &["A", "B"]);
    let a = ids.first().expect("tasks were created").to_string();

    let outcome = service
        .apply_raw_event(&json!({ "active": { "id": a }, "over": { "id": "completed" } }).to_string())
        .expect("event applies");

    assert!(matches!(outcome, GestureOutcome::Moved(_)));
    let board = current(&service);
    assert_eq!(titles(&board, Stage::Pending), vec!["B"]);
    assert_eq!(titles(&board, Stage::Completed), vec!["A"]);
}

#[rstest]
fn sortable_release_outside_changes_nothing(service: TestService) {
    let ids = create_all(&service, &["A"]);
    let before = current(&service);
    let a = ids.first().expect("task was created").to_string();

    let outcome = service
        .apply_raw_event(&json!({ "active": { "id": a }, "over": null }).to_string())
        .expect("event applies");

    assert_eq!(outcome, GestureOutcome::DroppedOutside);
    assert_eq!(current(&service), before);
}

#[rstest]
fn droppable_reorder_within_a_column(service: TestService) {
    let ids = create_all(&service, &["A", "B", "C"]);
    let a = ids.first().expect("tasks were created").to_string();
    let payload = json!({
        "draggableId": a,
        "source": { "droppableId": "pending", "index": 0 },
        "destination": { "droppableId": "pending", "index": 2 },
    });

    service
        .apply_raw_event(&payload.to_string())
        .expect("event applies");

    assert_eq!(titles(&current(&service), Stage::Pending), vec!["B", "C", "A"]);
}

#[rstest]
fn droppable_with_stale_source_index_is_rejected(service: TestService) {
    let ids = create_all(&service, &["A", "B"]);
    let a = ids.first().expect("tasks were created").to_string();
    let before = current(&service);
    let payload = json!({
        "draggableId": a,
        "source": { "droppableId": "pending", "index": 1 },
        "destination": { "droppableId": "completed", "index": 0 },
    });

    let result = service.apply_raw_event(&payload.to_string());

    assert!(matches!(
        result,
        Err(BoardServiceError::Domain(BoardDomainError::StaleGesture(_)))
    ));
    assert_eq!(current(&service), before);
}

#[rstest]
fn configured_stage_only_precision_ignores_drop_slots() {
    let settings = BoardSettings::from_json(r#"{"drop_precision":"stage_only"}"#)
        .expect("settings parse");
    assert_eq!(settings.drop_precision, DropPrecision::StageOnly);
    let service = BoardService::with_settings(
        Arc::new(InMemoryBoardStore::new()),
        Arc::new(DefaultClock),
        &settings,
    );
    let ids = create_all(&service, &["A", "B", "C"]);
    let a = ids.first().expect("tasks were created").to_string();
    let payload = json!({
        "draggableId": a,
        "source": { "droppableId": "pending", "index": 0 },
        "destination": { "droppableId": "pending", "index": 1 },
    });

    service
        .apply_raw_event(&payload.to_string())
        .expect("event applies");

    assert_eq!(titles(&current(&service), Stage::Pending), vec!["B", "C", "A"]);
}

#[rstest]
#[case(json!({ "active": { "id": "0190f5a4-7c1e-7a2b-9c3d-4e5f60718293" }, "over": null }))]
#[case(json!({
    "draggableId": "task-1700000000000",
    "source": { "droppableId": "pending", "index": 0 },
    "destination": null,
}))]
fn release_outside_of_a_vanished_card_changes_nothing(
    service: TestService,
    #[case] payload: serde_json::Value,
) {
    create_all(&service, &["A"]);
    let before = current(&service);

    let outcome = service
        .apply_raw_event(&payload.to_string())
        .expect("abandoned drag is not checked for staleness");

    assert_eq!(outcome, GestureOutcome::DroppedOutside);
    assert_eq!(current(&service), before);
}
