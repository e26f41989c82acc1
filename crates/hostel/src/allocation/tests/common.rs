use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::allocation::{AllocationEngine, HostelLayout, RosterSnapshot, RosterStore};

pub(super) fn seeded_roster() -> RosterSnapshot {
    RosterSnapshot::seeded(&HostelLayout::standard()).expect("standard layout seeds")
}

pub(super) fn build_engine() -> Arc<AllocationEngine> {
    let store = RosterStore::new(&HostelLayout::standard()).expect("standard layout seeds");
    Arc::new(AllocationEngine::new(Arc::new(store)))
}

/// Registers each `(name, id)` pair, panicking on rejection.
pub(super) fn register(engine: &AllocationEngine, students: &[(&str, &str)]) {
    for (name, id) in students {
        engine
            .add_student(name, id)
            .unwrap_or_else(|err| panic!("registering {id} failed: {err}"));
    }
}

pub(super) fn occupants(roster: &RosterSnapshot, room: &str) -> Vec<String> {
    roster
        .find_room(room)
        .expect("room exists")
        .current_occupants
        .iter()
        .map(|id| id.to_string())
        .collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("valid json body")
}

pub(super) async fn assert_error_response(response: Response, status: StatusCode, message: &str) {
    assert_eq!(response.status(), status);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("error").and_then(Value::as_str),
        Some(message),
        "unexpected payload {payload}"
    );
}
