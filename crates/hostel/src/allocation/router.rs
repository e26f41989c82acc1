use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::engine::{AddStudentError, AllocationEngine, AssignRoomError};
use super::views::{RoomOverviewEntry, RosterView, StudentListEntry};

/// Payload of the "Add New Student" form. Missing fields count as blank.
#[derive(Debug, Default, Deserialize)]
pub struct AddStudentForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: String,
}

/// Payload of the "Assign Student to Room" form.
#[derive(Debug, Default, Deserialize)]
pub struct AssignRoomForm {
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub room_number: Option<String>,
}

/// Router builder exposing the two form submissions and the roster queries.
pub fn allocation_router(engine: Arc<AllocationEngine>) -> Router {
    Router::new()
        .route(
            "/api/v1/students",
            post(add_student_handler).get(student_list_handler),
        )
        .route("/api/v1/assignments", post(assign_room_handler))
        .route("/api/v1/rooms", get(room_overview_handler))
        .route("/api/v1/roster", get(roster_handler))
        .with_state(engine)
}

pub(crate) async fn add_student_handler(
    State(engine): State<Arc<AllocationEngine>>,
    Json(form): Json<AddStudentForm>,
) -> Response {
    match engine.add_student(&form.name, &form.id) {
        Ok(()) => (StatusCode::CREATED, Json(engine.snapshot().view())).into_response(),
        Err(error) => {
            let status = match error {
                AddStudentError::EmptyField => StatusCode::UNPROCESSABLE_ENTITY,
                AddStudentError::DuplicateId(_) => StatusCode::CONFLICT,
            };
            rejection(status, &error)
        }
    }
}

pub(crate) async fn assign_room_handler(
    State(engine): State<Arc<AllocationEngine>>,
    Json(form): Json<AssignRoomForm>,
) -> Response {
    let student_id = form.student_id.as_deref().unwrap_or_default();
    let room_number = form.room_number.as_deref().unwrap_or_default();

    match engine.assign_room(student_id, room_number) {
        Ok(()) => (StatusCode::OK, Json(engine.snapshot().view())).into_response(),
        Err(error) => {
            let status = match error {
                AssignRoomError::MissingSelection => StatusCode::UNPROCESSABLE_ENTITY,
                AssignRoomError::StudentNotFound(_) | AssignRoomError::RoomNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                AssignRoomError::AlreadyAssigned { .. } | AssignRoomError::RoomFull { .. } => {
                    StatusCode::CONFLICT
                }
            };
            rejection(status, &error)
        }
    }
}

pub(crate) async fn student_list_handler(
    State(engine): State<Arc<AllocationEngine>>,
) -> Json<Vec<StudentListEntry>> {
    Json(engine.snapshot().student_list())
}

pub(crate) async fn room_overview_handler(
    State(engine): State<Arc<AllocationEngine>>,
) -> Json<Vec<RoomOverviewEntry>> {
    Json(engine.snapshot().room_overview())
}

pub(crate) async fn roster_handler(State(engine): State<Arc<AllocationEngine>>) -> Json<RosterView> {
    Json(engine.snapshot().view())
}

fn rejection(status: StatusCode, error: &dyn std::error::Error) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (status, Json(payload)).into_response()
}
