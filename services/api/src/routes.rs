use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use hostel::allocation::{allocation_router, AllocationEngine};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_roster_routes(engine: Arc<AllocationEngine>) -> axum::Router {
    allocation_router(engine)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::standard_engine;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    async fn read_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("valid json")
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn roster_routes_are_mounted_next_to_health() {
        let engine = standard_engine().expect("standard layout seeds");
        let router = with_roster_routes(engine);

        let health = router
            .clone()
            .oneshot(Request::get("/health").body(Body::empty()).expect("request builds"))
            .await
            .expect("route executes");
        assert_eq!(health.status(), StatusCode::OK);

        let rooms = router
            .oneshot(Request::get("/api/v1/rooms").body(Body::empty()).expect("request builds"))
            .await
            .expect("route executes");
        assert_eq!(rooms.status(), StatusCode::OK);
        let rooms = read_json(rooms).await;
        assert_eq!(rooms.as_array().map(Vec::len), Some(4));
        assert_eq!(rooms[0]["occupancy_label"], "Occupancy: 0 / 2");
    }

    #[tokio::test]
    async fn add_student_route_returns_roster_view() {
        let engine = standard_engine().expect("standard layout seeds");
        let router = with_roster_routes(engine.clone());

        let response = router
            .oneshot(
                Request::post("/api/v1/students")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"name":"Alice","id":"GH001"}"#))
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::CREATED);
        let view = read_json(response).await;
        assert_eq!(view["student_options"][0]["label"], "Alice (GH001)");
        assert_eq!(engine.snapshot().students().len(), 1);
    }
}
