//! Liveness/readiness probe

use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// GET /health
///
/// Reports 503 when the record store cannot answer a trivial query.
pub async fn health_check(State(state): State<AppState>) -> Response {
    let version = env!("CARGO_PKG_VERSION");

    match state.course_service.count_courses().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "version": version })),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable", "version": version })),
            )
                .into_response()
        }
    }
}
