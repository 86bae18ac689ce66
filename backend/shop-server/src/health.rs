use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Health check with component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "store": "operational",
            "auth": if state.auth_enabled() { "enabled" } else { "disabled" },
            "metrics": if state.prometheus.is_some() { "enabled" } else { "disabled" },
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe (ready to accept traffic?)
pub async fn readiness_check() -> Response {
    // The in-memory store has no warm-up phase
    (StatusCode::OK, "Ready").into_response()
}
