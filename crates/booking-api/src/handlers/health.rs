//! Health check handler

use axum::extract::State;
use axum::http::StatusCode;

use crate::state::AppState;

/// Liveness/readiness probe
///
/// GET /healthcheck
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, &'static str) {
    let db_healthy = state
        .service_context()
        .pool()
        .acquire()
        .await
        .is_ok();

    if db_healthy {
        (StatusCode::OK, "OK")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "DB unavailable")
    }
}
