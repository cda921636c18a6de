//! Health Routes
//!
//! - GET /health/live - 200 while the server accepts requests
//! - GET /health - Uptime, version, feedback total and dashboard count

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Always 200; the classification endpoint is not contacted.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Reports the tally total and the number of connected dashboards. The
/// classifier is only ever called on submission, so it is not checked here.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let snapshot = state.tally.snapshot().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        total: snapshot.total(),
        subscribers: state.tally.subscriber_count(),
    })
}
