//! Feedback Routes
//!
//! - POST /api/v1/feedback - Classify and tally one piece of feedback
//! - GET /api/v1/view - Current chart dataset and summary

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{FeedbackRequest, FeedbackResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::view::View;

/// POST /api/v1/feedback
///
/// Empty feedback is rejected with 400 before the classifier is called.
/// A body that is not a JSON feedback object is also a 400 with the usual
/// error body. A classifier failure maps to 502 and leaves the tally unchanged.
pub async fn submit_feedback(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> ApiResult<Json<FeedbackResponse>> {
    let Json(req) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    let report = state.tally.submit(&req.feedback).await?;
    Ok(Json(FeedbackResponse::from(report)))
}

/// GET /api/v1/view
pub async fn get_view(State(state): State<Arc<AppState>>) -> Json<View> {
    Json(View::from_snapshot(state.tally.snapshot().await))
}
