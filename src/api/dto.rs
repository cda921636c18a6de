//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tally::SubmitReport;
use crate::view::{ResultLine, View};

// ============================================
// FEEDBACK DTOs
// ============================================

/// Feedback submission request, same shape the classifier receives
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    /// Free-text feedback; trimmed before use
    #[serde(default)]
    pub feedback: String,
}

/// Feedback submission response
#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    /// `"positive"`, `"neutral"`, `"negative"` or `"Unknown"`
    pub sentiment: String,
    /// Whether a counter was incremented
    pub tallied: bool,
    /// Inline result text
    pub message: String,
    /// Color for the result text
    pub color: String,
    pub classified_at: DateTime<Utc>,
    /// View after this submission
    pub view: View,
}

impl From<SubmitReport> for FeedbackResponse {
    fn from(report: SubmitReport) -> Self {
        let line = ResultLine::for_outcome(&report.outcome);

        Self {
            sentiment: report.outcome.display_label().to_string(),
            tallied: report.tallied(),
            message: line.message,
            color: line.color.to_string(),
            classified_at: report.classified_at,
            view: View::from_snapshot(report.snapshot),
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
    /// Submissions tallied so far
    pub total: u64,
    /// Open WebSocket refresh streams
    pub subscribers: usize,
}
