//! Sentiment Classification
//!
//! The seam between the tally and whatever labels the feedback.
//!
//! - **Classifier**: async trait, one call per submission
//! - **HttpClassifier**: the remote `POST {"feedback": ...}` endpoint
//! - **ClassificationOutcome**: a tallied [`Sentiment`] or an untallied unknown label

mod client;
mod sentiment;

#[cfg(test)]
pub(crate) mod fake;

pub use client::{ClassificationError, HttpClassifier};
pub use sentiment::{ClassificationOutcome, Sentiment};

use async_trait::async_trait;

/// Labels a single piece of feedback
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify already-trimmed, non-empty feedback text
    async fn classify(&self, feedback: &str) -> Result<ClassificationOutcome, ClassificationError>;
}
