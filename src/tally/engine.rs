//! Feedback Tally
//!
//! Owns the counters and runs the submit → classify → count → refresh cycle.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use super::error::{SubmitError, SubmitResult};
use super::snapshot::TallySnapshot;
use crate::classifier::{ClassificationOutcome, Classifier};

/// Capacity of the refresh channel. Slow receivers skip to newer snapshots.
const REFRESH_CAPACITY: usize = 64;

/// Result of a submission the classifier answered
#[derive(Debug, Clone)]
pub struct SubmitReport {
    pub outcome: ClassificationOutcome,
    /// Tally after this submission was applied
    pub snapshot: TallySnapshot,
    pub classified_at: DateTime<Utc>,
}

impl SubmitReport {
    /// Whether a counter was incremented
    pub fn tallied(&self) -> bool {
        self.outcome.sentiment().is_some()
    }
}

/// Running sentiment tally for one process
pub struct FeedbackTally {
    classifier: Arc<dyn Classifier>,
    counts: RwLock<TallySnapshot>,
    refresh_tx: broadcast::Sender<TallySnapshot>,
}

impl FeedbackTally {
    /// Create an empty tally backed by the given classifier
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        let (refresh_tx, _) = broadcast::channel(REFRESH_CAPACITY);

        Self {
            classifier,
            counts: RwLock::new(TallySnapshot::default()),
            refresh_tx,
        }
    }

    /// Submit one piece of feedback.
    ///
    /// Whitespace-only input fails with [`SubmitError::EmptyInput`] before any
    /// request is made. A known label increments exactly one counter; an
    /// unknown label increments nothing. Either way subscribers get a refresh.
    /// On error the tally is unchanged and no refresh is sent.
    pub async fn submit(&self, text: &str) -> SubmitResult<SubmitReport> {
        let feedback = text.trim();
        if feedback.is_empty() {
            tracing::debug!("Rejected empty feedback");
            return Err(SubmitError::EmptyInput);
        }

        // The lock is not held across the network call
        let outcome = self.classifier.classify(feedback).await.map_err(|e| {
            tracing::warn!(error = %e, "Sentiment classification failed");
            SubmitError::Classification(e)
        })?;

        // Publish while the guard is held so refreshes leave in tally order
        let snapshot = match outcome.sentiment() {
            Some(sentiment) => {
                let mut counts = self.counts.write().await;
                counts.record(sentiment);
                self.publish(*counts);
                *counts
            }
            None => {
                let counts = self.counts.read().await;
                self.publish(*counts);
                *counts
            }
        };

        tracing::info!(
            label = outcome.display_label(),
            total = snapshot.total(),
            positive = snapshot.positive,
            neutral = snapshot.neutral,
            negative = snapshot.negative,
            "Feedback classified"
        );

        Ok(SubmitReport {
            outcome,
            snapshot,
            classified_at: Utc::now(),
        })
    }

    /// Current counters
    pub async fn snapshot(&self) -> TallySnapshot {
        *self.counts.read().await
    }

    /// Receive a snapshot after every answered submission
    pub fn subscribe(&self) -> broadcast::Receiver<TallySnapshot> {
        self.refresh_tx.subscribe()
    }

    /// Number of live refresh subscribers
    pub fn subscriber_count(&self) -> usize {
        self.refresh_tx.receiver_count()
    }

    fn publish(&self, snapshot: TallySnapshot) {
        // No receivers is fine; the next subscriber reads `snapshot()` first
        let _ = self.refresh_tx.send(snapshot);
    }
}
