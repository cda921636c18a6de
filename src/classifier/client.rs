//! Classification Endpoint Client
//!
//! HTTP client for the remote sentiment-classification service.
//! One `POST` per submission, no retries.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use super::sentiment::ClassificationOutcome;
use super::Classifier;
use crate::config::ClassifierConfig;

/// Classifier backed by the remote HTTP endpoint
pub struct HttpClassifier {
    client: Client,
    config: ClassifierConfig,
}

impl HttpClassifier {
    /// Create a new client for the configured endpoint
    pub fn new(config: ClassifierConfig) -> Result<Self, ClassificationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ClassificationError::Request)?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    async fn classify(&self, feedback: &str) -> Result<ClassificationOutcome, ClassificationError> {
        let body = ClassifyRequest { feedback };

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClassificationError::Timeout
                } else if e.is_connect() {
                    ClassificationError::Unavailable
                } else {
                    ClassificationError::Request(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClassificationError::Status {
                status: status.as_u16(),
                message: text,
            });
        }

        let bytes = response.bytes().await.map_err(ClassificationError::Request)?;
        let parsed: ClassifyResponse = serde_json::from_slice(&bytes)?;

        let outcome = ClassificationOutcome::from_label(parsed.label());
        tracing::debug!(
            endpoint = %self.config.endpoint,
            label = outcome.display_label(),
            "Classification received"
        );

        Ok(outcome)
    }
}

// ============================================
// Request/Response DTOs
// ============================================

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    feedback: &'a str,
}

/// Any JSON document is accepted; only a string `sentiment` member is read.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct ClassifyResponse(serde_json::Value);

impl ClassifyResponse {
    fn label(&self) -> Option<&str> {
        self.0.get("sentiment").and_then(|v| v.as_str())
    }
}

// ============================================
// Errors
// ============================================

/// Errors that can occur when calling the classification endpoint
#[derive(Error, Debug)]
pub enum ClassificationError {
    #[error("Classification service unavailable")]
    Unavailable,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Classification service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed classification response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Request timeout")]
    Timeout,
}
