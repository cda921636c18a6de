//! # Feedback Pulse
//!
//! Submit free-text feedback, classify it with a remote sentiment service,
//! and keep a running tally rendered as a bar chart and a summary sentence.
//!
//! ## Modules
//!
//! - [`classifier`]: the classification seam and its HTTP client
//! - [`tally`]: the three counters and the submit cycle
//! - [`view`]: chart dataset, summary sentence, result line
//! - [`api`]: REST API and dashboard with Axum
//! - [`websocket`]: view refresh stream
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use feedback_pulse::{ClassifierConfig, FeedbackTally, HttpClassifier, View};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let classifier = Arc::new(HttpClassifier::new(ClassifierConfig::default())?);
//!     let tally = FeedbackTally::new(classifier);
//!
//!     let report = tally.submit("great product").await?;
//!     println!("{}", report.outcome.display_label());
//!
//!     let view = View::from_snapshot(tally.snapshot().await);
//!     println!("{}", view.summary);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod classifier;
pub mod config;
pub mod logging;
pub mod tally;
pub mod view;
pub mod websocket;

pub use api::{build_router, serve, ApiError, AppState};

pub use classifier::{
    ClassificationError, ClassificationOutcome, Classifier, HttpClassifier, Sentiment,
};

pub use tally::{FeedbackTally, SubmitError, SubmitReport, SubmitResult, TallySnapshot};

pub use view::{summary, ChartDataset, ResultLine, View, WELCOME_MESSAGE};

pub use config::{
    ApiConfig, ClassifierConfig, Config, ConfigError, ConfigSource, LoggingConfig, ViewConfig,
};
