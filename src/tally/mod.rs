//! Sentiment Tally
//!
//! Three running counters fed by the classifier.
//!
//! ## Data Flow
//!
//! 1. `submit` trims the text and rejects empty input
//! 2. The classifier labels the text (no lock held)
//! 3. A known label increments one counter under the write lock
//! 4. The new snapshot is broadcast to refresh subscribers

mod engine;
mod error;
mod snapshot;

pub use engine::{FeedbackTally, SubmitReport};
pub use error::{SubmitError, SubmitResult};
pub use snapshot::TallySnapshot;
