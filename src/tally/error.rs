//! Submission Errors

use thiserror::Error;

use crate::classifier::ClassificationError;

/// Why a submission left the tally untouched
#[derive(Error, Debug)]
pub enum SubmitError {
    /// Feedback was empty after trimming; no request was made
    #[error("Feedback is empty")]
    EmptyInput,

    /// The classification call failed in transport or returned junk
    #[error("Classification failed: {0}")]
    Classification(#[from] ClassificationError),
}

/// Result type for tally operations
pub type SubmitResult<T> = Result<T, SubmitError>;
