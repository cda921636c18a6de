//! Summary Sentence and Result Line

use serde::Serialize;

use crate::classifier::ClassificationOutcome;
use crate::tally::{SubmitError, TallySnapshot};

/// Shown while nothing has been tallied
pub const WELCOME_MESSAGE: &str = "Welcome! Enter feedback to test out our sentiment AI. Your feedback powers smarter analytics for product teams.";

const POSITIVE_CLAUSE: &str = "Overall sentiment is mostly positive 🚀.";
const NEGATIVE_CLAUSE: &str = "Overall sentiment trend is negative 🛑.";
const NEUTRAL_CLAUSE: &str = "Sentiment is mostly neutral.";

/// Inline message for whitespace-only input
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter feedback before submitting.";

/// Inline message when the classification call fails
pub const CLASSIFICATION_FAILED_MESSAGE: &str = "Error analyzing sentiment. Try again.";

const UNKNOWN_COLOR: &str = "#b22222";
const ALERT_COLOR: &str = "#F7511EFF";
const PENDING_COLOR: &str = "#314366";

/// Summary sentence for the current tally.
///
/// A category wins only with a strict majority over both others; ties and
/// neutral majorities fall through to the neutral clause.
pub fn summary(snapshot: &TallySnapshot) -> String {
    let total = snapshot.total();
    if total == 0 {
        return WELCOME_MESSAGE.to_string();
    }

    let TallySnapshot {
        positive,
        neutral,
        negative,
    } = *snapshot;

    let clause = if positive > neutral && positive > negative {
        POSITIVE_CLAUSE
    } else if negative > neutral && negative > positive {
        NEGATIVE_CLAUSE
    } else {
        NEUTRAL_CLAUSE
    };

    format!("Total feedback analyzed: {}. {}", total, clause)
}

/// Inline status line shown under the input box
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultLine {
    pub message: String,
    pub color: &'static str,
}

impl ResultLine {
    pub fn pending() -> Self {
        Self {
            message: "Analyzing sentiment...".to_string(),
            color: PENDING_COLOR,
        }
    }

    pub fn for_outcome(outcome: &ClassificationOutcome) -> Self {
        let color = match outcome.sentiment() {
            Some(sentiment) => sentiment.color(),
            None => UNKNOWN_COLOR,
        };

        Self {
            message: format!("Predicted Sentiment: {}", outcome.display_label()),
            color,
        }
    }

    pub fn for_error(error: &SubmitError) -> Self {
        let message = match error {
            SubmitError::EmptyInput => EMPTY_INPUT_MESSAGE,
            SubmitError::Classification(_) => CLASSIFICATION_FAILED_MESSAGE,
        };

        Self {
            message: message.to_string(),
            color: ALERT_COLOR,
        }
    }
}
