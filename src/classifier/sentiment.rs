//! Sentiment Labels
//!
//! The three tallied categories and the outcome of a single classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three sentiment categories that are counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// All categories in chart order
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// Match a wire label exactly. Case matters: `"Positive"` is not a known label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "positive" => Some(Sentiment::Positive),
            "neutral" => Some(Sentiment::Neutral),
            "negative" => Some(Sentiment::Negative),
            _ => None,
        }
    }

    /// Wire label
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    /// Chart category label
    pub fn display_name(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }

    /// Color used for the chart bar and the result line
    pub fn color(&self) -> &'static str {
        match self {
            Sentiment::Positive => "#38a169",
            Sentiment::Neutral => "#314366",
            Sentiment::Negative => "#F7511EFF",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one piece of feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationOutcome {
    /// A label in one of the tallied categories
    Known(Sentiment),
    /// The service answered, but with no label or one we don't count.
    /// Holds the raw label when there was a string to hold.
    Unknown(Option<String>),
}

impl ClassificationOutcome {
    /// Interpret the `sentiment` field of a classification response
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some(raw) => match Sentiment::from_label(raw) {
                Some(sentiment) => ClassificationOutcome::Known(sentiment),
                None if raw.is_empty() => ClassificationOutcome::Unknown(None),
                None => ClassificationOutcome::Unknown(Some(raw.to_string())),
            },
            None => ClassificationOutcome::Unknown(None),
        }
    }

    /// The tallied category, if any
    pub fn sentiment(&self) -> Option<Sentiment> {
        match self {
            ClassificationOutcome::Known(sentiment) => Some(*sentiment),
            ClassificationOutcome::Unknown(_) => None,
        }
    }

    /// Label shown to the user
    pub fn display_label(&self) -> &'static str {
        match self {
            ClassificationOutcome::Known(sentiment) => sentiment.as_str(),
            ClassificationOutcome::Unknown(_) => "Unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        for sentiment in Sentiment::ALL {
            assert_eq!(Sentiment::from_label(sentiment.as_str()), Some(sentiment));
        }
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert_eq!(Sentiment::from_label("Positive"), None);
        assert_eq!(Sentiment::from_label("NEGATIVE"), None);
    }

    #[test]
    fn test_outcome_from_label() {
        assert_eq!(
            ClassificationOutcome::from_label(Some("neutral")),
            ClassificationOutcome::Known(Sentiment::Neutral)
        );
        assert_eq!(
            ClassificationOutcome::from_label(Some("mixed")),
            ClassificationOutcome::Unknown(Some("mixed".to_string()))
        );
        assert_eq!(
            ClassificationOutcome::from_label(Some("")),
            ClassificationOutcome::Unknown(None)
        );
        assert_eq!(
            ClassificationOutcome::from_label(None),
            ClassificationOutcome::Unknown(None)
        );
    }

    #[test]
    fn test_unknown_display_label() {
        let outcome = ClassificationOutcome::Unknown(Some("mixed".to_string()));
        assert_eq!(outcome.display_label(), "Unknown");
        assert_eq!(outcome.sentiment(), None);
    }
}
