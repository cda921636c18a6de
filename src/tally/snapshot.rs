//! Tally Counters

use serde::{Deserialize, Serialize};

use crate::classifier::Sentiment;

/// The three running counters, copied out of the tally.
///
/// Serializes as `{"positive", "neutral", "negative", "total"}`; `total` is
/// derived and ignored when deserializing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "SnapshotRepr", from = "SnapshotRepr")]
pub struct TallySnapshot {
    pub positive: u64,
    pub neutral: u64,
    pub negative: u64,
}

impl TallySnapshot {
    pub fn new(positive: u64, neutral: u64, negative: u64) -> Self {
        Self {
            positive,
            neutral,
            negative,
        }
    }

    /// Number of submissions classified into a known category
    pub fn total(&self) -> u64 {
        self.positive + self.neutral + self.negative
    }

    pub fn count(&self, sentiment: Sentiment) -> u64 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    /// `[positive, neutral, negative]`
    pub fn chart_data(&self) -> [u64; 3] {
        [self.positive, self.neutral, self.negative]
    }

    pub(crate) fn record(&mut self, sentiment: Sentiment) {
        let counter = match sentiment {
            Sentiment::Positive => &mut self.positive,
            Sentiment::Neutral => &mut self.neutral,
            Sentiment::Negative => &mut self.negative,
        };
        *counter = counter.saturating_add(1);
    }
}

#[derive(Serialize, Deserialize)]
struct SnapshotRepr {
    positive: u64,
    neutral: u64,
    negative: u64,
    #[serde(default)]
    total: u64,
}

impl From<TallySnapshot> for SnapshotRepr {
    fn from(s: TallySnapshot) -> Self {
        Self {
            positive: s.positive,
            neutral: s.neutral,
            negative: s.negative,
            total: s.total(),
        }
    }
}

impl From<SnapshotRepr> for TallySnapshot {
    fn from(r: SnapshotRepr) -> Self {
        TallySnapshot::new(r.positive, r.neutral, r.negative)
    }
}
