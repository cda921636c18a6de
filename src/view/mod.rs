//! Derived Views
//!
//! Everything shown to the user is a pure function of a [`TallySnapshot`]:
//! the chart dataset and the summary sentence, bundled as a [`View`], plus
//! the per-submission [`ResultLine`].

mod chart;
mod summary;

pub use chart::ChartDataset;
pub use summary::{
    summary, ResultLine, CLASSIFICATION_FAILED_MESSAGE, EMPTY_INPUT_MESSAGE, WELCOME_MESSAGE,
};

use serde::Serialize;

use crate::tally::TallySnapshot;

/// One refresh worth of view state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub tally: TallySnapshot,
    pub chart: ChartDataset,
    pub summary: String,
}

impl View {
    pub fn from_snapshot(snapshot: TallySnapshot) -> Self {
        Self {
            chart: ChartDataset::from_snapshot(&snapshot),
            summary: summary(&snapshot),
            tally: snapshot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_is_idempotent() {
        let snapshot = TallySnapshot::new(0, 1, 1);
        assert_eq!(View::from_snapshot(snapshot), View::from_snapshot(snapshot));
    }

    #[test]
    fn test_view_json_shape() {
        let json = serde_json::to_value(View::from_snapshot(TallySnapshot::default())).unwrap();
        assert_eq!(json["tally"]["total"], 0);
        assert_eq!(json["chart"]["data"], serde_json::json!([0, 0, 0]));
        assert_eq!(json["summary"], WELCOME_MESSAGE);
    }
}
