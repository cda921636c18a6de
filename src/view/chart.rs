//! Bar Chart Dataset
//!
//! The chart is three fixed bars. The browser dashboard draws it from JSON;
//! the CLI draws it as text.

use serde::Serialize;
use std::fmt::Write;

use crate::classifier::Sentiment;
use crate::tally::TallySnapshot;

const DATASET_LABEL: &str = "Sentiment Count";
const BAR_GLYPH: char = '█';

/// Data for one redraw of the sentiment bar chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartDataset {
    pub labels: [&'static str; 3],
    pub label: &'static str,
    pub colors: [&'static str; 3],
    pub data: [u64; 3],
}

impl ChartDataset {
    pub fn from_snapshot(snapshot: &TallySnapshot) -> Self {
        Self {
            labels: Sentiment::ALL.map(|s| s.display_name()),
            label: DATASET_LABEL,
            colors: Sentiment::ALL.map(|s| s.color()),
            data: snapshot.chart_data(),
        }
    }

    /// Text rendering, one row per category. The largest bar spans `width`
    /// glyphs; an all-zero chart draws empty bars.
    pub fn render_text(&self, width: usize) -> String {
        let max = self.data.iter().copied().max().unwrap_or(0);
        let name_width = self.labels.iter().map(|l| l.len()).max().unwrap_or(0);
        let mut out = String::new();

        for (label, value) in self.labels.iter().zip(self.data) {
            let len = if max == 0 {
                0
            } else {
                (value as u128 * width as u128 / max as u128) as usize
            };
            let bar: String = std::iter::repeat(BAR_GLYPH).take(len).collect();
            let _ = writeln!(
                out,
                "{label:<name_width$} │{bar:<width$} {value}",
                label = label,
                name_width = name_width,
                bar = bar,
                width = width,
                value = value,
            );
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_order_and_colors() {
        let chart = ChartDataset::from_snapshot(&TallySnapshot::new(1, 0, 0));
        assert_eq!(chart.labels, ["Positive", "Neutral", "Negative"]);
        assert_eq!(chart.colors, ["#38a169", "#314366", "#F7511EFF"]);
        assert_eq!(chart.data, [1, 0, 0]);
    }

    #[test]
    fn test_render_text_scales_to_largest() {
        let chart = ChartDataset::from_snapshot(&TallySnapshot::new(4, 2, 0));
        let text = chart.render_text(8);
        let rows: Vec<&str> = text.lines().collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].matches(BAR_GLYPH).count(), 8);
        assert_eq!(rows[1].matches(BAR_GLYPH).count(), 4);
        assert_eq!(rows[2].matches(BAR_GLYPH).count(), 0);
        assert!(rows[0].starts_with("Positive"));
        assert!(rows[0].ends_with(" 4"));
    }

    #[test]
    fn test_render_text_empty_chart() {
        let chart = ChartDataset::from_snapshot(&TallySnapshot::default());
        let text = chart.render_text(10);
        assert!(!text.contains(BAR_GLYPH));
        assert!(text.lines().all(|row| row.ends_with(" 0")));
    }
}
