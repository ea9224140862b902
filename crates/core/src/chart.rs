use serde::{Deserialize, Serialize};

/// X-axis title carried in every resolved chart.
pub const X_AXIS_TITLE: &str = "Date de relevé";

/// Legend title carried in every resolved chart.
pub const LEGEND_TITLE: &str = "Légende";

/// One plotted line: a legend name (already wrapped for display) plus one
/// value per period of the owning chart's x-domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<Option<i64>>,
}

/// Renderer-agnostic description of what to draw for a selection.
///
/// Contract guaranteed to the renderer: `series` / `left_series` /
/// `right_series` are non-empty, and every series in one spec shares the
/// spec's `periods` as its x-domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    /// Nothing selected. The caller keeps the last rendered chart.
    Empty,
    /// More than two keys selected. The caller keeps the last rendered
    /// chart and shows the "too many selected" notice.
    Rejected,
    /// One metric family, one series per matched row.
    SingleAxis {
        title: String,
        x_label: String,
        y_label: String,
        legend_title: String,
        /// Explicit y range, set only for percentage-unit metrics.
        /// Everything else auto-scales.
        #[serde(skip_serializing_if = "Option::is_none")]
        range_hint: Option<(f64, f64)>,
        periods: Vec<String>,
        series: Vec<Series>,
    },
    /// Two metric families overlaid on a shared x-domain with independent
    /// y-scales.
    DualAxis {
        title: String,
        x_label: String,
        legend_title: String,
        left_label: String,
        right_label: String,
        periods: Vec<String>,
        left_series: Vec<Series>,
        right_series: Vec<Series>,
    },
}

impl ChartSpec {
    /// True when the selection was refused outright (too many keys).
    /// Drives the user-facing notice; distinct from [`ChartSpec::Empty`],
    /// which shows nothing.
    pub fn is_rejected(&self) -> bool {
        matches!(self, ChartSpec::Rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_is_distinct_from_empty() {
        assert!(ChartSpec::Rejected.is_rejected());
        assert!(!ChartSpec::Empty.is_rejected());
        assert_ne!(ChartSpec::Rejected, ChartSpec::Empty);
    }
}
