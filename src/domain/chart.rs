// Chart presentation domain models
use super::metrics::Metric;
use serde::Serialize;

const MAX_TICK_CHARS: usize = 15;
const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Doughnut,
    Line,
    HorizontalBar,
    VerticalBar,
}

impl ChartKind {
    /// The Chart.js `type` for this kind. Bar orientation is carried by `indexAxis`.
    pub fn chart_type(&self) -> &'static str {
        match self {
            ChartKind::Doughnut => "doughnut",
            ChartKind::Line => "line",
            ChartKind::HorizontalBar | ChartKind::VerticalBar => "bar",
        }
    }
}

/// Dashboard theme colours.
pub struct Palette;

impl Palette {
    pub const DARK_GREEN: &'static str = "#1a4d3a";
    pub const ACCENT_YELLOW: &'static str = "#F0DF10";
    pub const ORANGE: &'static str = "#ff6b35";
    pub const MEDIUM_GRAY: &'static str = "#6c757d";
    pub const WHITE: &'static str = "#ffffff";
    pub const SUCCESS: &'static str = "#28a745";
    pub const DANGER: &'static str = "#dc3545";
    pub const WARNING: &'static str = "#ffc107";

    pub const DARK_GREEN_FILL: &'static str = "rgba(26, 77, 58, 0.1)";
    pub const GRID_LINE: &'static str = "rgba(0, 0, 0, 0.05)";
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartDefaults {
    pub font_family: String,
    pub color: String,
}

impl Default for ChartDefaults {
    fn default() -> Self {
        Self {
            font_family: "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif"
                .to_string(),
            color: "#1a252f".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedChart {
    pub region: String,
    pub metric: &'static str,
    pub kind: ChartKind,
    pub config: serde_json::Value,
    /// Per-category tooltip text, present for charts whose tooltips are computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip_labels: Option<Vec<String>>,
    /// Category axis tick text, present when ticks differ from the data labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_labels: Option<Vec<String>>,
}

impl RenderedChart {
    pub fn new(region: String, metric: Metric, kind: ChartKind, config: serde_json::Value) -> Self {
        Self {
            region,
            metric: metric.name(),
            kind,
            config,
            tooltip_labels: None,
            tick_labels: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderedPage {
    pub defaults: ChartDefaults,
    pub charts: Vec<RenderedChart>,
}

/// Share of `value` in `total` as a percentage. Zero when the total is zero.
pub fn percentage(value: f64, total: f64) -> f64 {
    if total == 0.0 || !total.is_finite() {
        return 0.0;
    }
    value / total * 100.0
}

/// Tooltip text for a distribution slice, e.g. `Pending: 3 (37.5%)`.
pub fn percentage_label(label: &str, value: f64, total: f64) -> String {
    format!("{}: {} ({:.1}%)", label, value, percentage(value, total))
}

/// Shorten a category label for display on an axis tick.
pub fn truncate_tick(label: &str) -> String {
    match label.char_indices().nth(MAX_TICK_CHARS) {
        Some((cut, _)) => format!("{}{}", &label[..cut], ELLIPSIS),
        None => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_label() {
        assert_eq!(percentage_label("Pending", 3.0, 8.0), "Pending: 3 (37.5%)");
        assert_eq!(percentage_label("Done", 1.0, 3.0), "Done: 1 (33.3%)");
    }

    #[test]
    fn test_percentage_label_zero_total() {
        let label = percentage_label("Cancelled", 0.0, 0.0);
        assert_eq!(label, "Cancelled: 0 (0.0%)");
        assert!(!label.contains("NaN"));
        assert!(!label.contains("inf"));
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let values = [7.0, 13.0, 1.0, 29.0];
        let total: f64 = values.iter().sum();
        let sum: f64 = values.iter().map(|v| percentage(*v, total)).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_truncate_tick() {
        assert_eq!(truncate_tick("BS Computer Science"), "BS Computer Sci...");
        assert_eq!(truncate_tick("BS Psychology"), "BS Psychology");
        assert_eq!(truncate_tick("exactly15chars!"), "exactly15chars!");
        assert_eq!(truncate_tick("sixteen chars!!!"), "sixteen chars!!...");
        assert_eq!(truncate_tick(""), "");
    }

    #[test]
    fn test_truncate_tick_counts_characters() {
        // 16 characters, more than 16 bytes
        let label = "Educación Física";
        assert_eq!(truncate_tick(label), "Educación Físic...");
    }

    #[test]
    fn test_chart_type() {
        assert_eq!(ChartKind::HorizontalBar.chart_type(), "bar");
        assert_eq!(ChartKind::VerticalBar.chart_type(), "bar");
        assert_eq!(ChartKind::Doughnut.chart_type(), "doughnut");
    }
}
