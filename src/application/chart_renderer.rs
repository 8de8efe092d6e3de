// Chart renderer - Builds Chart.js configurations for the analytics page
use crate::domain::chart::{
    percentage_label, truncate_tick, ChartDefaults, ChartKind, Palette, RenderedChart, RenderedPage,
};
use crate::domain::metrics::{AnalyticsData, Metric, MetricSeries};
use crate::infrastructure::config::ChartRegions;
use serde_json::{json, Value};
use std::collections::HashSet;

/// The page markup, as far as the renderer cares: which mount points exist.
pub trait ChartSurface {
    fn has_region(&self, region: &str) -> bool;
}

#[derive(Debug, Clone, Default)]
pub struct PageRegions {
    regions: HashSet<String>,
}

impl PageRegions {
    pub fn new<I, S>(regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            regions: regions.into_iter().map(Into::into).collect(),
        }
    }
}

impl ChartSurface for PageRegions {
    fn has_region(&self, region: &str) -> bool {
        self.regions.contains(region)
    }
}

#[derive(Debug, Clone)]
pub struct ChartRenderer {
    regions: ChartRegions,
    defaults: ChartDefaults,
}

impl ChartRenderer {
    pub fn new(regions: ChartRegions) -> Self {
        Self {
            regions,
            defaults: ChartDefaults::default(),
        }
    }

    pub fn render(&self, data: &AnalyticsData, surface: &dyn ChartSurface) -> RenderedPage {
        let mut charts = Vec::new();

        for metric in Metric::ALL {
            let region = self.regions.region_for(metric);
            let series = data.series(metric);

            if !surface.has_region(region) {
                tracing::debug!("Skipping {} chart - region '{}' not on page", metric.name(), region);
                continue;
            }
            if series.is_empty() {
                tracing::debug!("Skipping {} chart - no data", metric.name());
                continue;
            }

            charts.push(build_chart(metric, region.to_string(), series));
        }

        RenderedPage {
            defaults: self.defaults.clone(),
            charts,
        }
    }
}

fn build_chart(metric: Metric, region: String, series: &MetricSeries) -> RenderedChart {
    match metric {
        Metric::Status => status_chart(region, series),
        Metric::Monthly => trend_chart(region, series),
        Metric::Counselor => counselor_chart(region, series),
        Metric::Timeslot => timeslot_chart(region, series),
        Metric::Program => program_chart(region, series),
    }
}

fn dark_tooltip() -> Value {
    json!({
        "backgroundColor": Palette::DARK_GREEN,
        "padding": 12
    })
}

fn count_axis() -> Value {
    json!({
        "beginAtZero": true,
        "ticks": { "precision": 0 },
        "grid": { "color": Palette::GRID_LINE }
    })
}

fn status_chart(region: String, series: &MetricSeries) -> RenderedChart {
    let kind = ChartKind::Doughnut;
    let config = json!({
        "type": kind.chart_type(),
        "data": {
            "labels": series.labels,
            "datasets": [{
                "data": series.values,
                "backgroundColor": [
                    Palette::WARNING,
                    Palette::SUCCESS,
                    Palette::DANGER,
                    Palette::MEDIUM_GRAY
                ],
                "borderWidth": 2,
                "borderColor": Palette::WHITE
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": true,
            "plugins": {
                "legend": {
                    "position": "bottom",
                    "labels": {
                        "padding": 15,
                        "font": { "size": 12, "weight": "500" }
                    }
                }
            }
        }
    });

    let total = series.total();
    let tooltips = series
        .labels
        .iter()
        .zip(&series.values)
        .map(|(label, value)| percentage_label(label, *value, total))
        .collect();

    let mut chart = RenderedChart::new(region, Metric::Status, kind, config);
    chart.tooltip_labels = Some(tooltips);
    chart
}

fn trend_chart(region: String, series: &MetricSeries) -> RenderedChart {
    let kind = ChartKind::Line;
    let config = json!({
        "type": kind.chart_type(),
        "data": {
            "labels": series.labels,
            "datasets": [{
                "label": "Appointments",
                "data": series.values,
                "borderColor": Palette::DARK_GREEN,
                "backgroundColor": Palette::DARK_GREEN_FILL,
                "borderWidth": 3,
                "fill": true,
                "tension": 0.4,
                "pointBackgroundColor": Palette::ACCENT_YELLOW,
                "pointBorderColor": Palette::DARK_GREEN,
                "pointBorderWidth": 2,
                "pointRadius": 5,
                "pointHoverRadius": 7
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": true,
            "plugins": {
                "legend": { "display": false },
                "tooltip": {
                    "backgroundColor": Palette::DARK_GREEN,
                    "padding": 12,
                    "titleFont": { "size": 14, "weight": "bold" },
                    "bodyFont": { "size": 13 }
                }
            },
            "scales": {
                "y": count_axis(),
                "x": { "grid": { "display": false } }
            }
        }
    });

    RenderedChart::new(region, Metric::Monthly, kind, config)
}

fn counselor_chart(region: String, series: &MetricSeries) -> RenderedChart {
    let kind = ChartKind::HorizontalBar;
    let config = json!({
        "type": kind.chart_type(),
        "data": {
            "labels": series.labels,
            "datasets": [{
                "label": "Appointments",
                "data": series.values,
                "backgroundColor": Palette::DARK_GREEN,
                "borderColor": Palette::DARK_GREEN,
                "borderWidth": 1,
                "borderRadius": 6,
                "hoverBackgroundColor": Palette::ORANGE
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": true,
            "indexAxis": "y",
            "plugins": {
                "legend": { "display": false },
                "tooltip": dark_tooltip()
            },
            "scales": {
                "x": count_axis(),
                "y": {
                    "grid": { "display": false },
                    "ticks": { "font": { "size": 11 } }
                }
            }
        }
    });

    RenderedChart::new(region, Metric::Counselor, kind, config)
}

fn timeslot_chart(region: String, series: &MetricSeries) -> RenderedChart {
    let kind = ChartKind::VerticalBar;
    let config = json!({
        "type": kind.chart_type(),
        "data": {
            "labels": series.labels,
            "datasets": [{
                "label": "Bookings",
                "data": series.values,
                "backgroundColor": Palette::ACCENT_YELLOW,
                "borderColor": Palette::DARK_GREEN,
                "borderWidth": 1,
                "borderRadius": 6,
                "hoverBackgroundColor": Palette::ORANGE
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": true,
            "plugins": {
                "legend": { "display": false },
                "tooltip": dark_tooltip()
            },
            "scales": {
                "y": count_axis(),
                "x": {
                    "grid": { "display": false },
                    "ticks": { "font": { "size": 10 } }
                }
            }
        }
    });

    RenderedChart::new(region, Metric::Timeslot, kind, config)
}

fn program_chart(region: String, series: &MetricSeries) -> RenderedChart {
    let kind = ChartKind::VerticalBar;
    let ticks: Vec<String> = series.labels.iter().map(|l| truncate_tick(l)).collect();
    let config = json!({
        "type": kind.chart_type(),
        "data": {
            "labels": series.labels,
            "datasets": [{
                "label": "Appointments",
                "data": series.values,
                "backgroundColor": Palette::ORANGE,
                "borderColor": Palette::ORANGE,
                "borderWidth": 1,
                "borderRadius": 6,
                "hoverBackgroundColor": Palette::DARK_GREEN
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": true,
            "plugins": {
                "legend": { "display": false },
                "tooltip": dark_tooltip()
            },
            "scales": {
                "y": count_axis(),
                "x": {
                    "grid": { "display": false },
                    "ticks": { "font": { "size": 10 } }
                }
            }
        }
    });

    let mut chart = RenderedChart::new(region, Metric::Program, kind, config);
    chart.tick_labels = Some(ticks);
    chart
}
