// Analytics metric domain models
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    #[error("series '{metric}' has {labels} labels but {values} values")]
    LengthMismatch {
        metric: &'static str,
        labels: usize,
        values: usize,
    },
}

/// One labelled series of aggregate counts. Labels and values are index-aligned.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MetricSeries {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default, alias = "data")]
    pub values: Vec<f64>,
}

impl MetricSeries {
    #[cfg(test)]
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        Self { labels, values }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    fn validate(&self, metric: Metric) -> Result<(), DataError> {
        if self.labels.len() != self.values.len() {
            return Err(DataError::LengthMismatch {
                metric: metric.name(),
                labels: self.labels.len(),
                values: self.values.len(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Status,
    Monthly,
    Counselor,
    Timeslot,
    Program,
}

impl Metric {
    /// Render order on the analytics page.
    pub const ALL: [Metric; 5] = [
        Metric::Status,
        Metric::Monthly,
        Metric::Counselor,
        Metric::Timeslot,
        Metric::Program,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Status => "status",
            Metric::Monthly => "monthly",
            Metric::Counselor => "counselor",
            Metric::Timeslot => "timeslot",
            Metric::Program => "program",
        }
    }
}

/// The payload the admin backend embeds in the analytics page.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AnalyticsData {
    #[serde(default)]
    pub status: MetricSeries,
    #[serde(default)]
    pub monthly: MetricSeries,
    #[serde(default)]
    pub counselor: MetricSeries,
    #[serde(default)]
    pub timeslot: MetricSeries,
    #[serde(default)]
    pub program: MetricSeries,
}

impl AnalyticsData {
    pub fn series(&self, metric: Metric) -> &MetricSeries {
        match metric {
            Metric::Status => &self.status,
            Metric::Monthly => &self.monthly,
            Metric::Counselor => &self.counselor,
            Metric::Timeslot => &self.timeslot,
            Metric::Program => &self.program,
        }
    }

    pub fn validate(&self) -> Result<(), DataError> {
        for metric in Metric::ALL {
            self.series(metric).validate(metric)?;
        }
        Ok(())
    }
}
