#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

use crate::net::types::{KeyMetric, KeyMetrics};

/// What one key-metric card shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum MetricDisplay {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A processing request is in flight.
    Processing,
    /// A metric came back: its value plus a date/vector detail line.
    Ready { value: String, detail: String },
    /// The response succeeded but this variant was absent.
    NoData,
    /// The request failed.
    Error,
}

impl MetricDisplay {
    /// Project an optional key metric from a successful response.
    pub fn from_metric(metric: Option<&KeyMetric>) -> Self {
        let Some(metric) = metric else {
            return Self::NoData;
        };
        let value = metric
            .value
            .as_ref()
            .map_or_else(|| "N/A".to_owned(), crate::net::types::CellScalar::raw_display);
        let detail = format!(
            "Date: {}, P&L Vector: {}",
            metric.date.as_deref().unwrap_or(""),
            metric.pnl_vector.as_deref().unwrap_or("")
        );
        Self::Ready { value, detail }
    }

    /// Text for the large value label.
    pub fn value_text(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::Processing => "Processing...".to_owned(),
            Self::Ready { value, .. } => value.clone(),
            Self::NoData => "N/A".to_owned(),
            Self::Error => "Error".to_owned(),
        }
    }

    /// Text for the small detail label under the value.
    pub fn detail_text(&self) -> String {
        match self {
            Self::Ready { detail, .. } => detail.clone(),
            Self::NoData => "No data.".to_owned(),
            _ => String::new(),
        }
    }
}

/// The DVaR/SVaR metric card pair.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricsState {
    pub dvar: MetricDisplay,
    pub svar: MetricDisplay,
}

impl MetricsState {
    /// Both cards showing the in-flight placeholder.
    pub fn processing() -> Self {
        Self { dvar: MetricDisplay::Processing, svar: MetricDisplay::Processing }
    }

    /// Both cards showing the error placeholder.
    pub fn errored() -> Self {
        Self { dvar: MetricDisplay::Error, svar: MetricDisplay::Error }
    }

    /// Project the key metrics of a successful processing response.
    pub fn from_key_metrics(metrics: Option<&KeyMetrics>) -> Self {
        Self {
            dvar: MetricDisplay::from_metric(metrics.and_then(|m| m.lowest_dvar.as_ref())),
            svar: MetricDisplay::from_metric(metrics.and_then(|m| m.lowest_svar.as_ref())),
        }
    }
}
