//! Wire types for the risk-dashboard backend.
//!
//! Field names mirror the backend's JSON exactly (`Date`,
//! `Macro_DVaR_Value_Current`, ...). Every field is optional on the wire:
//! a missing cell renders as an empty grid cell, never as a decode error.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A scalar cell value: numeric when the backend computed one, a raw
/// string when it sent preformatted or unexpected text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellScalar {
    Number(f64),
    Text(String),
}

impl CellScalar {
    /// The value as sent, without numeric reformatting.
    pub fn raw_display(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// One row of tail data: a date, a P&L vector, and current/previous/change
/// values for each of the four risk categories.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TailRecord {
    #[serde(rename = "Date", default)]
    pub date: Option<String>,
    #[serde(rename = "Pnl_Vector_Name", default)]
    pub pnl_vector_name: Option<String>,

    #[serde(rename = "Macro_DVaR_Value_Current", default)]
    pub macro_current: Option<CellScalar>,
    #[serde(rename = "Macro_DVaR_Value_Previous", default)]
    pub macro_previous: Option<CellScalar>,
    #[serde(rename = "Macro_DVaR_Change", default)]
    pub macro_change: Option<CellScalar>,

    #[serde(rename = "FX_DVaR_Value_Current", default)]
    pub fx_current: Option<CellScalar>,
    #[serde(rename = "FX_DVaR_Value_Previous", default)]
    pub fx_previous: Option<CellScalar>,
    #[serde(rename = "FX_DVaR_Change", default)]
    pub fx_change: Option<CellScalar>,

    #[serde(rename = "Rates_DVaR_Value_Current", default)]
    pub rates_current: Option<CellScalar>,
    #[serde(rename = "Rates_DVaR_Value_Previous", default)]
    pub rates_previous: Option<CellScalar>,
    #[serde(rename = "Rates_DVaR_Change", default)]
    pub rates_change: Option<CellScalar>,

    #[serde(rename = "EM_Macro_DVaR_Value_Current", default)]
    pub em_macro_current: Option<CellScalar>,
    #[serde(rename = "EM_Macro_DVaR_Value_Previous", default)]
    pub em_macro_previous: Option<CellScalar>,
    #[serde(rename = "EM_Macro_DVaR_Change", default)]
    pub em_macro_change: Option<CellScalar>,
}

/// The single most extreme value of one risk-metric variant.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyMetric {
    #[serde(default)]
    pub value: Option<CellScalar>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub pnl_vector: Option<String>,
}

/// Lowest DVaR / lowest SVaR pair returned by the processing endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyMetrics {
    #[serde(default)]
    pub lowest_dvar: Option<KeyMetric>,
    #[serde(default)]
    pub lowest_svar: Option<KeyMetric>,
}

/// Response of `POST /process_data` and `POST /process_excel`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub key_metrics: Option<KeyMetrics>,
}

/// Response of `GET /get_top_bottom_tails`. Both sequences must be present
/// for the grids to render; anything else is a "no data" outcome.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TailsResponse {
    #[serde(default)]
    pub positive_tails: Option<Vec<TailRecord>>,
    #[serde(default)]
    pub negative_tails: Option<Vec<TailRecord>>,
}

/// Raw response of `GET /get_dvar_trends_plot`: a Bokeh `json_item`
/// envelope. The `doc` interior stays opaque; only the envelope is checked.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendPlotResponse {
    #[serde(default)]
    pub target_id: Option<String>,
    #[serde(default)]
    pub root_id: Option<String>,
    #[serde(default)]
    pub doc: Option<serde_json::Value>,
    #[serde(default)]
    pub version: Option<String>,
}

impl TrendPlotResponse {
    /// Validate the envelope and promote it to a renderable [`TrendPlot`].
    /// Requires a non-empty `root_id` and an object-shaped `doc`.
    pub fn validated(self) -> Option<TrendPlot> {
        let root_id = self.root_id.filter(|id| !id.is_empty())?;
        let doc = self.doc.filter(serde_json::Value::is_object)?;
        Some(TrendPlot {
            target_id: self.target_id,
            root_id,
            doc,
            version: self.version,
        })
    }
}

/// A validated chart payload, forwarded verbatim to `Bokeh.embed.embed_item`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendPlot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
    pub root_id: String,
    pub doc: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Failure of a backend call, split the way the UI reports it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered with an error payload; its message is shown.
    Server(String),
    /// No response or a malformed one; callers fall back to a generic text.
    Transport(String),
}

impl ApiError {
    /// The text to surface to the user: the server message when there is
    /// one, otherwise the caller's fallback.
    pub fn user_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            Self::Server(msg) => msg,
            Self::Transport(_) => fallback,
        }
    }
}

/// Generic fallback shown when a failure carries no usable message.
pub const GENERIC_ERROR: &str = "An unknown error occurred.";

/// Pull a human-readable message out of an error body, preferring the
/// `error` field the backend uses, then a `message` field.
pub fn extract_error_message(body: &serde_json::Value) -> Option<String> {
    for key in ["error", "message"] {
        if let Some(msg) = body.get(key).and_then(serde_json::Value::as_str) {
            if !msg.is_empty() {
                return Some(msg.to_owned());
            }
        }
    }
    None
}
