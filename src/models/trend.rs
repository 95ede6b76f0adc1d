use base64::Engine;
use serde::{Deserialize, Serialize};

use super::enums::{ParameterStatus, TrendDirection};
use super::ModelError;

/// Trend data for a single lab parameter compared across two reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendEntry {
    pub name: String,
    pub unit: String,
    pub older_value: f64,
    pub newer_value: f64,
    /// newer_value - older_value, exact.
    pub absolute_change: f64,
    /// None when older_value was 0 (undefined percentage).
    pub percentage_change: Option<f64>,
    pub direction: TrendDirection,
    pub older_status: ParameterStatus,
    pub newer_status: ParameterStatus,
}

/// Aggregate result of comparing two snapshots, as returned by
/// `POST /api/v1/analyze-trends` and by the client-side deriver.
///
/// Parameters present only in the NEWER snapshot are not surfaced
/// anywhere in this aggregate — inherited asymmetry, kept for wire
/// compatibility (see DESIGN.md).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendData {
    pub patient_name: String,
    pub older_report_date: String,
    pub newer_report_date: String,
    pub trends: Vec<TrendEntry>,
    /// Parameter names present in the older snapshot but absent in the newer.
    #[serde(default)]
    pub only_in_older: Vec<String>,
    /// Illustrative rendered chart (base64 PNG). Never consumed by the
    /// derivation logic; only decoded for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_base64: Option<String>,
}

impl TrendData {
    /// Decode the illustrative chart into PNG bytes, if the service sent one.
    pub fn decode_graph_png(&self) -> Result<Option<Vec<u8>>, ModelError> {
        match &self.graph_base64 {
            None => Ok(None),
            Some(encoded) => base64::engine::general_purpose::STANDARD
                .decode(encoded)
                .map(Some)
                .map_err(|e| ModelError::InvalidGraphPayload(e.to_string())),
        }
    }
}
