//! Ephemeral aggregate cache for one display session.
//!
//! Mirrors the browser-session key-value store the UI reads on page
//! load: two keys, each holding one JSON-serialized aggregate, written
//! only on full success and overwritten by the next one. Corrupt entries
//! are discarded silently — the page falls back to placeholder content
//! instead of crashing.

use std::collections::HashMap;

use crate::models::{AnalysisReport, TrendData};

pub const REPORT_KEY: &str = "labReportData";
pub const TREND_KEY: &str = "trendData";

/// Errors from storing aggregates.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to serialize aggregate: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Session-scoped store for the two analysis aggregates.
#[derive(Default)]
pub struct SessionStore {
    entries: HashMap<&'static str, String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a single-report aggregate. A previously stored trend
    /// aggregate is explicitly cleared — a single-file upload after a
    /// trend upload must not leave stale comparison data behind.
    pub fn set_report(&mut self, report: &AnalysisReport) -> Result<(), StoreError> {
        let json = serde_json::to_string(report)?;
        self.entries.insert(REPORT_KEY, json);
        self.entries.remove(TREND_KEY);
        Ok(())
    }

    /// Store a trend aggregate, overwriting any previous one.
    pub fn set_trend(&mut self, trend: &TrendData) -> Result<(), StoreError> {
        let json = serde_json::to_string(trend)?;
        self.entries.insert(TREND_KEY, json);
        Ok(())
    }

    /// Hydrate a raw entry, e.g. from the host webview's session storage.
    /// This is the path on which corrupt JSON can enter the store.
    pub fn set_raw(&mut self, key: &'static str, json: String) {
        self.entries.insert(key, json);
    }

    /// The cached report aggregate. Corrupt JSON is dropped from the
    /// store and reads as absent.
    pub fn load_report(&mut self) -> Option<AnalysisReport> {
        self.load(REPORT_KEY)
    }

    /// The cached trend aggregate, same discard rule.
    pub fn load_trend(&mut self) -> Option<TrendData> {
        self.load(TREND_KEY)
    }

    fn load<T: serde::de::DeserializeOwned>(&mut self, key: &'static str) -> Option<T> {
        let json = self.entries.get(key)?;
        match serde_json::from_str(json) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding corrupt cached aggregate");
                self.entries.remove(key);
                None
            }
        }
    }

    pub fn has_report(&self) -> bool {
        self.entries.contains_key(REPORT_KEY)
    }

    pub fn has_trend(&self) -> bool {
        self.entries.contains_key(TREND_KEY)
    }

    /// Drop everything — end of the display session.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
