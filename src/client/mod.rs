//! HTTP client for the external analysis service.
//!
//! The service owns all extraction and AI work; this client does one
//! fetch per user action with no retries. Workflows depend on the
//! `AnalysisApi` trait so they can be tested against `MockAnalysisClient`.

pub mod error;
pub mod validate;

use reqwest::blocking::multipart::{Form, Part};
use serde::Deserialize;

use crate::config;
use crate::models::{AnalysisReport, TrendData};

pub use error::AnalysisError;

/// One file picked by the user, ready to submit.
#[derive(Debug, Clone)]
pub struct ReportUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}

impl HealthStatus {
    /// Anything but the literal "ok" means show the unavailable banner.
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Operations the analysis service exposes.
pub trait AnalysisApi {
    fn health(&self) -> Result<HealthStatus, AnalysisError>;

    fn upload_report(
        &self,
        upload: &ReportUpload,
        language: &str,
    ) -> Result<AnalysisReport, AnalysisError>;

    fn analyze_trends(
        &self,
        older: &ReportUpload,
        newer: &ReportUpload,
        language: &str,
    ) -> Result<TrendData, AnalysisError>;
}

/// Blocking HTTP client for the analysis service.
pub struct HttpAnalysisClient {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl HttpAnalysisClient {
    /// Create a client for the given base URL. The timeout covers the
    /// whole request — uploads run through an AI pipeline server-side.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, AnalysisError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AnalysisError::Internal(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        })
    }

    /// Client pointed at the configured service URL with a 3-minute
    /// timeout (two full pipeline runs for a trend request).
    pub fn from_env() -> Result<Self, AnalysisError> {
        Self::new(&config::service_base_url(), 180)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn map_transport(&self, e: reqwest::Error) -> AnalysisError {
        if e.is_connect() {
            AnalysisError::Connection(self.base_url.clone())
        } else if e.is_timeout() {
            AnalysisError::Timeout(self.timeout_secs)
        } else {
            AnalysisError::Network(e.to_string())
        }
    }

    fn file_part(upload: &ReportUpload) -> Result<Part, AnalysisError> {
        Part::bytes(upload.bytes.clone())
            .file_name(upload.filename.clone())
            .mime_str(&validate::content_type_for(&upload.filename))
            .map_err(|e| AnalysisError::Internal(e.to_string()))
    }

    fn post_multipart<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, AnalysisError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .map_err(|e| self.map_transport(e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            tracing::warn!(%url, status = status.as_u16(), "analysis service rejected request");
            return Err(AnalysisError::from_status(status.as_u16(), detail));
        }

        response
            .json()
            .map_err(|e| AnalysisError::ResponseParsing(e.to_string()))
    }
}

impl AnalysisApi for HttpAnalysisClient {
    fn health(&self) -> Result<HealthStatus, AnalysisError> {
        let url = format!("{}/health", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| self.map_transport(e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            return Err(AnalysisError::from_status(status.as_u16(), detail));
        }

        response
            .json()
            .map_err(|e| AnalysisError::ResponseParsing(e.to_string()))
    }

    fn upload_report(
        &self,
        upload: &ReportUpload,
        language: &str,
    ) -> Result<AnalysisReport, AnalysisError> {
        let form = Form::new()
            .part("file", Self::file_part(upload)?)
            .text("language", language.to_string());

        let report: AnalysisReport = self.post_multipart("/api/v1/upload-report", form)?;
        tracing::info!(
            patient = %report.patient_name,
            parameters = report.parameters.len(),
            "upload-report succeeded"
        );
        Ok(report)
    }

    fn analyze_trends(
        &self,
        older: &ReportUpload,
        newer: &ReportUpload,
        language: &str,
    ) -> Result<TrendData, AnalysisError> {
        let form = Form::new()
            .part("older_report", Self::file_part(older)?)
            .part("newer_report", Self::file_part(newer)?)
            .text("language", language.to_string());

        let trend: TrendData = self.post_multipart("/api/v1/analyze-trends", form)?;
        tracing::info!(
            patient = %trend.patient_name,
            trends = trend.trends.len(),
            older = %trend.older_report_date,
            newer = %trend.newer_report_date,
            "analyze-trends succeeded"
        );
        Ok(trend)
    }
}

/// Mock analysis service for testing workflows — returns configured
/// payloads, or a configured rejection status.
pub struct MockAnalysisClient {
    healthy: bool,
    report: Option<AnalysisReport>,
    trend: Option<TrendData>,
    reject_with: Option<u16>,
}

impl MockAnalysisClient {
    pub fn new() -> Self {
        Self {
            healthy: true,
            report: None,
            trend: None,
            reject_with: None,
        }
    }

    pub fn with_report(mut self, report: AnalysisReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_trend(mut self, trend: TrendData) -> Self {
        self.trend = Some(trend);
        self
    }

    pub fn rejecting_with(mut self, status: u16) -> Self {
        self.reject_with = Some(status);
        self
    }

    pub fn unhealthy(mut self) -> Self {
        self.healthy = false;
        self
    }

    fn rejection(&self) -> Option<AnalysisError> {
        self.reject_with
            .map(|status| AnalysisError::from_status(status, String::new()))
    }
}

impl Default for MockAnalysisClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisApi for MockAnalysisClient {
    fn health(&self) -> Result<HealthStatus, AnalysisError> {
        Ok(HealthStatus {
            status: if self.healthy { "ok".into() } else { "degraded".into() },
            service: None,
        })
    }

    fn upload_report(
        &self,
        _upload: &ReportUpload,
        _language: &str,
    ) -> Result<AnalysisReport, AnalysisError> {
        if let Some(err) = self.rejection() {
            return Err(err);
        }
        self.report
            .clone()
            .ok_or_else(|| AnalysisError::Internal("mock has no report configured".into()))
    }

    fn analyze_trends(
        &self,
        _older: &ReportUpload,
        _newer: &ReportUpload,
        _language: &str,
    ) -> Result<TrendData, AnalysisError> {
        if let Some(err) = self.rejection() {
            return Err(err);
        }
        self.trend
            .clone()
            .ok_or_else(|| AnalysisError::Internal("mock has no trend configured".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_status_requires_exact_ok() {
        let ok = HealthStatus { status: "ok".into(), service: None };
        assert!(ok.is_ok());
        let degraded = HealthStatus { status: "degraded".into(), service: None };
        assert!(!degraded.is_ok());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = HttpAnalysisClient::new("http://127.0.0.1:8000/", 30).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn mock_rejection_maps_through_the_status_table() {
        let mock = MockAnalysisClient::new().rejecting_with(422);
        let upload = ReportUpload { filename: "r.pdf".into(), bytes: vec![1] };
        let err = mock.upload_report(&upload, "English").unwrap_err();
        assert_eq!(err.user_message(), error::MSG_UNREADABLE);
    }
}
