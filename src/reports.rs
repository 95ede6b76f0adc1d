//! Upload and comparison workflows.
//!
//! Glue between the picked files, the analysis client, the in-flight
//! gate, and the session store. Validation runs before any network
//! call; an aggregate is stored only on full success; which report is
//! "older" is decided by the user-edited date field, never by
//! submission order.

use chrono::NaiveDate;

use crate::client::{validate, AnalysisApi, AnalysisError, ReportUpload};
use crate::models::{AnalysisReport, TrendData};
use crate::service::{AnalysisService, OperationKind};
use crate::session_store::SessionStore;
use crate::trends::derive_trends;

/// One report ready for a comparison: the file plus the user-editable
/// date that designates it as older or newer.
#[derive(Debug, Clone)]
pub struct UploadSlot {
    pub upload: ReportUpload,
    /// User-entered report date, expected as "%Y-%m-%d".
    pub report_date: String,
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Orders two slots as (older, newer) by their date fields.
///
/// Dates that fail to parse fall back to lexicographic comparison,
/// which matches chronological order for well-formed ISO dates anyway.
/// On a tie the first slot is treated as older.
pub fn order_by_date(a: UploadSlot, b: UploadSlot) -> (UploadSlot, UploadSlot) {
    let swap = match (parse_date(&a.report_date), parse_date(&b.report_date)) {
        (Some(da), Some(db)) => db < da,
        _ => b.report_date < a.report_date,
    };
    if swap {
        (b, a)
    } else {
        (a, b)
    }
}

/// Single-report workflow: validate, gate, upload, cache.
///
/// On success the aggregate replaces the cached report and clears any
/// stale trend aggregate. On any failure nothing is stored.
pub fn submit_report(
    api: &impl AnalysisApi,
    service: &AnalysisService,
    store: &mut SessionStore,
    upload: &ReportUpload,
    language: &str,
) -> Result<AnalysisReport, AnalysisError> {
    validate::validate(upload)?;

    let _guard = service
        .try_acquire(OperationKind::UploadReport)
        .ok_or(AnalysisError::Busy)?;

    let report = api.upload_report(upload, language)?;
    store
        .set_report(&report)
        .map_err(|e| AnalysisError::Internal(e.to_string()))?;

    tracing::info!(
        patient = %report.patient_name,
        date = %report.report_date,
        "report analyzed and cached"
    );
    Ok(report)
}

/// Two-report workflow: validate both, order by date, gate, compare,
/// cache the trend aggregate verbatim.
pub fn submit_comparison(
    api: &impl AnalysisApi,
    service: &AnalysisService,
    store: &mut SessionStore,
    first: UploadSlot,
    second: UploadSlot,
    language: &str,
) -> Result<TrendData, AnalysisError> {
    validate::validate(&first.upload)?;
    validate::validate(&second.upload)?;

    let (older, newer) = order_by_date(first, second);

    let _guard = service
        .try_acquire(OperationKind::AnalyzeTrends)
        .ok_or(AnalysisError::Busy)?;

    let trend = api.analyze_trends(&older.upload, &newer.upload, language)?;
    store
        .set_trend(&trend)
        .map_err(|e| AnalysisError::Internal(e.to_string()))?;

    tracing::info!(
        patient = %trend.patient_name,
        parameters = trend.trends.len(),
        older = %trend.older_report_date,
        newer = %trend.newer_report_date,
        "trend comparison cached"
    );
    Ok(trend)
}

/// Client-side fallback: derive the trend aggregate from two reports
/// that were already analyzed, without another service round trip.
///
/// Runs the same pipeline the service does — re-classify both snapshots
/// against their reference ranges, then derive — so the result is
/// behaviorally interchangeable with a service-computed aggregate
/// (minus the illustrative chart).
pub fn compare_locally(older: &AnalysisReport, newer: &AnalysisReport) -> TrendData {
    let older_snapshot = older.snapshot().classify_statuses();
    let newer_snapshot = newer.snapshot().classify_statuses();
    derive_trends(&older_snapshot, &newer_snapshot)
}

/// Liveness probe backing the service-unavailable banner. Any failure
/// means "show the banner"; it never blocks other functionality.
pub fn service_available(api: &impl AnalysisApi) -> bool {
    match api.health() {
        Ok(status) if status.is_ok() => true,
        Ok(status) => {
            tracing::warn!(status = %status.status, "analysis service degraded");
            false
        }
        Err(e) => {
            tracing::warn!(error = %e, "analysis service unreachable");
            false
        }
    }
}
