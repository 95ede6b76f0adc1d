//! One analysis action at a time.
//!
//! The UI must disable its submit trigger while a request is in flight;
//! this service is the single gate that makes that rule enforceable.
//! `try_acquire()` hands out a guard or nothing — a second submission
//! while one is running is reported as busy, never queued.

use std::sync::{Mutex, MutexGuard};

use serde::Serialize;

/// What kind of analysis action is running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// Single report through the full pipeline.
    UploadReport,
    /// Two reports compared into trend data.
    AnalyzeTrends,
    /// Service liveness probe.
    HealthCheck,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UploadReport => write!(f, "Report upload"),
            Self::AnalyzeTrends => write!(f, "Trend analysis"),
            Self::HealthCheck => write!(f, "Health check"),
        }
    }
}

/// Snapshot of the in-flight operation, for UI state.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveOperation {
    pub kind: OperationKind,
    /// When the operation started (ISO 8601).
    pub started_at: String,
}

/// Serializes access to the analysis service.
pub struct AnalysisService {
    lock: Mutex<()>,
    current_op: Mutex<Option<ActiveOperation>>,
}

impl AnalysisService {
    pub fn new() -> Self {
        Self {
            lock: Mutex::new(()),
            current_op: Mutex::new(None),
        }
    }

    /// Try to start an operation without blocking.
    ///
    /// Returns `None` if another operation is in flight — the caller
    /// surfaces "busy" and the user retries after it finishes. The guard
    /// must be held for the whole request; dropping it frees the slot.
    pub fn try_acquire(&self, kind: OperationKind) -> Option<AnalysisGuard<'_>> {
        let guard = self.lock.try_lock().ok()?;
        self.set_current_op(kind);
        Some(AnalysisGuard {
            _guard: guard,
            service: self,
        })
    }

    /// The operation currently in flight, if any.
    pub fn current_operation(&self) -> Option<ActiveOperation> {
        self.current_op.lock().ok().and_then(|op| op.clone())
    }

    /// Whether a request is in flight (UI trigger disabled).
    pub fn is_busy(&self) -> bool {
        self.current_operation().is_some()
    }

    fn set_current_op(&self, kind: OperationKind) {
        if let Ok(mut op) = self.current_op.lock() {
            *op = Some(ActiveOperation {
                kind,
                started_at: chrono::Utc::now().to_rfc3339(),
            });
        }
    }

    fn clear_current_op(&self) {
        if let Ok(mut op) = self.current_op.lock() {
            *op = None;
        }
    }
}

impl Default for AnalysisService {
    fn default() -> Self {
        Self::new()
    }
}

/// Held for the duration of one analysis request.
pub struct AnalysisGuard<'a> {
    _guard: MutexGuard<'a, ()>,
    service: &'a AnalysisService,
}

impl Drop for AnalysisGuard<'_> {
    fn drop(&mut self) {
        self.service.clear_current_op();
    }
}
