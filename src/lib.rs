//! LabInsight — client-side core of a consumer health-report companion.
//!
//! The external analysis service does the heavy lifting (extraction,
//! classification, AI insight text); this crate models its contract,
//! derives trends between two reports, and owns the client-side rules:
//! upload validation, one request in flight at a time, fixed
//! status-to-message mapping, and the session-scoped aggregate cache.

pub mod client;
pub mod config;
pub mod models;
pub mod reports;
pub mod service;
pub mod session_store;
pub mod trends;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for a host binary. Respects RUST_LOG, otherwise
/// falls back to `config::default_log_filter()`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
}
