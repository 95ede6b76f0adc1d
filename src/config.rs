/// Application-level constants
pub const APP_NAME: &str = "LabInsight";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum accepted upload size — the analysis service rejects anything
/// larger with 413, so oversized files are refused before the network call.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Default language the analysis service renders AI text in.
pub const DEFAULT_LANGUAGE: &str = "English";

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

/// Base URL of the external analysis service.
/// Overridable via LABINSIGHT_SERVICE_URL for staging setups.
pub fn service_base_url() -> String {
    std::env::var("LABINSIGHT_SERVICE_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string())
}
