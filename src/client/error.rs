//! Error taxonomy for the analysis-service client.
//!
//! Four classes (mirrored in `user_message`): client-side validation
//! failures caught before any network call, server-rejected requests
//! mapped per status code, transient transport/server failures, and
//! everything else. Nothing is retried automatically — recovery is
//! always a user-initiated re-submission.

/// Fixed user-facing messages, one per failure class.
pub const MSG_INVALID_TYPE: &str =
    "Only PDF and image files (JPG, PNG, TIFF, BMP, WEBP) are accepted.";
pub const MSG_TOO_LARGE: &str =
    "This file is larger than the 10 MB limit. Please upload a smaller report.";
pub const MSG_EMPTY_FILE: &str =
    "The selected file is empty. Please choose a different report.";
pub const MSG_UNREADABLE: &str =
    "We couldn't read this document. It may be a scanned or low-quality file.";
pub const MSG_TRANSIENT: &str =
    "The analysis service is temporarily unavailable. Please try again in a moment.";
pub const MSG_GENERIC: &str =
    "Something went wrong while analyzing your report. Please try again.";
pub const MSG_BUSY: &str = "An analysis is already in progress. Please wait for it to finish.";

/// Errors from analysis-service operations.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("'{filename}' is not an accepted file type")]
    InvalidFileType { filename: String },
    #[error("'{filename}' exceeds the 10 MB limit ({size} bytes)")]
    FileTooLarge { filename: String, size: usize },
    #[error("'{filename}' is empty")]
    EmptyFile { filename: String },
    #[error("Analysis service rejected the request ({status}): {detail}")]
    Rejected { status: u16, detail: String },
    #[error("Cannot reach the analysis service at {0}")]
    Connection(String),
    #[error("Request timed out after {0}s")]
    Timeout(u64),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Malformed response from the analysis service: {0}")]
    ResponseParsing(String),
    #[error("Internal error: {0}")]
    Internal(String),
    #[error("An analysis request is already in flight")]
    Busy,
}

impl AnalysisError {
    /// Build the error for a non-2xx response.
    pub fn from_status(status: u16, detail: String) -> Self {
        Self::Rejected { status, detail }
    }

    /// The fixed human-readable message the UI surfaces for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidFileType { .. } => MSG_INVALID_TYPE,
            Self::FileTooLarge { .. } => MSG_TOO_LARGE,
            Self::EmptyFile { .. } => MSG_EMPTY_FILE,
            Self::Rejected { status, .. } => match status {
                400 | 415 => MSG_INVALID_TYPE,
                413 => MSG_TOO_LARGE,
                422 => MSG_UNREADABLE,
                502 | 503 => MSG_TRANSIENT,
                _ => MSG_GENERIC,
            },
            Self::Connection(_) | Self::Timeout(_) | Self::Network(_) => MSG_TRANSIENT,
            Self::ResponseParsing(_) | Self::Internal(_) => MSG_GENERIC,
            Self::Busy => MSG_BUSY,
        }
    }

    /// Whether the failure was caught before any network call was made.
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            Self::InvalidFileType { .. } | Self::FileTooLarge { .. } | Self::EmptyFile { .. } | Self::Busy
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_the_contracted_messages() {
        assert_eq!(AnalysisError::from_status(400, String::new()).user_message(), MSG_INVALID_TYPE);
        assert_eq!(AnalysisError::from_status(415, String::new()).user_message(), MSG_INVALID_TYPE);
        assert_eq!(AnalysisError::from_status(413, String::new()).user_message(), MSG_TOO_LARGE);
        assert_eq!(AnalysisError::from_status(422, String::new()).user_message(), MSG_UNREADABLE);
        assert_eq!(AnalysisError::from_status(502, String::new()).user_message(), MSG_TRANSIENT);
        assert_eq!(AnalysisError::from_status(503, String::new()).user_message(), MSG_TRANSIENT);
    }

    #[test]
    fn unmapped_statuses_fall_back_to_generic() {
        assert_eq!(AnalysisError::from_status(500, String::new()).user_message(), MSG_GENERIC);
        assert_eq!(AnalysisError::from_status(404, String::new()).user_message(), MSG_GENERIC);
        assert_eq!(AnalysisError::from_status(418, String::new()).user_message(), MSG_GENERIC);
    }

    #[test]
    fn transport_failures_read_as_transient() {
        assert_eq!(AnalysisError::Connection("http://x".into()).user_message(), MSG_TRANSIENT);
        assert_eq!(AnalysisError::Timeout(120).user_message(), MSG_TRANSIENT);
        assert_eq!(AnalysisError::Network("reset".into()).user_message(), MSG_TRANSIENT);
    }

    #[test]
    fn validation_failures_are_client_side() {
        let err = AnalysisError::InvalidFileType { filename: "notes.txt".into() };
        assert!(err.is_client_side());
        assert_eq!(err.user_message(), MSG_INVALID_TYPE);

        let err = AnalysisError::from_status(415, String::new());
        assert!(!err.is_client_side());
    }
}
