//! Wire-level data model shared with the external analysis service.
//!
//! Shapes mirror the service's JSON contract exactly; anything the
//! service adds that we do not model is ignored on deserialize.

pub mod enums;
pub mod report;
pub mod trend;

pub use enums::{ParameterStatus, TrendDirection};
pub use report::{AnalysisReport, LabParameter, LabReport};
pub use trend::{TrendData, TrendEntry};

/// Errors from model parsing/decoding.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid value '{value}' for {field}")]
    InvalidEnum { field: String, value: String },
    #[error("Invalid base64 graph payload: {0}")]
    InvalidGraphPayload(String),
}
