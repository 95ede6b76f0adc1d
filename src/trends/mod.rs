//! Trend comparison engine.
//!
//! Pure derivation over two immutable snapshots: per-parameter change,
//! direction, improving/worsening/stable assessment, and the display
//! ordering/formatting contract. No I/O, no clock — the same pair of
//! snapshots always yields the identical aggregate, so a client-side run
//! is interchangeable with the service-computed one.

pub mod classify;
pub mod derive;
pub mod display;
pub mod snapshot;

pub use classify::{classify, count_assessments, improving, worsening, Assessment, AssessmentCounts};
pub use derive::derive_trends;
pub use display::{
    abnormal_first, abnormal_trends_first, format_absolute_change, format_percentage_change,
};
pub use snapshot::ParameterIndex;
