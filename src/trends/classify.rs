use serde::Serialize;

use crate::models::{ParameterStatus, TrendDirection, TrendEntry};

/// How a trend entry reads for the patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Assessment {
    Improving,
    Worsening,
    Stable,
}

impl std::fmt::Display for Assessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Improving => write!(f, "Improving"),
            Self::Worsening => write!(f, "Worsening"),
            Self::Stable => write!(f, "Stable"),
        }
    }
}

/// Classifies one trend entry.
///
/// - Improving: the value moved and landed in the normal range.
/// - Worsening: the value moved and a previously normal parameter is now
///   abnormal.
/// - Stable: everything else. A parameter that moved between High and
///   Low (still abnormal on both ends) is neither improving nor
///   worsening — it only shows in the unfiltered view. That partition is
///   inherited behavior; keep it (DESIGN.md).
pub fn classify(entry: &TrendEntry) -> Assessment {
    if entry.direction == TrendDirection::Unchanged {
        return Assessment::Stable;
    }
    if entry.newer_status == ParameterStatus::Normal {
        return Assessment::Improving;
    }
    if entry.older_status == ParameterStatus::Normal {
        return Assessment::Worsening;
    }
    Assessment::Stable
}

/// Entries classified as improving, in input order.
pub fn improving(trends: &[TrendEntry]) -> Vec<&TrendEntry> {
    trends.iter().filter(|t| classify(t) == Assessment::Improving).collect()
}

/// Entries classified as worsening, in input order.
pub fn worsening(trends: &[TrendEntry]) -> Vec<&TrendEntry> {
    trends.iter().filter(|t| classify(t) == Assessment::Worsening).collect()
}

/// Bucket sizes for the summary header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssessmentCounts {
    pub improving: u32,
    pub worsening: u32,
    pub stable: u32,
}

pub fn count_assessments(trends: &[TrendEntry]) -> AssessmentCounts {
    let mut counts = AssessmentCounts::default();
    for entry in trends {
        match classify(entry) {
            Assessment::Improving => counts.improving += 1,
            Assessment::Worsening => counts.worsening += 1,
            Assessment::Stable => counts.stable += 1,
        }
    }
    counts
}
