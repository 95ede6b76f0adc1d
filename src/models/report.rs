use serde::{Deserialize, Serialize};

use super::enums::ParameterStatus;

/// One measured analyte in one report.
///
/// `status` comes classified from the analysis service; the trend
/// deriver carries it verbatim and never recomputes it from the range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabParameter {
    pub name: String,
    pub value: f64,
    pub unit: String,
    /// Lower bound of the normal range. 0 means no enforced lower bound.
    pub reference_low: f64,
    pub reference_high: f64,
    pub status: ParameterStatus,
}

impl LabParameter {
    /// Status recomputed from value vs. reference range.
    /// Strict comparisons: a value sitting exactly on a bound is Normal.
    pub fn classified_status(&self) -> ParameterStatus {
        if self.value > self.reference_high {
            ParameterStatus::High
        } else if self.value < self.reference_low {
            ParameterStatus::Low
        } else {
            ParameterStatus::Normal
        }
    }
}

/// Structured representation of one parsed lab report — an immutable
/// point-in-time snapshot. Parameter order = extraction order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabReport {
    pub patient_name: String,
    /// Report date as the service returns it, e.g. "2024-01-15".
    pub report_date: String,
    pub parameters: Vec<LabParameter>,
}

impl LabReport {
    /// A copy of this report with every parameter status recomputed from
    /// its reference range. The input is not mutated.
    pub fn classify_statuses(&self) -> LabReport {
        let mut classified = self.clone();
        for param in &mut classified.parameters {
            param.status = param.classified_status();
        }
        classified
    }
}

/// Full response of `POST /api/v1/upload-report`: the snapshot plus the
/// patient-friendly AI insight fields. The AI fields are optional so a
/// bare snapshot still deserializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub patient_name: String,
    pub report_date: String,
    pub parameters: Vec<LabParameter>,
    /// 6-8 patient-friendly key points explaining the results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Conversational paragraph meant for TTS voice-over.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intellectual_audio: Option<String>,
    /// Lifestyle-based, non-diagnostic preventive tips.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preventive_guidance: Option<String>,
    /// Questions the patient should ask their doctor.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub doctor_questions: Vec<String>,
}

impl AnalysisReport {
    /// The snapshot portion, for feeding the trend deriver.
    pub fn snapshot(&self) -> LabReport {
        LabReport {
            patient_name: self.patient_name.clone(),
            report_date: self.report_date.clone(),
            parameters: self.parameters.clone(),
        }
    }
}
