use crate::models::{LabReport, TrendData, TrendDirection, TrendEntry};

use super::snapshot::ParameterIndex;

/// Compares two snapshots (caller designates which is older) and derives
/// per-parameter trends.
///
/// Pure and idempotent: no clock, no randomness, same inputs give an
/// identical aggregate. Matching is by parameter name; pairing order is
/// the OLDER snapshot's order. Names only in the newer snapshot are
/// dropped from the aggregate entirely (inherited asymmetry — see
/// DESIGN.md before "fixing" this).
pub fn derive_trends(older: &LabReport, newer: &LabReport) -> TrendData {
    let older_index = ParameterIndex::new(older);
    let newer_index = ParameterIndex::new(newer);

    let mut trends = Vec::new();
    let mut only_in_older = Vec::new();

    for (name, old_param) in older_index.iter() {
        let new_param = match newer_index.get(name) {
            Some(p) => p,
            None => {
                only_in_older.push(name.to_string());
                continue;
            }
        };

        let absolute_change = new_param.value - old_param.value;

        // Division-by-zero guard: percentage is undefined on a zero baseline.
        let percentage_change = if old_param.value != 0.0 {
            Some((absolute_change / old_param.value) * 100.0)
        } else {
            None
        };

        let direction = if absolute_change > 0.0 {
            TrendDirection::Increased
        } else if absolute_change < 0.0 {
            TrendDirection::Decreased
        } else {
            TrendDirection::Unchanged
        };

        trends.push(TrendEntry {
            name: name.to_string(),
            unit: new_param.unit.clone(),
            older_value: old_param.value,
            newer_value: new_param.value,
            absolute_change,
            percentage_change,
            direction,
            older_status: old_param.status.clone(),
            newer_status: new_param.status.clone(),
        });
    }

    TrendData {
        patient_name: newer.patient_name.clone(),
        older_report_date: older.report_date.clone(),
        newer_report_date: newer.report_date.clone(),
        trends,
        only_in_older,
        graph_base64: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LabParameter, ParameterStatus};

    fn param(name: &str, value: f64, status: ParameterStatus) -> LabParameter {
        LabParameter {
            name: name.to_string(),
            value,
            unit: "mg/dL".to_string(),
            reference_low: 0.0,
            reference_high: 100.0,
            status,
        }
    }

    fn report(date: &str, params: Vec<LabParameter>) -> LabReport {
        LabReport {
            patient_name: "Akshay Sharma".to_string(),
            report_date: date.to_string(),
            parameters: params,
        }
    }

    fn single(older: LabParameter, newer: LabParameter) -> TrendEntry {
        let data = derive_trends(
            &report("2026-01-15", vec![older]),
            &report("2026-02-20", vec![newer]),
        );
        assert_eq!(data.trends.len(), 1);
        data.trends.into_iter().next().unwrap()
    }

    #[test]
    fn improvement_scenario_glucose() {
        let entry = single(
            param("Glucose", 118.0, ParameterStatus::High),
            param("Glucose", 95.0, ParameterStatus::Normal),
        );
        assert_eq!(entry.absolute_change, -23.0);
        let pct = entry.percentage_change.unwrap();
        assert!((pct - (-19.491525423728813)).abs() < 1e-9);
        assert_eq!(entry.direction, TrendDirection::Decreased);
        assert_eq!(entry.older_status, ParameterStatus::High);
        assert_eq!(entry.newer_status, ParameterStatus::Normal);
    }

    #[test]
    fn worsening_scenario_wbc() {
        let entry = single(
            param("WBC", 8.5, ParameterStatus::Normal),
            param("WBC", 11.5, ParameterStatus::High),
        );
        assert!((entry.absolute_change - 3.0).abs() < 1e-12);
        let pct = entry.percentage_change.unwrap();
        assert!((pct - 35.294117647058826).abs() < 1e-9);
        assert_eq!(entry.direction, TrendDirection::Increased);
    }

    #[test]
    fn zero_baseline_has_no_percentage() {
        let entry = single(
            param("Marker", 0.0, ParameterStatus::Normal),
            param("Marker", 5.0, ParameterStatus::High),
        );
        assert_eq!(entry.percentage_change, None);
        assert_eq!(entry.absolute_change, 5.0);
        assert_eq!(entry.direction, TrendDirection::Increased);
    }

    #[test]
    fn zero_to_zero_is_unchanged_with_no_percentage() {
        let entry = single(
            param("Marker", 0.0, ParameterStatus::Normal),
            param("Marker", 0.0, ParameterStatus::Normal),
        );
        assert_eq!(entry.absolute_change, 0.0);
        assert_eq!(entry.percentage_change, None);
        assert_eq!(entry.direction, TrendDirection::Unchanged);
    }

    #[test]
    fn stable_when_value_and_status_repeat() {
        let entry = single(
            param("Glucose", 95.0, ParameterStatus::Normal),
            param("Glucose", 95.0, ParameterStatus::Normal),
        );
        assert_eq!(entry.absolute_change, 0.0);
        assert_eq!(entry.percentage_change, Some(0.0));
        assert_eq!(entry.direction, TrendDirection::Unchanged);
    }

    #[test]
    fn dropped_parameter_lands_in_only_in_older() {
        let older = report(
            "2026-01-15",
            vec![
                param("Ferritin", 40.0, ParameterStatus::Normal),
                param("Glucose", 95.0, ParameterStatus::Normal),
            ],
        );
        let newer = report("2026-02-20", vec![param("Glucose", 92.0, ParameterStatus::Normal)]);
        let data = derive_trends(&older, &newer);
        assert_eq!(data.only_in_older, vec!["Ferritin".to_string()]);
        assert!(data.trends.iter().all(|t| t.name != "Ferritin"));
    }

    #[test]
    fn names_only_in_newer_are_dropped() {
        let older = report("2026-01-15", vec![param("Glucose", 95.0, ParameterStatus::Normal)]);
        let newer = report(
            "2026-02-20",
            vec![
                param("Glucose", 92.0, ParameterStatus::Normal),
                param("Vitamin D", 18.0, ParameterStatus::Low),
            ],
        );
        let data = derive_trends(&older, &newer);
        assert_eq!(data.trends.len(), 1);
        assert!(data.only_in_older.is_empty());
        assert!(data.trends.iter().all(|t| t.name != "Vitamin D"));
    }

    #[test]
    fn pairing_follows_older_snapshot_order() {
        let older = report(
            "2026-01-15",
            vec![
                param("WBC", 8.5, ParameterStatus::Normal),
                param("Glucose", 95.0, ParameterStatus::Normal),
                param("Hemoglobin", 13.5, ParameterStatus::Normal),
            ],
        );
        let newer = report(
            "2026-02-20",
            vec![
                param("Hemoglobin", 13.2, ParameterStatus::Normal),
                param("WBC", 9.0, ParameterStatus::Normal),
                param("Glucose", 90.0, ParameterStatus::Normal),
            ],
        );
        let data = derive_trends(&older, &newer);
        let names: Vec<&str> = data.trends.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["WBC", "Glucose", "Hemoglobin"]);
    }

    #[test]
    fn unit_comes_from_the_newer_report() {
        let mut old_p = param("Glucose", 95.0, ParameterStatus::Normal);
        old_p.unit = "mg/dL".to_string();
        let mut new_p = param("Glucose", 5.3, ParameterStatus::Normal);
        new_p.unit = "mmol/L".to_string();
        let entry = single(old_p, new_p);
        assert_eq!(entry.unit, "mmol/L");
    }

    #[test]
    fn empty_snapshots_are_not_errors() {
        let empty = report("2026-01-15", vec![]);
        let full = report("2026-02-20", vec![param("Glucose", 95.0, ParameterStatus::Normal)]);

        let forward = derive_trends(&empty, &full);
        assert!(forward.trends.is_empty());
        assert!(forward.only_in_older.is_empty());

        let backward = derive_trends(&full, &empty);
        assert!(backward.trends.is_empty());
        assert_eq!(backward.only_in_older, vec!["Glucose".to_string()]);
    }

    #[test]
    fn patient_name_and_dates_carry_from_inputs() {
        let older = report("2026-01-15", vec![]);
        let mut newer = report("2026-02-20", vec![]);
        newer.patient_name = "A. Sharma".to_string();
        let data = derive_trends(&older, &newer);
        assert_eq!(data.patient_name, "A. Sharma");
        assert_eq!(data.older_report_date, "2026-01-15");
        assert_eq!(data.newer_report_date, "2026-02-20");
    }

    #[test]
    fn derivation_is_idempotent() {
        let older = report(
            "2026-01-15",
            vec![
                param("Glucose", 118.0, ParameterStatus::High),
                param("Ferritin", 40.0, ParameterStatus::Normal),
            ],
        );
        let newer = report("2026-02-20", vec![param("Glucose", 95.0, ParameterStatus::Normal)]);
        assert_eq!(derive_trends(&older, &newer), derive_trends(&older, &newer));
    }
}
