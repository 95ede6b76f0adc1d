//! Display policy for parameter tables: deterministic ordering and the
//! fixed numeric formatting the UI renders.

use crate::models::{LabParameter, TrendEntry};

/// Reorders a parameter list so abnormal entries come first.
///
/// Stable partition on a binary abnormal flag — relative order is
/// preserved within each half. Not a multi-key sort.
pub fn abnormal_first(parameters: &mut [LabParameter]) {
    parameters.sort_by_key(|p| !p.status.is_abnormal());
}

/// Same partition for trend rows, keyed on the newer status.
pub fn abnormal_trends_first(trends: &mut [TrendEntry]) {
    trends.sort_by_key(|t| !t.newer_status.is_abnormal());
}

/// Absolute change with a fixed 2-decimal representation and an explicit
/// leading `+` when positive (zero and negative carry no plus).
pub fn format_absolute_change(change: f64) -> String {
    if change > 0.0 {
        format!("+{change:.2}")
    } else {
        format!("{change:.2}")
    }
}

/// Percentage change at 1 decimal with an explicit `+` when positive,
/// or the literal `N/A` marker when the baseline was zero.
pub fn format_percentage_change(change: Option<f64>) -> String {
    match change {
        Some(pct) if pct > 0.0 => format!("+{pct:.1}%"),
        Some(pct) => format!("{pct:.1}%"),
        None => "N/A".to_string(),
    }
}
