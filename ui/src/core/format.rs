//! Formatting helpers for presenting scores.

/// Whole numbers print without decimals, everything else with one.
pub fn format_score(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
