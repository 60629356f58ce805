//! Rendering and parsing of display-unit values.

use crate::def::{decimal_places_for, from_canonical, to_canonical};
use crate::metric::{MetricType, UnitSystem};

/// Round to `dp` decimal places.
pub fn round_dp(value: f64, dp: u8) -> f64 {
    let scale = 10f64.powi(dp as i32);
    (value * scale).round() / scale
}

/// Fixed-point rendering of a display-unit value with the unit system's
/// decimal places: 0 dp yields an integer string ("44"), more yields that
/// many digits ("98.4"), never a float artifact like "2.9700000001".
pub fn format_value(metric: MetricType, display_value: f64, system: UnitSystem) -> String {
    let dp = decimal_places_for(metric, system) as usize;
    format!("{display_value:.dp$}")
}

/// Convert a canonical value and render it for display in one step.
pub fn display_from_canonical(metric: MetricType, canonical: f64, system: UnitSystem) -> String {
    format_value(metric, from_canonical(metric, canonical, system), system)
}

/// Parse user-typed display input and convert it to canonical units.
/// Tolerates surrounding whitespace and a comma decimal separator; returns
/// `None` for anything that is not a finite number.
pub fn canonical_from_display(metric: MetricType, text: &str, system: UnitSystem) -> Option<f64> {
    let normalized = text.trim().replace(',', ".");
    let value: f64 = normalized.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(to_canonical(metric, value, system))
}
