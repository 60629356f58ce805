//! Unit definitions and conversion for tracked clinical metrics.
//!
//! Measurements are always stored in canonical SI units; only display and
//! input rendering depend on the user's [`UnitSystem`]. This crate holds the
//! static per-metric table (labels, decimal places, conversion formulas,
//! canonical ranges) and the pure functions that operate over it.
//!
//! ```
//! use vita_units::{from_canonical, to_canonical, MetricType, UnitSystem};
//!
//! // 20 kg displayed in the conventional system
//! let lbs = from_canonical(MetricType::Weight, 20.0, UnitSystem::Conventional);
//! assert!((lbs - 44.0924).abs() < 1e-6);
//! // and back
//! let kg = to_canonical(MetricType::Weight, lbs, UnitSystem::Conventional);
//! assert!((kg - 20.0).abs() < 1e-9);
//! ```

pub mod def;
pub mod display;
pub mod metric;

pub use def::{
    decimal_places_for, from_canonical, label_for, range_for, to_canonical, unit_def,
    Conversion, DisplayRange, UnitDef,
};
pub use display::{canonical_from_display, display_from_canonical, format_value, round_dp};
pub use metric::{MetricType, UnitSystem};
