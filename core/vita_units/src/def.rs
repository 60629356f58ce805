//! The static unit definition table.
//!
//! One [`UnitDef`] per [`MetricType`]: display label and decimal places per
//! unit system, the canonical-to-conventional conversion, and the canonical
//! valid range. The conversion constants are published clinical factors and
//! must not drift:
//!
//! | metric                  | canonical   | conventional | formula                      |
//! |-------------------------|-------------|--------------|------------------------------|
//! | weight                  | kg          | lbs          | ×2.20462                     |
//! | waist, height           | cm          | in           | ÷2.54                        |
//! | HbA1c                   | mmol/mol    | %            | ×0.09148 + 2.152 (IFCC↔NGSP) |
//! | LDL, HDL, total chol.   | mmol/L      | mg/dL        | ×38.67                       |
//! | triglycerides           | mmol/L      | mg/dL        | ×88.57                       |
//! | blood pressure          | mmHg        | mmHg         | identity                     |
//! | ApoB                    | g/L         | mg/dL        | ×100                         |
//! | creatinine              | µmol/L      | mg/dL        | ÷88.4                        |
//! | PSA                     | ng/mL       | ng/mL        | identity                     |
//! | Lp(a)                   | nmol/L      | nmol/L       | identity                     |
//!
//! Decimal places are deliberate per-field product choices (whole pounds,
//! one decimal for inches and for lab percentages), not derived from a
//! significant-figures rule.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::display::round_dp;
use crate::metric::{MetricType, UnitSystem};

/// Affine map from a canonical value to its conventional display value:
/// `display = canonical * factor + offset`. Identity is `{1.0, 0.0}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub factor: f64,
    pub offset: f64,
}

impl Conversion {
    pub const IDENTITY: Conversion = Conversion {
        factor: 1.0,
        offset: 0.0,
    };

    const fn linear(factor: f64) -> Conversion {
        Conversion {
            factor,
            offset: 0.0,
        }
    }

    pub fn apply(&self, canonical: f64) -> f64 {
        canonical * self.factor + self.offset
    }

    pub fn invert(&self, display: f64) -> f64 {
        (display - self.offset) / self.factor
    }
}

/// One row of the unit table.
#[derive(Debug, Clone, Copy)]
pub struct UnitDef {
    /// Canonical (SI) label; empty for unitless metrics (sex, birth fields).
    pub si_label: &'static str,
    pub conventional_label: &'static str,
    pub si_decimals: u8,
    pub conventional_decimals: u8,
    pub to_conventional: Conversion,
    /// Valid range in canonical units; `None` for metrics whose bounds are
    /// owned entirely by the validation schema (sex, birth year).
    pub canonical_range: Option<(f64, f64)>,
}

/// An inclusive displayable range in one unit system's units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRange {
    pub min: f64,
    pub max: f64,
}

fn build_registry() -> HashMap<MetricType, UnitDef> {
    use MetricType::*;
    let mut m = HashMap::new();

    m.insert(
        Weight,
        UnitDef {
            si_label: "kg",
            conventional_label: "lbs",
            si_decimals: 1,
            conventional_decimals: 0,
            to_conventional: Conversion::linear(2.20462),
            canonical_range: Some((20.0, 500.0)),
        },
    );
    m.insert(
        Waist,
        UnitDef {
            si_label: "cm",
            conventional_label: "in",
            si_decimals: 0,
            conventional_decimals: 1,
            to_conventional: Conversion::linear(1.0 / 2.54),
            canonical_range: Some((30.0, 250.0)),
        },
    );
    m.insert(
        Height,
        UnitDef {
            si_label: "cm",
            conventional_label: "in",
            si_decimals: 0,
            conventional_decimals: 1,
            to_conventional: Conversion::linear(1.0 / 2.54),
            canonical_range: Some((50.0, 250.0)),
        },
    );
    // IFCC mmol/mol to NGSP percent
    m.insert(
        Hba1c,
        UnitDef {
            si_label: "mmol/mol",
            conventional_label: "%",
            si_decimals: 0,
            conventional_decimals: 1,
            to_conventional: Conversion {
                factor: 0.09148,
                offset: 2.152,
            },
            canonical_range: Some((9.0, 195.0)),
        },
    );
    m.insert(
        Ldl,
        UnitDef {
            si_label: "mmol/L",
            conventional_label: "mg/dL",
            si_decimals: 1,
            conventional_decimals: 0,
            to_conventional: Conversion::linear(38.67),
            canonical_range: Some((0.0, 12.9)),
        },
    );
    m.insert(
        TotalCholesterol,
        UnitDef {
            si_label: "mmol/L",
            conventional_label: "mg/dL",
            si_decimals: 1,
            conventional_decimals: 0,
            to_conventional: Conversion::linear(38.67),
            canonical_range: Some((0.0, 25.8)),
        },
    );
    m.insert(
        Hdl,
        UnitDef {
            si_label: "mmol/L",
            conventional_label: "mg/dL",
            si_decimals: 1,
            conventional_decimals: 0,
            to_conventional: Conversion::linear(38.67),
            canonical_range: Some((0.0, 7.8)),
        },
    );
    // Triglycerides have their own molar mass; 38.67 would be wrong here.
    m.insert(
        Triglycerides,
        UnitDef {
            si_label: "mmol/L",
            conventional_label: "mg/dL",
            si_decimals: 1,
            conventional_decimals: 0,
            to_conventional: Conversion::linear(88.57),
            canonical_range: Some((0.0, 56.5)),
        },
    );
    // mmHg in both systems
    m.insert(
        SystolicBp,
        UnitDef {
            si_label: "mmHg",
            conventional_label: "mmHg",
            si_decimals: 0,
            conventional_decimals: 0,
            to_conventional: Conversion::IDENTITY,
            canonical_range: Some((60.0, 300.0)),
        },
    );
    m.insert(
        DiastolicBp,
        UnitDef {
            si_label: "mmHg",
            conventional_label: "mmHg",
            si_decimals: 0,
            conventional_decimals: 0,
            to_conventional: Conversion::IDENTITY,
            canonical_range: Some((40.0, 150.0)),
        },
    );
    m.insert(
        ApoB,
        UnitDef {
            si_label: "g/L",
            conventional_label: "mg/dL",
            si_decimals: 2,
            conventional_decimals: 0,
            to_conventional: Conversion::linear(100.0),
            canonical_range: Some((0.0, 5.0)),
        },
    );
    m.insert(
        Creatinine,
        UnitDef {
            si_label: "µmol/L",
            conventional_label: "mg/dL",
            si_decimals: 0,
            conventional_decimals: 2,
            to_conventional: Conversion::linear(1.0 / 88.4),
            canonical_range: Some((10.0, 2000.0)),
        },
    );
    // ng/mL in both systems
    m.insert(
        Psa,
        UnitDef {
            si_label: "ng/mL",
            conventional_label: "ng/mL",
            si_decimals: 1,
            conventional_decimals: 1,
            to_conventional: Conversion::IDENTITY,
            canonical_range: Some((0.0, 100.0)),
        },
    );
    // nmol/L in both systems; the mg/dL conversion is isoform-dependent
    // and not clinically exact, so the product displays nmol/L everywhere.
    m.insert(
        Lpa,
        UnitDef {
            si_label: "nmol/L",
            conventional_label: "nmol/L",
            si_decimals: 0,
            conventional_decimals: 0,
            to_conventional: Conversion::IDENTITY,
            canonical_range: Some((0.0, 500.0)),
        },
    );
    // Unitless metrics: identity conversion, empty labels. Their bounds
    // (enum membership, current-year cap) live in the validation schema.
    m.insert(
        Sex,
        UnitDef {
            si_label: "",
            conventional_label: "",
            si_decimals: 0,
            conventional_decimals: 0,
            to_conventional: Conversion::IDENTITY,
            canonical_range: None,
        },
    );
    m.insert(
        BirthYear,
        UnitDef {
            si_label: "",
            conventional_label: "",
            si_decimals: 0,
            conventional_decimals: 0,
            to_conventional: Conversion::IDENTITY,
            canonical_range: None,
        },
    );
    m.insert(
        BirthMonth,
        UnitDef {
            si_label: "",
            conventional_label: "",
            si_decimals: 0,
            conventional_decimals: 0,
            to_conventional: Conversion::IDENTITY,
            canonical_range: Some((1.0, 12.0)),
        },
    );

    m
}

static REGISTRY: Lazy<HashMap<MetricType, UnitDef>> = Lazy::new(build_registry);

/// Look up the table row for a metric. A missing row is a configuration
/// defect, not a data error, and surfaces loudly rather than being
/// tolerated at request time (a silent fallback would display a raw
/// canonical number under the wrong unit label).
pub fn unit_def(metric: MetricType) -> &'static UnitDef {
    REGISTRY
        .get(&metric)
        .unwrap_or_else(|| panic!("unit table has no entry for {metric:?}"))
}

/// Display label for a metric in a unit system. Empty for unitless metrics.
pub fn label_for(metric: MetricType, system: UnitSystem) -> &'static str {
    let def = unit_def(metric);
    match system {
        UnitSystem::Si => def.si_label,
        UnitSystem::Conventional => def.conventional_label,
    }
}

/// Rounding precision used when rendering a value in a unit system.
pub fn decimal_places_for(metric: MetricType, system: UnitSystem) -> u8 {
    let def = unit_def(metric);
    match system {
        UnitSystem::Si => def.si_decimals,
        UnitSystem::Conventional => def.conventional_decimals,
    }
}

/// Convert a display-unit value into canonical units. Identity for `Si`.
pub fn to_canonical(metric: MetricType, display_value: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Si => display_value,
        UnitSystem::Conventional => unit_def(metric).to_conventional.invert(display_value),
    }
}

/// Convert a canonical value into display units. Identity for `Si`.
pub fn from_canonical(metric: MetricType, canonical_value: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Si => canonical_value,
        UnitSystem::Conventional => unit_def(metric).to_conventional.apply(canonical_value),
    }
}

/// The valid range in display units: the canonical range converted with
/// [`from_canonical`] and rounded to the system's decimal places. `None`
/// for metrics without a canonical range.
pub fn range_for(metric: MetricType, system: UnitSystem) -> Option<DisplayRange> {
    let (min, max) = unit_def(metric).canonical_range?;
    let dp = decimal_places_for(metric, system);
    Some(DisplayRange {
        min: round_dp(from_canonical(metric, min, system), dp),
        max: round_dp(from_canonical(metric, max, system), dp),
    })
}
