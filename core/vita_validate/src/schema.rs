//! The declarative validation schema: one rule per input field, bounds in
//! canonical SI units.
//!
//! A wrong bound here either rejects valid clinical data or accepts
//! implausible values, so every range is a deliberate choice documented in
//! canonical units. Birth year is the one rule with a dynamic bound: its
//! maximum is the current UTC year, so a typed 4-digit year in the future
//! (2980) is rejected even though it is a syntactically valid integer.

use chrono::Datelike;
use vita_units::MetricType;

/// Upper bound of a numeric rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaxBound {
    Fixed(f64),
    CurrentYear,
}

impl MaxBound {
    /// Resolve to a concrete canonical-unit value.
    pub fn resolve(self) -> f64 {
        match self {
            MaxBound::Fixed(v) => v,
            MaxBound::CurrentYear => f64::from(chrono::Utc::now().year()),
        }
    }
}

/// The check a rule applies to its field's value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleKind {
    Numeric {
        min: f64,
        max: MaxBound,
        /// Whole-number fields (birth year/month) reject fractional input.
        whole: bool,
    },
    Choice {
        options: &'static [&'static str],
    },
}

/// One field's validation rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub field: &'static str,
    pub metric: MetricType,
    /// Name used in user-facing messages ("Systolic BP", not "systolicBp").
    pub display_name: &'static str,
    pub required: bool,
    pub kind: RuleKind,
}

pub const SEX_OPTIONS: &[&str] = &["male", "female", "other"];

const fn numeric(min: f64, max: f64) -> RuleKind {
    RuleKind::Numeric {
        min,
        max: MaxBound::Fixed(max),
        whole: false,
    }
}

/// Every validated field, in payload order. Required fields first.
pub const SCHEMA: &[Rule] = &[
    Rule {
        field: "heightCm",
        metric: MetricType::Height,
        display_name: "Height",
        required: true,
        kind: numeric(50.0, 250.0),
    },
    Rule {
        field: "sex",
        metric: MetricType::Sex,
        display_name: "Sex",
        required: true,
        kind: RuleKind::Choice {
            options: SEX_OPTIONS,
        },
    },
    Rule {
        field: "weightKg",
        metric: MetricType::Weight,
        display_name: "Weight",
        required: false,
        kind: numeric(20.0, 500.0),
    },
    Rule {
        field: "waistCm",
        metric: MetricType::Waist,
        display_name: "Waist",
        required: false,
        kind: numeric(30.0, 250.0),
    },
    Rule {
        field: "hba1c",
        metric: MetricType::Hba1c,
        display_name: "HbA1c",
        required: false,
        kind: numeric(9.0, 195.0),
    },
    Rule {
        field: "ldlC",
        metric: MetricType::Ldl,
        display_name: "LDL",
        required: false,
        kind: numeric(0.0, 12.9),
    },
    Rule {
        field: "totalCholesterol",
        metric: MetricType::TotalCholesterol,
        display_name: "Total cholesterol",
        required: false,
        kind: numeric(0.0, 25.8),
    },
    Rule {
        field: "hdlC",
        metric: MetricType::Hdl,
        display_name: "HDL",
        required: false,
        kind: numeric(0.0, 7.8),
    },
    Rule {
        field: "triglycerides",
        metric: MetricType::Triglycerides,
        display_name: "Triglycerides",
        required: false,
        kind: numeric(0.0, 56.5),
    },
    Rule {
        field: "systolicBp",
        metric: MetricType::SystolicBp,
        display_name: "Systolic BP",
        required: false,
        kind: numeric(60.0, 300.0),
    },
    Rule {
        field: "diastolicBp",
        metric: MetricType::DiastolicBp,
        display_name: "Diastolic BP",
        required: false,
        kind: numeric(40.0, 150.0),
    },
    Rule {
        field: "apob",
        metric: MetricType::ApoB,
        display_name: "ApoB",
        required: false,
        kind: numeric(0.0, 5.0),
    },
    Rule {
        field: "creatinine",
        metric: MetricType::Creatinine,
        display_name: "Creatinine",
        required: false,
        kind: numeric(10.0, 2000.0),
    },
    Rule {
        field: "psa",
        metric: MetricType::Psa,
        display_name: "PSA",
        required: false,
        kind: numeric(0.0, 100.0),
    },
    Rule {
        field: "lpa",
        metric: MetricType::Lpa,
        display_name: "Lp(a)",
        required: false,
        kind: numeric(0.0, 500.0),
    },
    Rule {
        field: "birthYear",
        metric: MetricType::BirthYear,
        display_name: "Birth year",
        required: false,
        kind: RuleKind::Numeric {
            min: 1900.0,
            max: MaxBound::CurrentYear,
            whole: true,
        },
    },
    Rule {
        field: "birthMonth",
        metric: MetricType::BirthMonth,
        display_name: "Birth month",
        required: false,
        kind: RuleKind::Numeric {
            min: 1.0,
            max: MaxBound::Fixed(12.0),
            whole: true,
        },
    },
];

/// Look up a field's rule.
pub fn rule_for(field: &str) -> Option<&'static Rule> {
    SCHEMA.iter().find(|r| r.field == field)
}
