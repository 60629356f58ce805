//! Metric and unit-system identifiers.

use serde::{Deserialize, Serialize};

/// A trackable clinical quantity. The canonical storage unit for each
/// variant is fixed (see the table in [`crate::def`]); adding a variant
/// without a table entry fails the completeness test in that module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricType {
    Weight,
    Waist,
    Height,
    Hba1c,
    Ldl,
    TotalCholesterol,
    Hdl,
    Triglycerides,
    SystolicBp,
    DiastolicBp,
    ApoB,
    Creatinine,
    Psa,
    Lpa,
    Sex,
    BirthYear,
    BirthMonth,
}

impl MetricType {
    /// Every variant, in table order.
    pub const ALL: [MetricType; 17] = [
        MetricType::Weight,
        MetricType::Waist,
        MetricType::Height,
        MetricType::Hba1c,
        MetricType::Ldl,
        MetricType::TotalCholesterol,
        MetricType::Hdl,
        MetricType::Triglycerides,
        MetricType::SystolicBp,
        MetricType::DiastolicBp,
        MetricType::ApoB,
        MetricType::Creatinine,
        MetricType::Psa,
        MetricType::Lpa,
        MetricType::Sex,
        MetricType::BirthYear,
        MetricType::BirthMonth,
    ];
}

/// The user's display/input unit preference. Persisted per user, never per
/// measurement; `Si` is the canonical storage system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Si,
    Conventional,
}
