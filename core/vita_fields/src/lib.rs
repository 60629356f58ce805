//! Translation between the camelCase field names used by forms and API
//! payloads (`ldlC`, `systolicBp`) and the [`MetricType`] vocabulary used by
//! storage and the unit table.
//!
//! Fields with no associated metric (free text, future payload additions)
//! are simply absent: [`metric_for_field`] returns `None` and callers must
//! skip unit conversion for them rather than treat it as an error.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use vita_units::MetricType;

/// The field vocabulary, one row per input field. One-to-one by
/// construction; the tests below enforce it.
pub const FIELD_METRICS: &[(&str, MetricType)] = &[
    ("heightCm", MetricType::Height),
    ("weightKg", MetricType::Weight),
    ("waistCm", MetricType::Waist),
    ("hba1c", MetricType::Hba1c),
    ("ldlC", MetricType::Ldl),
    ("totalCholesterol", MetricType::TotalCholesterol),
    ("hdlC", MetricType::Hdl),
    ("triglycerides", MetricType::Triglycerides),
    ("systolicBp", MetricType::SystolicBp),
    ("diastolicBp", MetricType::DiastolicBp),
    ("apob", MetricType::ApoB),
    ("creatinine", MetricType::Creatinine),
    ("psa", MetricType::Psa),
    ("lpa", MetricType::Lpa),
    ("sex", MetricType::Sex),
    ("birthYear", MetricType::BirthYear),
    ("birthMonth", MetricType::BirthMonth),
];

static BY_FIELD: Lazy<HashMap<&'static str, MetricType>> =
    Lazy::new(|| FIELD_METRICS.iter().copied().collect());

static BY_METRIC: Lazy<HashMap<MetricType, &'static str>> =
    Lazy::new(|| FIELD_METRICS.iter().map(|&(f, m)| (m, f)).collect());

/// The metric behind a payload field name, or `None` for unmapped fields.
pub fn metric_for_field(field: &str) -> Option<MetricType> {
    BY_FIELD.get(field).copied()
}

/// The payload field name for a metric, or `None` for metrics that have no
/// input field.
pub fn field_for_metric(metric: MetricType) -> Option<&'static str> {
    BY_METRIC.get(&metric).copied()
}
