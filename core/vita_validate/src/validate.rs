//! Schema validation of raw JSON health payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::issue::{render_canonical, IssueKind};
use crate::schema::{rule_for, Rule, RuleKind, SCHEMA, SEX_OPTIONS};

/// Self-reported sex, used to gate sex-specific suggestions (PSA and the
/// like) downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl Sex {
    fn parse(s: &str) -> Option<Sex> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Some(Sex::Male),
            "female" => Some(Sex::Female),
            "other" => Some(Sex::Other),
            _ => None,
        }
    }
}

/// A validated batch of health inputs, all numeric values in canonical SI
/// units. Serializes back to the same camelCase field names the payload
/// used; the persistence layer owns any further column mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthInput {
    pub height_cm: f64,
    pub sex: Sex,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hba1c: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldl_c: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cholesterol: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdl_c: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triglycerides: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub systolic_bp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diastolic_bp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apob: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creatinine: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psa: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lpa: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_month: Option<i32>,
}

/// Per-field validation failures, keyed by payload field name. Returned as
/// data rather than thrown: the caller needs every field's message at once.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation failed for {}", field_list(.0))]
pub struct ValidationErrors(pub BTreeMap<String, String>);

fn field_list(fields: &BTreeMap<String, String>) -> String {
    fields.keys().cloned().collect::<Vec<_>>().join(", ")
}

/// Key used when the payload as a whole is malformed (not a JSON object).
pub const PAYLOAD_ERROR_FIELD: &str = "_payload";

/// Extract a finite number from a JSON value. Form payloads frequently
/// carry numbers as strings, so numeric strings (with either `.` or `,` as
/// the decimal separator) are accepted.
fn extract_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().replace(',', ".").parse().ok()?,
        _ => return None,
    };
    parsed.is_finite().then_some(parsed)
}

/// Check one present value against its rule. First failing rule wins; a
/// field never gets more than one issue.
fn check_value(rule: &Rule, value: &Value) -> Option<IssueKind> {
    match rule.kind {
        RuleKind::Choice { .. } => {
            let ok = value.as_str().and_then(Sex::parse).is_some();
            (!ok).then_some(IssueKind::InvalidChoice)
        }
        RuleKind::Numeric { min, max, whole } => {
            let Some(v) = extract_number(value) else {
                return Some(IssueKind::NotANumber);
            };
            if whole && v.fract() != 0.0 {
                return Some(IssueKind::NotAWholeNumber);
            }
            if v < min {
                return Some(IssueKind::TooLow(min));
            }
            let max = max.resolve();
            if v > max {
                return Some(IssueKind::TooHigh(max));
            }
            None
        }
    }
}

/// Validate a raw JSON payload against the schema.
///
/// Required fields (height, sex) must be present and pass their checks;
/// every other field is optional and validated independently — one invalid
/// field never blocks its siblings. Unknown payload fields are ignored.
/// Never panics on well-formed JSON: malformed shapes and types become
/// per-field errors.
pub fn validate(payload: &Value) -> Result<HealthInput, ValidationErrors> {
    let Some(obj) = payload.as_object() else {
        let mut errors = BTreeMap::new();
        errors.insert(
            PAYLOAD_ERROR_FIELD.to_string(),
            "Payload must be a JSON object".to_string(),
        );
        return Err(ValidationErrors(errors));
    };

    let mut errors: BTreeMap<String, String> = BTreeMap::new();
    let mut height_cm = None;
    let mut sex = None;
    let mut numbers: BTreeMap<&'static str, f64> = BTreeMap::new();

    for rule in SCHEMA {
        let value = obj.get(rule.field).filter(|v| !v.is_null());
        let issue = match value {
            None => rule.required.then_some(IssueKind::Missing),
            Some(v) => check_value(rule, v),
        };
        if let Some(kind) = issue {
            errors.insert(rule.field.to_string(), render_canonical(rule, &kind));
            continue;
        }
        let Some(v) = value else { continue };
        match rule.kind {
            RuleKind::Choice { .. } => {
                sex = v.as_str().and_then(Sex::parse);
            }
            RuleKind::Numeric { .. } => {
                if rule.field == "heightCm" {
                    height_cm = extract_number(v);
                } else if let Some(n) = extract_number(v) {
                    numbers.insert(rule.field, n);
                }
            }
        }
    }

    if !errors.is_empty() {
        return Err(ValidationErrors(errors));
    }

    // Required fields are present here or an error would have been recorded.
    let (Some(height_cm), Some(sex)) = (height_cm, sex) else {
        let mut errors = BTreeMap::new();
        errors.insert(
            PAYLOAD_ERROR_FIELD.to_string(),
            "Payload is missing required fields".to_string(),
        );
        return Err(ValidationErrors(errors));
    };

    let whole = |field: &str| numbers.get(field).map(|v| *v as i32);
    Ok(HealthInput {
        height_cm,
        sex,
        weight_kg: numbers.get("weightKg").copied(),
        waist_cm: numbers.get("waistCm").copied(),
        hba1c: numbers.get("hba1c").copied(),
        ldl_c: numbers.get("ldlC").copied(),
        total_cholesterol: numbers.get("totalCholesterol").copied(),
        hdl_c: numbers.get("hdlC").copied(),
        triglycerides: numbers.get("triglycerides").copied(),
        systolic_bp: numbers.get("systolicBp").copied(),
        diastolic_bp: numbers.get("diastolicBp").copied(),
        apob: numbers.get("apob").copied(),
        creatinine: numbers.get("creatinine").copied(),
        psa: numbers.get("psa").copied(),
        lpa: numbers.get("lpa").copied(),
        birth_year: whole("birthYear"),
        birth_month: whole("birthMonth"),
    })
}

/// Validate a single field's proposed value, for early UI feedback before
/// a full submit. Returns the canonical message on failure; `None` when the
/// value is valid, null, or the field has no schema entry.
pub fn validate_input_value(field: &str, value: &Value) -> Option<String> {
    let rule = rule_for(field)?;
    if value.is_null() {
        return None;
    }
    check_value(rule, value).map(|kind| render_canonical(rule, &kind))
}

/// Early-feedback check for birth-year typing: `true` only once a 4+-digit
/// value is unambiguously outside [1900, current year]. Partial input (1–3
/// digits still being typed) is never flagged.
pub fn is_birth_year_clearly_invalid(year: i32) -> bool {
    use chrono::Datelike;
    if year < 1000 {
        return false;
    }
    let current = chrono::Utc::now().year();
    year < 1900 || year > current
}

// Sanity: the sex options advertised in messages match the parser.
const _: () = assert!(SEX_OPTIONS.len() == 3);
