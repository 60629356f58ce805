//! Structured validation issues and their canonical-unit rendering.
//!
//! Validation produces `Issue` values, not strings; a single rendering
//! function turns them into the fixed English sentences the UI asserts on
//! (`"<Display Name> must be at <least|most> <number> <unit>"`). Keeping
//! rendering in one place means validation never has to parse its own
//! generated text.

use vita_units::{label_for, UnitSystem};

use crate::schema::Rule;

/// Why a field failed. `TooLow`/`TooHigh` carry the violated canonical
/// bound so rendering can embed it literally.
#[derive(Debug, Clone, PartialEq)]
pub enum IssueKind {
    Missing,
    NotANumber,
    NotAWholeNumber,
    TooLow(f64),
    TooHigh(f64),
    InvalidChoice,
}

/// A single field's validation failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub field: &'static str,
    pub kind: IssueKind,
}

/// Render a bound the way it appears in messages: "20", not "20.0";
/// "12.9" stays "12.9".
fn fmt_bound(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// " kg" for weight, "" for unitless metrics.
fn unit_suffix(rule: &Rule) -> String {
    let label = label_for(rule.metric, UnitSystem::Si);
    if label.is_empty() {
        String::new()
    } else {
        format!(" {label}")
    }
}

/// Render one issue as the canonical (SI) user-facing message.
pub fn render_canonical(rule: &Rule, kind: &IssueKind) -> String {
    let name = rule.display_name;
    match kind {
        IssueKind::Missing => format!("{name} is required"),
        IssueKind::NotANumber => format!("{name} must be a number"),
        IssueKind::NotAWholeNumber => format!("{name} must be a whole number"),
        IssueKind::TooLow(bound) => {
            format!("{name} must be at least {}{}", fmt_bound(*bound), unit_suffix(rule))
        }
        IssueKind::TooHigh(bound) => {
            format!("{name} must be at most {}{}", fmt_bound(*bound), unit_suffix(rule))
        }
        IssueKind::InvalidChoice => {
            format!("{name} must be one of {}", options_list(rule))
        }
    }
}

fn options_list(rule: &Rule) -> String {
    match rule.kind {
        crate::schema::RuleKind::Choice { options } => match options {
            [] => String::new(),
            [only] => (*only).to_string(),
            [init @ .., last] => format!("{}, or {last}", init.join(", ")),
        },
        _ => String::new(),
    }
}
