//! Rewriting of canonical-unit error messages into the user's unit system.
//!
//! This operates on already-rendered message strings (for example after a
//! server round trip) with no structured data attached, so it pattern
//! matches `<number><whitespace?><canonical-unit-label>` anywhere in the
//! text and substitutes the converted number and display label. Anything it
//! cannot confidently match passes through unchanged — an unconverted but
//! correct message beats a garbled one.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;
use vita_fields::metric_for_field;
use vita_units::{
    format_value, from_canonical, label_for, unit_def, Conversion, MetricType, UnitSystem,
};

/// One compiled pattern per metric with a canonical unit label. Labels may
/// contain regex metacharacters (`%`, `/`, `µ`), so they are escaped before
/// compilation.
static UNIT_PATTERNS: Lazy<HashMap<MetricType, Regex>> = Lazy::new(|| {
    MetricType::ALL
        .iter()
        .filter_map(|&metric| {
            let label = label_for(metric, UnitSystem::Si);
            if label.is_empty() {
                return None;
            }
            let pattern = format!(r"(\d+(?:\.\d+)?)\s*{}", regex::escape(label));
            let re = Regex::new(&pattern).expect("unit label pattern must compile");
            Some((metric, re))
        })
        .collect()
});

/// Rewrite a field→message error map into `target` units.
///
/// The canonical system is a no-op fast path returning string-identical
/// messages. Fields without a metric or without a unit label (sex, birth
/// year) pass through verbatim, as do messages where no
/// number-plus-canonical-label occurrence is found. Never fails.
pub fn convert_errors_to_units(
    errors: &BTreeMap<String, String>,
    target: UnitSystem,
) -> BTreeMap<String, String> {
    if target == UnitSystem::Si {
        return errors.clone();
    }
    errors
        .iter()
        .map(|(field, message)| (field.clone(), convert_message(field, message, target)))
        .collect()
}

fn convert_message(field: &str, message: &str, target: UnitSystem) -> String {
    let Some(metric) = metric_for_field(field) else {
        return message.to_string();
    };
    let def = unit_def(metric);
    // Identity metrics keep the same label in both systems; leave the
    // message byte-stable rather than reformatting the number.
    if def.to_conventional == Conversion::IDENTITY
        && def.si_label == def.conventional_label
    {
        return message.to_string();
    }
    let Some(pattern) = UNIT_PATTERNS.get(&metric) else {
        return message.to_string();
    };
    if !pattern.is_match(message) {
        log::warn!("no canonical unit occurrence to rewrite in message for {field}: {message}");
        return message.to_string();
    }
    pattern
        .replace_all(message, |caps: &regex::Captures<'_>| {
            match caps[1].parse::<f64>() {
                Ok(canonical) => {
                    let display = from_canonical(metric, canonical, target);
                    format!(
                        "{} {}",
                        format_value(metric, display, target),
                        label_for(metric, target)
                    )
                }
                // Unparseable capture: keep the original text untouched.
                Err(_) => caps[0].to_string(),
            }
        })
        .into_owned()
}
