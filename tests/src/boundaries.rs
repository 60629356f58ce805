use proptest::prelude::*;
use serde_json::json;
use vita_fields::{field_for_metric, FIELD_METRICS};
use vita_units::{unit_def, MetricType};
use vita_validate::{validate, validate_input_value};

const EPS: f64 = 1e-6;

fn optional_numeric_fields() -> Vec<(&'static str, f64, f64)> {
    FIELD_METRICS
        .iter()
        .filter(|&&(f, m)| {
            f != "heightCm" && !matches!(m, MetricType::Sex | MetricType::BirthYear)
        })
        .filter_map(|&(f, m)| {
            let (min, max) = unit_def(m).canonical_range?;
            Some((f, min, max))
        })
        .collect()
}

// Inclusive bounds: exactly min and exactly max pass, a hair outside fails.
#[test]
fn every_field_accepts_its_exact_bounds() {
    for (field, min, max) in optional_numeric_fields() {
        for good in [min, max] {
            let mut payload = json!({"heightCm": 170, "sex": "male"});
            payload[field] = json!(good);
            assert!(
                validate(&payload).is_ok(),
                "{field} rejected its own bound {good}"
            );
        }
        for bad in [min - EPS, max + EPS] {
            // birthMonth is whole-number checked before range, skip eps there
            if field == "birthMonth" {
                continue;
            }
            let mut payload = json!({"heightCm": 170, "sex": "male"});
            payload[field] = json!(bad);
            assert!(
                validate(&payload).is_err(),
                "{field} accepted out-of-range {bad}"
            );
        }
    }
    // whole-number fields get integer out-of-range probes instead
    for (field, bad) in [("birthMonth", 0), ("birthMonth", 13), ("birthYear", 1899)] {
        let mut payload = json!({"heightCm": 170, "sex": "male"});
        payload[field] = json!(bad);
        assert!(validate(&payload).is_err(), "{field} accepted {bad}");
    }
}

#[test]
fn height_bounds_are_inclusive_too() {
    for good in [50, 250] {
        assert!(validate(&json!({"heightCm": good, "sex": "male"})).is_ok());
    }
    for bad in [49.999, 250.001] {
        assert!(validate(&json!({"heightCm": bad, "sex": "male"})).is_err());
    }
}

proptest! {
    // Per-field independence: exactly one bad field among many yields
    // exactly one error entry, and validation never short-circuits.
    #[test]
    fn single_bad_field_yields_single_error(bad_idx in 0usize..12) {
        let fields = optional_numeric_fields();
        let (bad_field, _, bad_max) = fields[bad_idx % fields.len()];
        let mut payload = json!({"heightCm": 170, "sex": "female"});
        for (field, min, max) in &fields {
            let mid = (min + max) / 2.0;
            // whole-number fields reject fractional midpoints
            let mid = if *field == "birthMonth" { mid.round() } else { mid };
            payload[*field] = json!(mid);
        }
        payload[bad_field] = json!(bad_max + 1.0);
        let errors = validate(&payload).unwrap_err();
        prop_assert_eq!(errors.0.len(), 1);
        prop_assert!(errors.0.contains_key(bad_field));
    }

    // In-range values validate for any metric with a canonical range.
    #[test]
    fn in_range_values_pass_single_field_check(idx in 0usize..MetricType::ALL.len(), t in 0.0f64..=1.0) {
        let metric = MetricType::ALL[idx];
        if matches!(metric, MetricType::Sex | MetricType::BirthYear) {
            return Ok(());
        }
        let Some((min, max)) = unit_def(metric).canonical_range else {
            return Ok(());
        };
        let Some(field) = field_for_metric(metric) else {
            return Ok(());
        };
        let mut v = min + t * (max - min);
        if matches!(metric, MetricType::BirthMonth) {
            v = v.round();
        }
        prop_assert_eq!(validate_input_value(field, &json!(v)), None);
    }
}
