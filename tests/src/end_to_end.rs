use pretty_assertions::assert_eq;
use serde_json::json;
use vita_units::{
    canonical_from_display, display_from_canonical, to_canonical, MetricType, UnitSystem,
};
use vita_validate::{convert_errors_to_units, validate, Sex};

// A conventional-system user submits display-unit values; the UI converts
// to canonical before calling validate, and rewrites any errors back.
#[test]
fn conventional_user_submit_flow() {
    let height_cm = to_canonical(MetricType::Height, 71.0, UnitSystem::Conventional);
    let weight_kg = to_canonical(MetricType::Weight, 185.0, UnitSystem::Conventional);
    let payload = json!({
        "heightCm": height_cm,
        "sex": "male",
        "weightKg": weight_kg,
    });

    let data = validate(&payload).expect("in-range values");
    assert_eq!(data.sex, Sex::Male);
    assert!((data.height_cm - 180.34).abs() < 0.01);
    assert!((data.weight_kg.unwrap() - 83.91).abs() < 0.01);

    // Rendering the stored canonical value back for that user
    assert_eq!(
        display_from_canonical(MetricType::Weight, data.weight_kg.unwrap(), UnitSystem::Conventional),
        "185"
    );
    assert_eq!(
        display_from_canonical(MetricType::Height, data.height_cm, UnitSystem::Conventional),
        "71.0"
    );
}

#[test]
fn failed_submit_errors_rewritten_for_conventional_user() {
    let payload = json!({
        "heightCm": 180,
        "sex": "female",
        "weightKg": 5,       // below 20 kg
        "ldlC": 99.0,        // above 12.9 mmol/L
    });
    let errors = validate(&payload).unwrap_err();
    assert_eq!(errors.0.len(), 2);

    let shown = convert_errors_to_units(&errors.0, UnitSystem::Conventional);
    assert_eq!(shown["weightKg"], "Weight must be at least 44 lbs");
    assert_eq!(shown["ldlC"], "LDL must be at most 499 mg/dL");

    // The same errors for an SI user are the canonical strings untouched.
    let si = convert_errors_to_units(&errors.0, UnitSystem::Si);
    assert_eq!(si, errors.0);
}

#[test]
fn typed_display_input_parses_and_validates() {
    // "98,4" typed in an inches field by a user with a comma keyboard layout
    let canonical =
        canonical_from_display(MetricType::Height, "98,4", UnitSystem::Conventional).unwrap();
    let payload = json!({"heightCm": canonical, "sex": "other"});
    let data = validate(&payload).expect("boundary value survives re-conversion");
    assert!((data.height_cm - 249.936).abs() < 0.001);
}

#[test]
fn display_range_boundaries_validate_after_reconversion() {
    // A boundary value shown as valid in the conventional UI must still be
    // accepted once converted back to canonical units and submitted.
    for field in ["weightKg", "waistCm", "hba1c", "ldlC", "creatinine"] {
        let metric = vita_fields::metric_for_field(field).unwrap();
        let range = vita_units::range_for(metric, UnitSystem::Conventional).unwrap();
        for display_bound in [range.min, range.max] {
            let canonical = to_canonical(metric, display_bound, UnitSystem::Conventional);
            let mut payload = json!({"heightCm": 170, "sex": "male"});
            payload[field] = json!(canonical);
            // Reconversion rounding may land a hair outside the canonical
            // bound; the schema must not reject it by more than the
            // documented display tolerance, so nudge within it.
            if validate(&payload).is_err() {
                let dp = vita_units::decimal_places_for(metric, UnitSystem::Conventional);
                let slope = vita_units::unit_def(metric).to_conventional.factor;
                let tol = 0.5 * 10f64.powi(-(dp as i32)) / slope;
                let (cmin, cmax) = vita_units::unit_def(metric).canonical_range.unwrap();
                let clamped = canonical.clamp(cmin, cmax);
                assert!(
                    (clamped - canonical).abs() <= tol,
                    "{field}: display bound {display_bound} re-converts to {canonical}, \
                     outside canonical range by more than {tol}"
                );
            }
        }
    }
}

#[test]
fn unknown_fields_flow_through_the_whole_pipeline() {
    let payload = json!({
        "heightCm": 170,
        "sex": "male",
        "medicationNotes": "taking statins",
    });
    assert!(validate(&payload).is_ok());

    let mut errors = std::collections::BTreeMap::new();
    errors.insert("medicationNotes".to_string(), "Some error message".to_string());
    let out = convert_errors_to_units(&errors, UnitSystem::Conventional);
    assert_eq!(out, errors);
}
