//! Validation of proposed health inputs and unit-aware error rendering.
//!
//! [`validate`] checks a raw JSON payload against medically-bounded ranges
//! expressed in canonical SI units and returns either a typed
//! [`HealthInput`] (canonical units, camelCase field names) or a per-field
//! error map. Validation failures are data, never panics: the UI needs
//! every field's error at once.
//!
//! [`convert_errors_to_units`] rewrites an already-rendered error map into
//! the user's preferred unit system without re-deriving the messages.
//!
//! ```
//! use serde_json::json;
//! use vita_validate::validate;
//!
//! let input = json!({"heightCm": 180, "sex": "female", "weightKg": "72.5"});
//! let data = validate(&input).unwrap();
//! assert_eq!(data.height_cm, 180.0);
//! assert_eq!(data.weight_kg, Some(72.5));
//!
//! let bad = json!({"heightCm": 300, "sex": "female"});
//! let errors = validate(&bad).unwrap_err();
//! assert_eq!(
//!     errors.0["heightCm"],
//!     "Height must be at most 250 cm"
//! );
//! ```

pub mod convert;
pub mod issue;
pub mod schema;
pub mod validate;

pub use convert::convert_errors_to_units;
pub use validate::{
    is_birth_year_clearly_invalid, validate, validate_input_value, HealthInput, Sex,
    ValidationErrors,
};
