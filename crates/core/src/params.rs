//! Pure helpers for reading color components out of a `serde_json::Value`.
//!
//! A missing key, a non-numeric value, or a non-object input all read as 0.
//! These never fail.

use serde_json::Value;

/// Extracts a component `value[name]` as `f64`, returning 0 if missing or wrong type.
///
/// Integers and floats are both accepted. An explicit `0` reads as 0, same as
/// an absent key.
pub fn component(value: &Value, name: &str) -> f64 {
    value.get(name).and_then(Value::as_f64).unwrap_or(0.0)
}

/// Extracts a flat list of numbers from a JSON array.
///
/// Returns `None` if `value` is not an array or any element is not a number.
pub fn components(value: &Value) -> Option<Vec<f64>> {
    value.as_array()?.iter().map(Value::as_f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -- component --

    #[test]
    fn component_extracts_existing_float() {
        let v = json!({"r": 127.5});
        assert!((component(&v, "r") - 127.5).abs() < f64::EPSILON);
    }

    #[test]
    fn component_extracts_integer_as_float() {
        let v = json!({"g": 255});
        assert!((component(&v, "g") - 255.0).abs() < f64::EPSILON);
    }

    #[test]
    fn component_returns_zero_when_key_missing() {
        let v = json!({"r": 10});
        assert_eq!(component(&v, "b"), 0.0);
    }

    #[test]
    fn component_returns_zero_for_wrong_type() {
        let v = json!({"r": "red", "g": true});
        assert_eq!(component(&v, "r"), 0.0);
        assert_eq!(component(&v, "g"), 0.0);
    }

    #[test]
    fn component_returns_zero_for_null_value() {
        let v = json!({"k": null});
        assert_eq!(component(&v, "k"), 0.0);
    }

    #[test]
    fn component_returns_zero_for_non_object() {
        let v = json!(42);
        assert_eq!(component(&v, "r"), 0.0);
    }

    #[test]
    fn component_keeps_negative_and_out_of_range_values() {
        let v = json!({"r": -20, "g": 400.25});
        assert_eq!(component(&v, "r"), -20.0);
        assert_eq!(component(&v, "g"), 400.25);
    }

    // -- components --

    #[test]
    fn components_reads_numeric_array() {
        let v = json!([255, 0, 12.5]);
        assert_eq!(components(&v), Some(vec![255.0, 0.0, 12.5]));
    }

    #[test]
    fn components_rejects_mixed_array() {
        let v = json!([255, "0", 12.5]);
        assert_eq!(components(&v), None);
    }

    #[test]
    fn components_rejects_non_array() {
        assert_eq!(components(&json!({"r": 1})), None);
    }
}
