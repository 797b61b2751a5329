//! Pure helper for extracting numeric parameters from a
//! `serde_json::Value` object.
//!
//! The configuration layer hands fields a JSON object of plain numeric
//! parameters; missing or wrongly-typed keys fall back to the default.
//! This never fails — it always produces a usable value.

use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing
/// or wrong type.
///
/// Accepts both JSON numbers (including integers) and converts them to f64.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_existing_float() {
        let params = json!({"strength": 2.5});
        assert!((param_f64(&params, "strength", 1.0) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn extracts_integer_as_float() {
        let params = json!({"width": 10});
        assert!((param_f64(&params, "width", 0.0) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn returns_default_when_key_missing() {
        let params = json!({"other": 1.0});
        assert!((param_f64(&params, "strength", 3.0) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn returns_default_when_wrong_type() {
        let params = json!({"strength": "strong"});
        assert!((param_f64(&params, "strength", 1.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn returns_default_for_null_value() {
        let params = json!({"strength": null});
        assert!((param_f64(&params, "strength", 5.0) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn returns_default_for_non_object() {
        let params = json!("not an object");
        assert!((param_f64(&params, "strength", 7.0) - 7.0).abs() < f64::EPSILON);
    }
}
