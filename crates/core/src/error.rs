//! Error types for the navfield core.

use thiserror::Error;

/// Errors produced when constructing a potential field.
///
/// Evaluation itself never fails: a field that was constructed successfully
/// answers every query with plain arithmetic. All validation happens up
/// front so an invalid field cannot exist.
#[derive(Debug, Error)]
pub enum FieldError {
    /// An extent (width or length) was zero, negative, or non-finite.
    #[error("invalid extent '{name}': must be positive and finite, got {value}")]
    InvalidExtent { name: &'static str, value: f64 },

    /// A numeric parameter (strength, height, angle, origin component,
    /// displacement) was NaN or infinite.
    #[error("invalid parameter '{name}': must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },

    /// A requested field name was not found in the registry.
    #[error("unknown field: {0}")]
    UnknownField(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_extent_displays_name_and_value() {
        let err = FieldError::InvalidExtent {
            name: "width",
            value: -3.0,
        };
        let msg = format!("{err}");
        assert!(msg.contains("width"), "missing extent name in: {msg}");
        assert!(msg.contains("-3"), "missing value in: {msg}");
    }

    #[test]
    fn non_finite_parameter_displays_name_and_value() {
        let err = FieldError::NonFiniteParameter {
            name: "strength",
            value: f64::NAN,
        };
        let msg = format!("{err}");
        assert!(msg.contains("strength"), "missing parameter name in: {msg}");
        assert!(msg.contains("NaN"), "missing value in: {msg}");
    }

    #[test]
    fn unknown_field_includes_name() {
        let err = FieldError::UnknownField("whirlpool".into());
        let msg = format!("{err}");
        assert!(msg.contains("whirlpool"), "missing field name in: {msg}");
    }

    #[test]
    fn field_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FieldError>();
    }

    #[test]
    fn field_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<FieldError>();
    }
}
