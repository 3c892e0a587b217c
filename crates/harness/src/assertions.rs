//! Structural assertions over decoded JSON values.
//!
//! A [`Shape`] declares the fields a response object must carry and what
//! kind of value each holds. The check is deliberately one-sided: missing
//! required fields are rejected, unknown extra fields are ignored, because
//! the backend is free to grow its responses without breaking this suite.

use core::fmt;

use serde_json::Value;
use thiserror::Error;

/// Value kinds a shape field can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any JSON string.
    String,
    /// An integer (i64 or u64 range).
    Integer,
    /// Any JSON number.
    Number,
    /// A JSON boolean.
    Boolean,
    /// A string holding a UUID.
    Uuid,
    /// A string holding an RFC 3339 timestamp.
    DateTime,
    /// A string holding a decimal amount ("19.99").
    Decimal,
    /// A JSON array.
    Array,
    /// A JSON object.
    Object,
}

impl FieldKind {
    /// Whether `value` matches this kind.
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::Uuid => value
                .as_str()
                .is_some_and(|s| uuid::Uuid::parse_str(s).is_ok()),
            Self::DateTime => value
                .as_str()
                .is_some_and(|s| chrono::DateTime::parse_from_rfc3339(s).is_ok()),
            Self::Decimal => value
                .as_str()
                .is_some_and(|s| s.parse::<rust_decimal::Decimal>().is_ok()),
            Self::Array => value.is_array(),
            Self::Object => value.is_object(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Uuid => "uuid string",
            Self::DateTime => "RFC 3339 string",
            Self::Decimal => "decimal string",
            Self::Array => "array",
            Self::Object => "object",
        };
        f.write_str(s)
    }
}

/// One declared field of a [`Shape`].
#[derive(Debug, Clone)]
struct Field {
    name: &'static str,
    kind: FieldKind,
    required: bool,
}

/// A declared response shape.
#[derive(Debug, Clone)]
pub struct Shape {
    name: &'static str,
    fields: Vec<Field>,
}

/// Why a value failed a [`Shape`] check.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// The value is not a JSON object at all.
    #[error("{shape}: expected a JSON object, found {found}")]
    NotAnObject {
        /// Shape that was being checked.
        shape: &'static str,
        /// Short description of what was found instead.
        found: String,
    },
    /// A required field is absent (or explicitly null).
    #[error("{shape}: missing required field `{field}`")]
    MissingField {
        /// Shape that was being checked.
        shape: &'static str,
        /// Name of the absent field.
        field: &'static str,
    },
    /// A present field holds the wrong kind of value.
    #[error("{shape}: field `{field}` should be {expected}, found {found}")]
    WrongKind {
        /// Shape that was being checked.
        shape: &'static str,
        /// Name of the offending field.
        field: &'static str,
        /// The declared kind.
        expected: FieldKind,
        /// Short description of the actual value.
        found: String,
    },
}

impl Shape {
    /// Start declaring a shape.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    /// The shape's name, used in failure messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Declare a required field.
    #[must_use]
    pub fn field(mut self, name: &'static str, kind: FieldKind) -> Self {
        self.fields.push(Field {
            name,
            kind,
            required: true,
        });
        self
    }

    /// Declare an optional field: absent and null are fine, but a present
    /// value must still match the kind.
    #[must_use]
    pub fn optional(mut self, name: &'static str, kind: FieldKind) -> Self {
        self.fields.push(Field {
            name,
            kind,
            required: false,
        });
        self
    }

    /// Check `value` against this shape.
    ///
    /// Extra fields the shape does not declare are accepted.
    ///
    /// # Errors
    ///
    /// Returns the first mismatch found: not an object, a missing required
    /// field, or a field of the wrong kind.
    pub fn check(&self, value: &Value) -> Result<(), ShapeError> {
        let Some(object) = value.as_object() else {
            return Err(ShapeError::NotAnObject {
                shape: self.name,
                found: kind_of(value),
            });
        };

        for field in &self.fields {
            match object.get(field.name) {
                None | Some(Value::Null) => {
                    if field.required {
                        return Err(ShapeError::MissingField {
                            shape: self.name,
                            field: field.name,
                        });
                    }
                }
                Some(actual) => {
                    if !field.kind.matches(actual) {
                        return Err(ShapeError::WrongKind {
                            shape: self.name,
                            field: field.name,
                            expected: field.kind,
                            found: kind_of(actual),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

/// Assert that `value` conforms to `shape`, aborting the test on mismatch.
///
/// This is the hard check the probes use: a shape mismatch is fatal to the
/// test case, never a soft warning.
///
/// # Panics
///
/// Panics with the mismatch description if the check fails.
#[track_caller]
pub fn assert_conforms(value: &Value, shape: &Shape) {
    if let Err(e) = shape.check(value) {
        panic!("structural assertion failed: {e}");
    }
}

/// Short human description of a JSON value's kind, for error messages.
fn kind_of(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(s) => format!("string \"{}\"", s.chars().take(30).collect::<String>()),
        Value::Array(a) => format!("array of {}", a.len()),
        Value::Object(_) => "object".to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample_shape() -> Shape {
        Shape::new("sample")
            .field("id", FieldKind::Uuid)
            .field("label", FieldKind::String)
            .field("count", FieldKind::Integer)
            .optional("deleted_at", FieldKind::DateTime)
    }

    #[test]
    fn test_accepts_all_required_fields_plus_extras() {
        let value = json!({
            "id": "a2f5c9d0-1b2c-4d3e-8f90-123456789abc",
            "label": "winter sale",
            "count": 3,
            "irrelevant_extra": { "nested": true }
        });
        assert!(sample_shape().check(&value).is_ok());
    }

    #[test]
    fn test_rejects_missing_required_field() {
        let value = json!({
            "id": "a2f5c9d0-1b2c-4d3e-8f90-123456789abc",
            "count": 3
        });
        let err = sample_shape().check(&value).unwrap_err();
        assert!(matches!(
            err,
            ShapeError::MissingField { field: "label", .. }
        ));
    }

    #[test]
    fn test_null_counts_as_missing_for_required() {
        let value = json!({
            "id": "a2f5c9d0-1b2c-4d3e-8f90-123456789abc",
            "label": null,
            "count": 3
        });
        assert!(matches!(
            sample_shape().check(&value).unwrap_err(),
            ShapeError::MissingField { field: "label", .. }
        ));
    }

    #[test]
    fn test_optional_field_absent_or_null_is_fine() {
        let absent = json!({
            "id": "a2f5c9d0-1b2c-4d3e-8f90-123456789abc",
            "label": "x",
            "count": 0
        });
        assert!(sample_shape().check(&absent).is_ok());

        let null = json!({
            "id": "a2f5c9d0-1b2c-4d3e-8f90-123456789abc",
            "label": "x",
            "count": 0,
            "deleted_at": null
        });
        assert!(sample_shape().check(&null).is_ok());
    }

    #[test]
    fn test_optional_field_with_wrong_kind_rejects() {
        let value = json!({
            "id": "a2f5c9d0-1b2c-4d3e-8f90-123456789abc",
            "label": "x",
            "count": 0,
            "deleted_at": "not a timestamp"
        });
        assert!(matches!(
            sample_shape().check(&value).unwrap_err(),
            ShapeError::WrongKind {
                field: "deleted_at",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_wrong_kind() {
        let value = json!({
            "id": "not-a-uuid",
            "label": "x",
            "count": 1
        });
        assert!(matches!(
            sample_shape().check(&value).unwrap_err(),
            ShapeError::WrongKind { field: "id", .. }
        ));
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(matches!(
            sample_shape().check(&json!([1, 2, 3])).unwrap_err(),
            ShapeError::NotAnObject { .. }
        ));
    }

    #[test]
    fn test_decimal_and_datetime_kinds() {
        assert!(FieldKind::Decimal.matches(&json!("19.99")));
        assert!(!FieldKind::Decimal.matches(&json!("nineteen")));
        assert!(FieldKind::DateTime.matches(&json!("2026-08-01T12:00:00Z")));
        assert!(!FieldKind::DateTime.matches(&json!(1_725_000_000)));
    }

    #[test]
    #[should_panic(expected = "structural assertion failed")]
    fn test_assert_conforms_aborts_on_mismatch() {
        assert_conforms(&json!({}), &sample_shape());
    }
}
