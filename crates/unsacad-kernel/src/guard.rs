//! Stateless predicates for common validation checks.

use serde_json::Value;

/// Guard predicates used by value-object factories and validation code.
pub struct Guard;

impl Guard {
    /// Returns true if the string is empty or whitespace-only.
    #[must_use]
    pub fn is_blank(value: &str) -> bool {
        value.trim().is_empty()
    }

    /// Returns true if `value` is shorter than `min_length` (in chars).
    #[must_use]
    pub fn is_short(value: &str, min_length: usize) -> bool {
        value.chars().count() < min_length
    }

    /// Returns true if `value` is longer than `max_length` (in chars).
    #[must_use]
    pub fn is_long(value: &str, max_length: usize) -> bool {
        value.chars().count() > max_length
    }

    /// Returns true if `value` is outside the inclusive range `[min, max]`.
    #[must_use]
    pub fn is_out_of_range(value: i64, min: i64, max: i64) -> bool {
        value < min || value > max
    }

    /// Returns true if a JSON value is "empty".
    ///
    /// Empty means: `null`, a blank string, an empty array, or an object
    /// whose every field value is itself empty. Numbers and booleans are
    /// never empty (`0` and `false` are values).
    #[must_use]
    pub fn is_empty_json(value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::String(s) => Self::is_blank(s),
            Value::Array(items) => items.is_empty(),
            Value::Object(fields) => {
                fields.is_empty() || fields.values().all(Self::is_empty_json)
            }
            Value::Number(_) | Value::Bool(_) => false,
        }
    }
}
