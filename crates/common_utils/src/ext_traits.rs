//!
//! This module holds traits for extending functionalities for existing datatypes
//! & inbuilt datatypes.
//!

use serde_json::Value;

use crate::{sanitize, types::RawInput};

///
/// Typed, sanitized reads from an untyped input map.
///
/// A key that is absent, `null` or sanitizes to nothing reads as `None`.
///
pub trait RawInputExt {
    /// Raw value stored under `key`, skipping `null`.
    fn optional_value(&self, key: &str) -> Option<&Value>;

    /// Whether `key` holds a non-null value.
    fn has_value(&self, key: &str) -> bool {
        self.optional_value(key).is_some()
    }

    /// Trimmed string, see [`sanitize::sanitize_string`].
    fn optional_string(&self, key: &str) -> Option<String> {
        self.optional_value(key).and_then(sanitize::sanitize_string)
    }

    /// Trimmed lowercase string, see [`sanitize::sanitize_lowercase`].
    fn optional_lowercase(&self, key: &str) -> Option<String> {
        self.optional_value(key).and_then(sanitize::sanitize_lowercase)
    }

    /// Digits only, see [`sanitize::only_digits`].
    fn optional_digits(&self, key: &str) -> Option<String> {
        self.optional_value(key).and_then(sanitize::only_digits)
    }

    /// Integer, see [`sanitize::sanitize_integer`].
    fn optional_integer(&self, key: &str) -> Option<i64> {
        self.optional_value(key).and_then(sanitize::sanitize_integer)
    }

    /// Finite float, see [`sanitize::sanitize_float`].
    fn optional_float(&self, key: &str) -> Option<f64> {
        self.optional_value(key).and_then(sanitize::sanitize_float)
    }

    /// Boolean, see [`sanitize::sanitize_boolean`].
    fn optional_boolean(&self, key: &str) -> Option<bool> {
        self.optional_value(key).and_then(sanitize::sanitize_boolean)
    }

    /// Nested map, if the value under `key` is an object.
    fn optional_map(&self, key: &str) -> Option<&RawInput> {
        self.optional_value(key).and_then(Value::as_object)
    }

    /// Nested list, if the value under `key` is an array.
    fn optional_list(&self, key: &str) -> Option<&Vec<Value>> {
        self.optional_value(key).and_then(Value::as_array)
    }

    /// First key of `keys` which holds no value.
    fn first_missing_key<'k>(&self, keys: &[&'k str]) -> Option<&'k str> {
        keys.iter().copied().find(|key| !self.has_value(key))
    }
}

impl RawInputExt for RawInput {
    fn optional_value(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|value| !value.is_null())
    }
}
