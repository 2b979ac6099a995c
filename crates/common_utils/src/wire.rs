//! Explicit serialization of validated data into the flat map sent over the wire.
//!
//! Every request type spells out its own fields through a [`WireMapBuilder`]. A field either
//! follows the default rule (its [`WireValue`] under its own name) or is routed through a
//! [`FieldDescriptor`], which pairs the wire key with a render function. Absent fields never
//! reach the map, so it never carries `null` placeholders.

use serde_json::Value;
use time::Date;

use crate::{date_time, pii::Formatted};

/// Flat (or shallowly nested) map handed to the transport as a body or query string.
pub type WireMap = serde_json::Map<String, Value>;

/// Default wire rendering of a value.
pub trait WireValue {
    /// Render `self` as a JSON value.
    fn wire_value(&self) -> Value;
}

/// Types which serialize to a whole [`WireMap`].
pub trait ToWire {
    /// Serialize every present field.
    fn to_wire(&self) -> WireMap;
}

impl WireValue for String {
    fn wire_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl WireValue for str {
    fn wire_value(&self) -> Value {
        Value::String(self.to_owned())
    }
}

impl WireValue for bool {
    fn wire_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl WireValue for i64 {
    fn wire_value(&self) -> Value {
        Value::from(*self)
    }
}

impl WireValue for f64 {
    fn wire_value(&self) -> Value {
        Value::from(*self)
    }
}

impl<T: WireValue> WireValue for Vec<T> {
    fn wire_value(&self) -> Value {
        Value::Array(self.iter().map(WireValue::wire_value).collect())
    }
}

impl WireValue for WireMap {
    fn wire_value(&self) -> Value {
        Value::Object(self.clone())
    }
}

/// Per-field override: the key to write and the function rendering the value.
pub struct FieldDescriptor<T: ?Sized> {
    key: &'static str,
    render: fn(&T) -> Value,
}

impl<T: ?Sized> FieldDescriptor<T> {
    /// Pair a wire key with a render function.
    pub const fn new(key: &'static str, render: fn(&T) -> Value) -> Self {
        Self { key, render }
    }

    /// Key written to the wire map.
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Render a value through this descriptor.
    pub fn render(&self, value: &T) -> Value {
        (self.render)(value)
    }
}

impl<T: ?Sized> std::fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// Render functions usable in [`FieldDescriptor`] tables.
pub mod render {
    use super::*;

    /// `YYYY-MM-DD`.
    pub fn date(value: &Date) -> Value {
        Value::String(date_time::format_date(*value))
    }

    /// Punctuated rendering of a value object, e.g. `12345-678` for a postal code.
    pub fn formatted<T: Formatted>(value: &T) -> Value {
        Value::String(value.formatted())
    }
}

/// Builder collecting present fields into a [`WireMap`].
#[derive(Debug, Default)]
pub struct WireMapBuilder {
    map: WireMap,
}

impl WireMapBuilder {
    /// Start an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default rule: write `value` under `key` when present.
    pub fn field<T: WireValue + ?Sized>(self, key: &'static str, value: Option<&T>) -> Self {
        match value {
            Some(value) => self.insert(key, value.wire_value()),
            None => self,
        }
    }

    /// Override rule: write `value` through `descriptor` when present.
    pub fn described<T: ?Sized>(self, descriptor: &FieldDescriptor<T>, value: Option<&T>) -> Self {
        match value {
            Some(value) => self.insert(descriptor.key(), descriptor.render(value)),
            None => self,
        }
    }

    fn insert(mut self, key: &'static str, value: Value) -> Self {
        if !value.is_null() {
            self.map.insert(key.to_owned(), value);
        }
        self
    }

    /// Finish the map.
    pub fn build(self) -> WireMap {
        self.map
    }
}
