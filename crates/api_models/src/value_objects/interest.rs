use common_utils::{
    consts,
    errors::{CustomResult, InvalidValueObject, ValueObjectKind},
    ext_traits::RawInputExt,
    types::RawInput,
    wire::{ToWire, WireMap, WireMapBuilder},
};

use super::invalid;

/// Monthly interest percentage charged on overdue payments.
#[derive(Clone, Debug, PartialEq)]
pub struct Interest {
    value: f64,
}

impl Interest {
    pub fn from_map(raw: &RawInput) -> CustomResult<Self, InvalidValueObject> {
        if !raw.has_value("value") {
            return Err(invalid(ValueObjectKind::Interest, "Interest value is required"));
        }

        let value = raw.optional_float("value").ok_or_else(|| {
            invalid(
                ValueObjectKind::Interest,
                "Interest value must be a finite number",
            )
        })?;

        if value < 0.0 {
            return Err(invalid(
                ValueObjectKind::Interest,
                "Interest value cannot be negative",
            ));
        }

        if value > consts::MAX_PERCENTAGE {
            return Err(invalid(
                ValueObjectKind::Interest,
                "Interest value cannot exceed 100%",
            ));
        }

        Ok(Self { value })
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl ToWire for Interest {
    fn to_wire(&self) -> WireMap {
        WireMapBuilder::new()
            .field("value", Some(&self.value))
            .build()
    }
}
