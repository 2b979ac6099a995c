use common_enums::{lenient_parse, FineType};
use common_utils::{
    consts,
    errors::{CustomResult, InvalidValueObject, ValueObjectKind},
    ext_traits::RawInputExt,
    types::RawInput,
    wire::{ToWire, WireMap, WireMapBuilder},
};

use super::invalid;

/// Fine charged once a payment is overdue.
#[derive(Clone, Debug, PartialEq)]
pub struct Fine {
    value: f64,
    fine_type: FineType,
}

impl Fine {
    pub fn from_map(raw: &RawInput) -> CustomResult<Self, InvalidValueObject> {
        if !raw.has_value("value") {
            return Err(invalid(ValueObjectKind::Fine, "Fine value is required"));
        }

        let value = raw
            .optional_float("value")
            .ok_or_else(|| invalid(ValueObjectKind::Fine, "Fine value must be a finite number"))?;

        if value < 0.0 {
            return Err(invalid(ValueObjectKind::Fine, "Fine value cannot be negative"));
        }

        let fine_type = match raw.optional_string("type") {
            None => FineType::default(),
            Some(fine_type) => lenient_parse(&fine_type)
                .ok_or_else(|| invalid(ValueObjectKind::Fine, "Invalid fine type"))?,
        };

        if fine_type == FineType::Percentage && value > consts::MAX_PERCENTAGE {
            return Err(invalid(
                ValueObjectKind::Fine,
                "Fine percentage cannot exceed 100%",
            ));
        }

        Ok(Self { value, fine_type })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn fine_type(&self) -> FineType {
        self.fine_type
    }
}

impl ToWire for Fine {
    fn to_wire(&self) -> WireMap {
        WireMapBuilder::new()
            .field("value", Some(&self.value))
            .field("type", Some(&self.fine_type))
            .build()
    }
}
