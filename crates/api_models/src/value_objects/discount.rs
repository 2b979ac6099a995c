use common_enums::{lenient_parse, DiscountType};
use common_utils::{
    consts,
    errors::{CustomResult, InvalidValueObject, ValueObjectKind},
    ext_traits::RawInputExt,
    types::RawInput,
    wire::{ToWire, WireMap, WireMapBuilder},
};

use super::invalid;

/// Discount granted for paying up to `due_date_limit_days` days before the due date.
#[derive(Clone, Debug, PartialEq)]
pub struct Discount {
    value: f64,
    due_date_limit_days: Option<i64>,
    discount_type: DiscountType,
}

impl Discount {
    pub fn from_map(raw: &RawInput) -> CustomResult<Self, InvalidValueObject> {
        if !raw.has_value("value") {
            return Err(invalid(ValueObjectKind::Discount, "Discount value is required"));
        }
        if !raw.has_value("dueDateLimitDays") {
            return Err(invalid(
                ValueObjectKind::Discount,
                "Discount dueDateLimitDays is required",
            ));
        }

        let value = raw
            .optional_float("value")
            .filter(|value| *value > 0.0)
            .ok_or_else(|| invalid(ValueObjectKind::Discount, "Value must be greater than 0."))?;

        let discount_type = match raw.optional_string("type") {
            None => DiscountType::default(),
            Some(discount_type) => lenient_parse(&discount_type)
                .ok_or_else(|| invalid(ValueObjectKind::Discount, "Invalid discount type"))?,
        };

        if discount_type == DiscountType::Percentage && value > consts::MAX_PERCENTAGE {
            return Err(invalid(
                ValueObjectKind::Discount,
                "Discount percentage cannot exceed 100%",
            ));
        }

        Ok(Self {
            value,
            due_date_limit_days: raw.optional_integer("dueDateLimitDays"),
            discount_type,
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn due_date_limit_days(&self) -> Option<i64> {
        self.due_date_limit_days
    }

    pub fn discount_type(&self) -> DiscountType {
        self.discount_type
    }

    /// Amount taken off a payment of `payment_value`.
    pub fn calculate_amount(&self, payment_value: f64) -> f64 {
        match self.discount_type {
            DiscountType::Fixed => self.value,
            DiscountType::Percentage => payment_value * self.value / 100.0,
        }
    }
}

impl ToWire for Discount {
    fn to_wire(&self) -> WireMap {
        WireMapBuilder::new()
            .field("value", Some(&self.value))
            .field("dueDateLimitDays", self.due_date_limit_days.as_ref())
            .field("type", Some(&self.discount_type))
            .build()
    }
}
