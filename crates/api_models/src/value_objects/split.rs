use common_utils::{
    consts,
    errors::{CustomResult, InvalidValueObject, ValueObjectKind},
    ext_traits::RawInputExt,
    types::{self, RawInput},
    wire::{ToWire, WireMap, WireMapBuilder, WireValue},
};
use error_stack::{report, ResultExt};
use serde_json::Value;

use super::invalid;

/// One recipient of a split payment.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitEntry {
    wallet_id: String,
    fixed_value: Option<f64>,
    percentage_value: Option<f64>,
    total_fixed_value: Option<f64>,
    external_reference: Option<String>,
    description: Option<String>,
}

impl SplitEntry {
    pub fn from_map(raw: &RawInput) -> CustomResult<Self, InvalidValueObject> {
        if !raw.has_value("walletId") {
            return Err(invalid(ValueObjectKind::SplitEntry, "walletId is required"));
        }

        let wallet_id = raw.optional_string("walletId").ok_or_else(|| {
            invalid(
                ValueObjectKind::SplitEntry,
                "walletId must be a non-empty string",
            )
        })?;

        let fixed_value = raw.optional_float("fixedValue");
        let percentage_value = raw.optional_float("percentageValue");
        let total_fixed_value = raw.optional_float("totalFixedValue");

        if fixed_value.is_none() && percentage_value.is_none() && total_fixed_value.is_none() {
            return Err(invalid(
                ValueObjectKind::SplitEntry,
                "At least one value must be provided",
            ));
        }

        if percentage_value
            .is_some_and(|percentage| !(0.0..=consts::MAX_PERCENTAGE).contains(&percentage))
        {
            return Err(invalid(
                ValueObjectKind::SplitEntry,
                "Percentage value must be between 0 and 100",
            ));
        }

        Ok(Self {
            wallet_id,
            fixed_value,
            percentage_value,
            total_fixed_value,
            external_reference: raw.optional_string("externalReference"),
            description: raw.optional_string("description"),
        })
    }

    pub fn wallet_id(&self) -> &str {
        &self.wallet_id
    }

    pub fn fixed_value(&self) -> Option<f64> {
        self.fixed_value
    }

    pub fn percentage_value(&self) -> Option<f64> {
        self.percentage_value
    }

    pub fn total_fixed_value(&self) -> Option<f64> {
        self.total_fixed_value
    }

    pub fn external_reference(&self) -> Option<&str> {
        self.external_reference.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl ToWire for SplitEntry {
    fn to_wire(&self) -> WireMap {
        WireMapBuilder::new()
            .field("walletId", Some(self.wallet_id.as_str()))
            .field("fixedValue", self.fixed_value.as_ref())
            .field("percentageValue", self.percentage_value.as_ref())
            .field("totalFixedValue", self.total_fixed_value.as_ref())
            .field("externalReference", self.external_reference.as_deref())
            .field("description", self.description.as_deref())
            .build()
    }
}

/// Ordered, non-empty list of split recipients.
///
/// The totals are only checked against a payment value by [`Split::validate_for`], since the
/// value is not known when the split is built.
#[derive(Clone, Debug, PartialEq)]
pub struct Split {
    entries: Vec<SplitEntry>,
}

impl Split {
    /// Builds every entry from a list of maps, failing on the first invalid one.
    pub fn from_list(raw: &[Value]) -> CustomResult<Self, InvalidValueObject> {
        let entries = raw
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let entry = entry.as_object().ok_or_else(|| {
                    report!(InvalidValueObject::new(
                        ValueObjectKind::SplitEntry,
                        "Split entry must be an object",
                    ))
                })?;
                SplitEntry::from_map(entry).attach_printable_lazy(|| format!("split entry {index}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(entries)
    }

    pub fn new(entries: Vec<SplitEntry>) -> CustomResult<Self, InvalidValueObject> {
        if entries.is_empty() {
            return Err(invalid(
                ValueObjectKind::Split,
                "Split entries must not be empty",
            ));
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[SplitEntry] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn total_percentage(&self) -> f64 {
        self.entries
            .iter()
            .filter_map(SplitEntry::percentage_value)
            .sum()
    }

    /// Sum of `totalFixedValue`, falling back to `fixedValue`, over every entry.
    pub fn total_fixed_value(&self) -> f64 {
        self.entries
            .iter()
            .filter_map(|entry| entry.total_fixed_value.or(entry.fixed_value))
            .sum()
    }

    /// Checks the totals against the value of the payment being split. Both sides are compared
    /// rounded to two decimals.
    pub fn validate_for(&self, payment_value: f64) -> CustomResult<(), InvalidValueObject> {
        let total_percentage = types::round_to_cents(self.total_percentage());
        if total_percentage > consts::MAX_PERCENTAGE {
            return Err(invalid(
                ValueObjectKind::Split,
                format!("Split percentages sum to {total_percentage}%, which exceeds 100%"),
            ));
        }

        let total_fixed = types::round_to_cents(self.total_fixed_value());
        let payment_value = types::round_to_cents(payment_value);
        if total_fixed > payment_value {
            return Err(invalid(
                ValueObjectKind::Split,
                format!(
                    "Split fixed values sum to R$ {total_fixed}, which exceeds payment value of R$ {payment_value}"
                ),
            ));
        }

        Ok(())
    }
}

impl WireValue for Split {
    fn wire_value(&self) -> Value {
        Value::Array(
            self.entries
                .iter()
                .map(|entry| Value::Object(entry.to_wire()))
                .collect(),
        )
    }
}
