//! Card data sent with a tokenization request or a direct card charge.

use common_utils::{
    date_time,
    errors::{CustomResult, InvalidValueObject, ValueObjectKind},
    ext_traits::RawInputExt,
    types::RawInput,
    wire::{ToWire, WireMap, WireMapBuilder},
};
use error_stack::report;
use masking::PeekInterface;
#[cfg(feature = "logs")]
use router_env::logger;
use time::Date;

use crate::validate::{invalid_card, CardExpiration, CardNumber, CardSecurityCode};

const REQUIRED_FIELDS: [&str; 5] = [
    "holderName",
    "number",
    "expirationMonth",
    "expirationYear",
    "cvv",
];

/// A validated credit card.
#[derive(Clone, Debug)]
pub struct CreditCard {
    holder_name: String,
    number: CardNumber,
    expiration: CardExpiration,
    cvv: CardSecurityCode,
}

impl CreditCard {
    /// Builds a card from raw input, checking the expiration against the current date.
    pub fn from_map(raw: &RawInput) -> CustomResult<Self, InvalidValueObject> {
        Self::from_map_at(raw, date_time::today())
    }

    /// Same as [`Self::from_map`] with an explicit reference date.
    pub fn from_map_at(raw: &RawInput, today: Date) -> CustomResult<Self, InvalidValueObject> {
        if let Some(field) = raw.first_missing_key(&REQUIRED_FIELDS) {
            return Err(report!(InvalidValueObject::missing_field(
                ValueObjectKind::CreditCard,
                field
            )));
        }

        let holder_name = raw.optional_string("holderName").unwrap_or_default();
        let number = raw.optional_digits("number").unwrap_or_default();
        let expiration_month = raw.optional_digits("expirationMonth").unwrap_or_default();
        let expiration_year = raw.optional_digits("expirationYear").unwrap_or_default();
        let cvv = raw.optional_digits("cvv").unwrap_or_default();

        if holder_name.is_empty() {
            return Err(invalid_card("Holder name cannot be empty"));
        }

        let expiration = CardExpiration::new(&expiration_month, &expiration_year, today)?;
        let number = number.parse::<CardNumber>()?;
        let cvv = cvv.parse::<CardSecurityCode>()?;

        #[cfg(feature = "logs")]
        logger::debug!(card_isin = %number.get_card_isin(), "credit card accepted");

        Ok(Self {
            holder_name,
            number,
            expiration,
            cvv,
        })
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn number(&self) -> &CardNumber {
        &self.number
    }

    pub fn expiration(&self) -> &CardExpiration {
        &self.expiration
    }

    pub fn cvv(&self) -> &CardSecurityCode {
        &self.cvv
    }
}

impl ToWire for CreditCard {
    fn to_wire(&self) -> WireMap {
        WireMapBuilder::new()
            .field("holderName", Some(self.holder_name.as_str()))
            .field("number", Some(self.number.peek().as_str()))
            .field("expirationMonth", Some(self.expiration.month.two_digits()))
            .field("expirationYear", Some(self.expiration.year.four_digits()))
            .field("cvv", Some(self.cvv.peek().as_str()))
            .build()
    }
}

impl PartialEq for CreditCard {
    fn eq(&self, other: &Self) -> bool {
        self.to_wire() == other.to_wire()
    }
}
