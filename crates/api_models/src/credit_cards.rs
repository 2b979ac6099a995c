use std::net::IpAddr;

use cards::{CreditCard, CreditCardHolderInfo};
use common_utils::{
    errors::CustomResult,
    ext_traits::RawInputExt,
    types::RawInput,
    validation,
    wire::{ToWire, WireMap, WireMapBuilder},
};
use error_stack::{report, ResultExt};

use crate::{
    errors::{InvalidCreditCardData, InvalidRequestData},
    utils::{self, ValueObjectResultExt},
};

const CREDIT_CARD_PREFIX: &str = "Invalid credit card data: ";

/// Input of `POST creditCard/tokenizeCreditCard`.
#[derive(Clone, Debug, PartialEq)]
pub struct CardTokenizeRequest {
    /// Customer the token is issued for.
    pub customer: String,
    pub credit_card: CreditCard,
    pub holder_info: CreditCardHolderInfo,
    /// Address of the payer's device, required by the anti-fraud analysis.
    pub remote_ip: IpAddr,
}

impl CardTokenizeRequest {
    pub fn from_map(raw: &RawInput) -> CustomResult<Self, InvalidCreditCardData> {
        utils::log_rejection("card_tokenize", Self::validate(raw))
    }

    fn validate(raw: &RawInput) -> CustomResult<Self, InvalidCreditCardData> {
        let customer = raw
            .optional_string("customer")
            .ok_or_else(|| report!(InvalidCreditCardData::missing_field("customer")))?;
        let credit_card = utils::nested_map(raw, "creditCard")?
            .filter(|card| !card.is_empty())
            .ok_or_else(|| report!(InvalidCreditCardData::missing_field("creditCard")))?;
        let holder_info = utils::nested_map(raw, "creditCardHolderInfo")?
            .filter(|holder| !holder.is_empty())
            .ok_or_else(|| {
                report!(InvalidCreditCardData::missing_field("creditCardHolderInfo"))
            })?;
        let remote_ip = raw
            .optional_string("remoteIp")
            .ok_or_else(|| report!(InvalidCreditCardData::missing_field("remoteIp")))?;

        let remote_ip = validation::validate_ip_address(&remote_ip).change_context(
            InvalidCreditCardData::rule("Remote IP must be a valid IPv4 or IPv6 address"),
        )?;

        Ok(Self {
            customer,
            credit_card: CreditCard::from_map(credit_card)
                .into_prefixed_rule(CREDIT_CARD_PREFIX)?,
            holder_info: CreditCardHolderInfo::from_map(holder_info)
                .into_prefixed_rule(CREDIT_CARD_PREFIX)?,
            remote_ip,
        })
    }
}

impl ToWire for CardTokenizeRequest {
    fn to_wire(&self) -> WireMap {
        WireMapBuilder::new()
            .field("customer", Some(self.customer.as_str()))
            .field("creditCard", Some(&self.credit_card.to_wire()))
            .field("creditCardHolderInfo", Some(&self.holder_info.to_wire()))
            .field("remoteIp", Some(self.remote_ip.to_string().as_str()))
            .build()
    }
}
