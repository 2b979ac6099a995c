//! Billing details of the card holder, required by the card network's anti-fraud checks.

use common_utils::{
    errors::{CustomResult, InvalidValueObject, ValueObjectKind},
    ext_traits::RawInputExt,
    pii::{Document, Email, Phone, PostalCode},
    types::RawInput,
    wire::{ToWire, WireMap, WireMapBuilder},
};
use error_stack::{report, Report, ResultExt};

const REQUIRED_FIELDS: [&str; 6] = [
    "name",
    "email",
    "cpfCnpj",
    "postalCode",
    "addressNumber",
    "phone",
];

fn invalid_holder(message: impl Into<String>) -> Report<InvalidValueObject> {
    report!(InvalidValueObject::new(
        ValueObjectKind::CreditCardHolderInfo,
        message
    ))
}

/// Re-raise a nested value object failure as a holder info failure, keeping its message.
fn nested<T>(result: Result<T, Report<InvalidValueObject>>) -> CustomResult<T, InvalidValueObject> {
    result.map_err(|error| {
        let message = error.current_context().message.clone();
        error.change_context(InvalidValueObject::new(
            ValueObjectKind::CreditCardHolderInfo,
            message,
        ))
    })
}

/// A validated card holder.
#[derive(Clone, Debug)]
pub struct CreditCardHolderInfo {
    name: String,
    email: Email,
    cpf_cnpj: Document,
    postal_code: PostalCode,
    address_number: String,
    phone: Phone,
    mobile_phone: Option<Phone>,
}

impl CreditCardHolderInfo {
    pub fn from_map(raw: &RawInput) -> CustomResult<Self, InvalidValueObject> {
        if let Some(field) = raw.first_missing_key(&REQUIRED_FIELDS) {
            return Err(report!(InvalidValueObject::missing_field(
                ValueObjectKind::CreditCardHolderInfo,
                field
            )));
        }

        let name = raw.optional_string("name").unwrap_or_default();
        let email = raw.optional_string("email").unwrap_or_default();
        let cpf_cnpj = raw.optional_digits("cpfCnpj").unwrap_or_default();
        let postal_code = raw.optional_digits("postalCode").unwrap_or_default();
        let address_number = raw.optional_string("addressNumber").unwrap_or_default();
        let phone = raw.optional_digits("phone").unwrap_or_default();
        let mobile_phone = raw.optional_digits("mobilePhone");

        if name.is_empty() {
            return Err(invalid_holder("Name cannot be empty"));
        }

        if address_number.is_empty() {
            return Err(invalid_holder("Address number cannot be empty"));
        }

        Ok(Self {
            name,
            email: nested(email.parse())?,
            cpf_cnpj: nested(cpf_cnpj.parse())?,
            postal_code: nested(postal_code.parse())?,
            address_number,
            phone: nested(phone.parse())?,
            mobile_phone: mobile_phone
                .map(|mobile_phone| nested(mobile_phone.parse()))
                .transpose()
                .attach_printable("mobilePhone")?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn cpf_cnpj(&self) -> &Document {
        &self.cpf_cnpj
    }

    pub fn postal_code(&self) -> &PostalCode {
        &self.postal_code
    }

    pub fn address_number(&self) -> &str {
        &self.address_number
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn mobile_phone(&self) -> Option<&Phone> {
        self.mobile_phone.as_ref()
    }
}

impl ToWire for CreditCardHolderInfo {
    fn to_wire(&self) -> WireMap {
        WireMapBuilder::new()
            .field("name", Some(self.name.as_str()))
            .field("email", Some(&self.email))
            .field("cpfCnpj", Some(&self.cpf_cnpj))
            .field("postalCode", Some(&self.postal_code))
            .field("addressNumber", Some(self.address_number.as_str()))
            .field("phone", Some(&self.phone))
            .field("mobilePhone", self.mobile_phone.as_ref())
            .build()
    }
}

impl PartialEq for CreditCardHolderInfo {
    fn eq(&self, other: &Self) -> bool {
        self.to_wire() == other.to_wire()
    }
}
