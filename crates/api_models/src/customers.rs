use std::str::FromStr;

use common_utils::{
    errors::{CustomResult, InvalidValueObject},
    ext_traits::RawInputExt,
    pii::{self, Document, Email, Phone, PostalCode},
    types::RawInput,
    wire::{render, FieldDescriptor, ToWire, WireMap, WireMapBuilder},
};
use error_stack::{report, Report};

use crate::{
    errors::{InvalidCustomerData, InvalidRequestData},
    utils::{self, ValueObjectResultExt},
};

const POSTAL_CODE: FieldDescriptor<PostalCode> =
    FieldDescriptor::new("postalCode", render::formatted::<PostalCode>);

/// Optional customer details shared by the create and update requests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomerDetails {
    pub email: Option<Email>,
    pub phone: Option<Phone>,
    pub mobile_phone: Option<Phone>,
    pub address: Option<String>,
    pub address_number: Option<String>,
    pub complement: Option<String>,
    /// Neighborhood. Read from `neighborhood` when `province` is absent.
    pub province: Option<String>,
    pub postal_code: Option<PostalCode>,
    pub external_reference: Option<String>,
    pub notification_disabled: Option<bool>,
    /// Comma separated list of extra notification addresses.
    pub additional_emails: Option<String>,
    pub municipal_inscription: Option<String>,
    pub state_inscription: Option<String>,
    pub observations: Option<String>,
    pub group_name: Option<String>,
    pub company: Option<String>,
    pub foreign_customer: Option<bool>,
}

impl CustomerDetails {
    fn from_map(raw: &RawInput) -> CustomResult<Self, InvalidCustomerData> {
        Ok(Self {
            email: optional_value_object(raw, "email")?,
            phone: optional_value_object(raw, "phone")?,
            mobile_phone: optional_value_object(raw, "mobilePhone")?,
            address: raw.optional_string("address"),
            address_number: raw.optional_string("addressNumber"),
            complement: raw.optional_string("complement"),
            province: raw
                .optional_string("province")
                .or_else(|| raw.optional_string("neighborhood")),
            postal_code: optional_value_object(raw, "postalCode")?,
            external_reference: raw.optional_string("externalReference"),
            notification_disabled: raw.optional_boolean("notificationDisabled"),
            additional_emails: raw.optional_string("additionalEmails"),
            municipal_inscription: raw.optional_string("municipalInscription"),
            state_inscription: raw.optional_string("stateInscription"),
            observations: raw.optional_string("observations"),
            group_name: raw.optional_string("groupName"),
            company: raw.optional_string("company"),
            foreign_customer: raw.optional_boolean("foreignCustomer"),
        })
    }

    fn write(&self, builder: WireMapBuilder) -> WireMapBuilder {
        builder
            .field("email", self.email.as_ref())
            .field("phone", self.phone.as_ref())
            .field("mobilePhone", self.mobile_phone.as_ref())
            .field("address", self.address.as_deref())
            .field("addressNumber", self.address_number.as_deref())
            .field("complement", self.complement.as_deref())
            .field("province", self.province.as_deref())
            .described(&POSTAL_CODE, self.postal_code.as_ref())
            .field("externalReference", self.external_reference.as_deref())
            .field("notificationDisabled", self.notification_disabled.as_ref())
            .field("additionalEmails", self.additional_emails.as_deref())
            .field("municipalInscription", self.municipal_inscription.as_deref())
            .field("stateInscription", self.state_inscription.as_deref())
            .field("observations", self.observations.as_deref())
            .field("groupName", self.group_name.as_deref())
            .field("company", self.company.as_deref())
            .field("foreignCustomer", self.foreign_customer.as_ref())
    }
}

fn optional_value_object<T>(
    raw: &RawInput,
    key: &'static str,
) -> CustomResult<Option<T>, InvalidCustomerData>
where
    T: FromStr<Err = Report<InvalidValueObject>>,
{
    raw.optional_string(key)
        .map(|value| value.parse::<T>().into_invalid_format(key))
        .transpose()
}

fn parse_document(digits: &str) -> CustomResult<Document, InvalidCustomerData> {
    digits.parse::<Document>().map_err(|error| {
        let message = error.current_context().message.clone();
        error.change_context(InvalidCustomerData::invalid_format(
            "cpfCnpj",
            Some(message),
        ))
    })
}

/// Input of `POST customers`.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomerCreateRequest {
    pub name: String,
    /// CPF for individuals, CNPJ for companies.
    pub cpf_cnpj: Document,
    pub details: CustomerDetails,
}

impl CustomerCreateRequest {
    pub fn from_map(raw: &RawInput) -> CustomResult<Self, InvalidCustomerData> {
        utils::log_rejection("customer_create", Self::validate(raw))
    }

    fn validate(raw: &RawInput) -> CustomResult<Self, InvalidCustomerData> {
        let name = raw
            .optional_string("name")
            .ok_or_else(|| report!(InvalidCustomerData::missing_field("name")))?;
        let cpf_cnpj = raw
            .optional_digits("cpfCnpj")
            .ok_or_else(|| report!(InvalidCustomerData::missing_field("cpfCnpj")))?;

        Ok(Self {
            name,
            cpf_cnpj: parse_document(&cpf_cnpj)?,
            details: CustomerDetails::from_map(raw)?,
        })
    }
}

impl ToWire for CustomerCreateRequest {
    fn to_wire(&self) -> WireMap {
        let builder = WireMapBuilder::new()
            .field("name", Some(self.name.as_str()))
            .field("cpfCnpj", Some(&self.cpf_cnpj));
        self.details.write(builder).build()
    }
}

/// Input of `PUT customers/{id}`. Only the fields given are sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomerUpdateRequest {
    pub name: Option<String>,
    pub cpf_cnpj: Option<Document>,
    pub details: CustomerDetails,
}

impl CustomerUpdateRequest {
    pub fn from_map(raw: &RawInput) -> CustomResult<Self, InvalidCustomerData> {
        utils::log_rejection("customer_update", Self::validate(raw))
    }

    fn validate(raw: &RawInput) -> CustomResult<Self, InvalidCustomerData> {
        Ok(Self {
            name: raw.optional_string("name"),
            cpf_cnpj: raw
                .optional_digits("cpfCnpj")
                .map(|digits| parse_document(&digits))
                .transpose()?,
            details: CustomerDetails::from_map(raw)?,
        })
    }
}

impl ToWire for CustomerUpdateRequest {
    fn to_wire(&self) -> WireMap {
        let builder = WireMapBuilder::new()
            .field("name", self.name.as_deref())
            .field("cpfCnpj", self.cpf_cnpj.as_ref());
        self.details.write(builder).build()
    }
}

/// Filters of `GET customers`. Invalid filters are dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomerListRequest {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub name: Option<String>,
    pub email: Option<Email>,
    pub cpf_cnpj: Option<Document>,
    pub group_name: Option<String>,
    pub external_reference: Option<String>,
}

impl CustomerListRequest {
    pub fn from_map(raw: &RawInput) -> Self {
        Self {
            limit: utils::limit_filter(raw),
            offset: utils::offset_filter(raw),
            name: utils::string_filter(raw, "name"),
            email: utils::value_object_filter(raw, "email", pii::parse_value),
            cpf_cnpj: utils::value_object_filter(raw, "cpfCnpj", pii::parse_value),
            group_name: utils::string_filter(raw, "groupName"),
            external_reference: utils::string_filter(raw, "externalReference"),
        }
    }
}

impl ToWire for CustomerListRequest {
    fn to_wire(&self) -> WireMap {
        WireMapBuilder::new()
            .field("limit", self.limit.as_ref())
            .field("offset", self.offset.as_ref())
            .field("name", self.name.as_deref())
            .field("email", self.email.as_ref())
            .field("cpfCnpj", self.cpf_cnpj.as_ref())
            .field("groupName", self.group_name.as_deref())
            .field("externalReference", self.external_reference.as_deref())
            .build()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use common_utils::pii::SimpleValueObject;
    use serde_json::{json, Value};
    use test_case::test_case;

    use super::*;
    use crate::errors::ErrorCategory;

    fn raw(value: Value) -> RawInput {
        value.as_object().cloned().unwrap()
    }

    fn customer() -> RawInput {
        raw(json!({
            "name": " Maria Silva ",
            "cpfCnpj": "199.003.930-82",
            "email": "Maria@Example.com",
            "mobilePhone": "(11) 99999-8888",
            "postalCode": "01310100",
            "neighborhood": "Bela Vista",
            "notificationDisabled": "false",
        }))
    }

    #[test]
    fn create_serializes_canonical_values() {
        let request = CustomerCreateRequest::from_map(&customer()).unwrap();

        assert_eq!(request.name, "Maria Silva");
        assert_eq!(request.cpf_cnpj.value(), "19900393082");
        assert_eq!(
            Value::Object(request.to_wire()),
            json!({
                "name": "Maria Silva",
                "cpfCnpj": "19900393082",
                "email": "maria@example.com",
                "mobilePhone": "11999998888",
                "province": "Bela Vista",
                "postalCode": "01310-100",
                "notificationDisabled": false,
            })
        );
    }

    #[test]
    fn province_takes_precedence_over_neighborhood() {
        let mut input = customer();
        input.insert("province".into(), json!("Centro"));

        let request = CustomerCreateRequest::from_map(&input).unwrap();
        assert_eq!(request.details.province.as_deref(), Some("Centro"));
    }

    #[test_case("name", json!(null) ; "null name")]
    #[test_case("name", json!("   ") ; "blank name")]
    #[test_case("cpfCnpj", json!("") ; "empty document")]
    fn create_requires(field: &str, value: Value) {
        let mut input = customer();
        input.insert(field.into(), value);

        let error = CustomerCreateRequest::from_map(&input).unwrap_err();
        assert_eq!(
            error.current_context(),
            &InvalidCustomerData::missing_field(field)
        );
    }

    #[test]
    fn invalid_document_is_a_format_error() {
        let mut input = customer();
        input.insert("cpfCnpj".into(), json!("111.111.111-11"));

        let error = CustomerCreateRequest::from_map(&input).unwrap_err();
        assert_eq!(error.current_context().category(), ErrorCategory::InvalidFormat);
        assert_eq!(error.current_context().to_string(), "Invalid CPF: 11111111111");
    }

    #[test_case("email", json!("maria@"), "Invalid format for 'email': Invalid email address: maria@" ; "email")]
    #[test_case("phone", json!("123"), "Invalid format for 'phone': Phone must contain 10 or 11 digits" ; "phone")]
    #[test_case("mobilePhone", json!("9"), "Invalid format for 'mobilePhone': Phone must contain 10 or 11 digits" ; "mobile phone")]
    #[test_case("postalCode", json!("0131"), "Invalid format for 'postalCode': Postal code must contain exactly 8 digits" ; "postal code")]
    fn invalid_value_objects(field: &str, value: Value, expected: &str) {
        let mut input = customer();
        input.insert(field.into(), value);

        let error = CustomerCreateRequest::from_map(&input).unwrap_err();
        assert_eq!(error.current_context().field(), Some(field));
        assert_eq!(error.current_context().to_string(), expected);
    }

    #[test]
    fn update_only_sends_given_fields() {
        let request =
            CustomerUpdateRequest::from_map(&raw(json!({ "email": "new@example.com" }))).unwrap();

        assert_eq!(
            Value::Object(request.to_wire()),
            json!({ "email": "new@example.com" })
        );
        assert!(CustomerUpdateRequest::from_map(&raw(json!({})))
            .unwrap()
            .to_wire()
            .is_empty());
    }

    #[test]
    fn update_validates_present_fields() {
        let error =
            CustomerUpdateRequest::from_map(&raw(json!({ "cpfCnpj": "123" }))).unwrap_err();
        assert_eq!(
            error.current_context().to_string(),
            "CPF or CNPJ must contain 11 or 14 digits"
        );
    }

    #[test]
    fn list_drops_invalid_filters() {
        let request = CustomerListRequest::from_map(&raw(json!({
            "limit": 500,
            "offset": -2,
            "name": "  ",
            "email": "nope",
            "cpfCnpj": "85.312.108/0001-72",
            "groupName": "VIP",
        })));

        assert_eq!(
            Value::Object(request.to_wire()),
            json!({ "limit": 100, "cpfCnpj": "85312108000172", "groupName": "VIP" })
        );
    }
}
