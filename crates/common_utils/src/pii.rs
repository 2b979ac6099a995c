//! Personal Identifiable Information protection.
//!
//! Simple value objects for the personal data a customer or card holder carries: taxpayer
//! documents (CPF and CNPJ), email, phone and postal code. Each one is only constructed through
//! a validating [`FromStr`] impl and keeps its canonical form; documents and phones mask
//! themselves in `Debug` output.

use std::{fmt, str::FromStr};

use error_stack::report;
use masking::{PeekInterface, Secret, Strategy, WithType};
#[cfg(feature = "logs")]
use router_env::logger;
use serde_json::Value;

use crate::{
    consts,
    errors::{CustomResult, InvalidValueObject, ValueObjectKind},
    sanitize, validation,
    wire::WireValue,
};

/// A string constant representing a redacted or masked value.
pub const REDACTED: &str = "Redacted";

/// Canonical form of a simple value object.
pub trait SimpleValueObject {
    /// Normalized value: digits only for documents, phones and postal codes, lowercase for
    /// emails.
    fn value(&self) -> &str;
}

/// Locale conventional, punctuated rendering.
pub trait Formatted {
    /// e.g. `000.000.000-00` for a CPF.
    fn formatted(&self) -> String;
}

/// Strategy for masking digit based identifiers, keeps the last two digits.
#[derive(Debug)]
pub enum DigitsStrategy {}

impl<T> Strategy<T> for DigitsStrategy
where
    T: AsRef<str>,
{
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val_str: &str = val.as_ref();

        match val_str.len().checked_sub(2).and_then(|start| val_str.get(start..)) {
            Some(tail) => write!(f, "{}{}", "*".repeat(val_str.len() - 2), tail),
            None => WithType::fmt(val, f),
        }
    }
}

/// Strategy for masking a phone number, keeps the last four digits.
#[derive(Debug)]
pub enum PhoneNumberStrategy {}

impl<T> Strategy<T> for PhoneNumberStrategy
where
    T: AsRef<str>,
{
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val_str: &str = val.as_ref();

        match val_str.len().checked_sub(4).and_then(|start| val_str.get(start..)) {
            // masks everything but the last 4 digits
            Some(tail) => write!(f, "{}{}", "*".repeat(val_str.len() - 4), tail),
            None => {
                #[cfg(feature = "logs")]
                logger::error!("Invalid phone number length");
                WithType::fmt(val, f)
            }
        }
    }
}

/// Strategy for Encryption
#[derive(Debug)]
pub enum EmailStrategy {}

impl<T> Strategy<T> for EmailStrategy
where
    T: AsRef<str>,
{
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val_str: &str = val.as_ref();
        match val_str.split_once('@') {
            Some((a, b)) => write!(f, "{}@{}", "*".repeat(a.len()), b),
            None => WithType::fmt(val, f),
        }
    }
}

macro_rules! impl_simple_value_object {
    ($name:ident) => {
        impl SimpleValueObject for $name {
            fn value(&self) -> &str {
                self.0.peek()
            }
        }

        impl WireValue for $name {
            fn wire_value(&self) -> Value {
                Value::String(self.value().to_owned())
            }
        }

        impl TryFrom<String> for $name {
            type Error = error_stack::Report<InvalidValueObject>;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::from_str(&value)
            }
        }
    };
}

/// Brazilian individual taxpayer registry number (CPF), 11 digits with two check digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cpf(Secret<String, DigitsStrategy>);

impl FromStr for Cpf {
    type Err = error_stack::Report<InvalidValueObject>;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let digits = sanitize::digits_of(raw).unwrap_or_default();
        if is_valid_cpf(&digits) {
            Ok(Self(Secret::new(digits)))
        } else {
            Err(report!(InvalidValueObject::new(
                ValueObjectKind::Cpf,
                format!("Invalid CPF: {digits}")
            )))
        }
    }
}

impl Formatted for Cpf {
    fn formatted(&self) -> String {
        let digits = self.value();
        format!(
            "{}.{}.{}-{}",
            digits.get(0..3).unwrap_or_default(),
            digits.get(3..6).unwrap_or_default(),
            digits.get(6..9).unwrap_or_default(),
            digits.get(9..11).unwrap_or_default(),
        )
    }
}

impl_simple_value_object!(Cpf);

/// Brazilian company registry number (CNPJ), 14 digits with two check digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cnpj(Secret<String, DigitsStrategy>);

impl FromStr for Cnpj {
    type Err = error_stack::Report<InvalidValueObject>;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let digits = sanitize::digits_of(raw).unwrap_or_default();
        if is_valid_cnpj(&digits) {
            Ok(Self(Secret::new(digits)))
        } else {
            Err(report!(InvalidValueObject::new(
                ValueObjectKind::Cnpj,
                format!("Invalid Cnpj: {digits}")
            )))
        }
    }
}

impl Formatted for Cnpj {
    fn formatted(&self) -> String {
        let digits = self.value();
        format!(
            "{}.{}.{}/{}-{}",
            digits.get(0..2).unwrap_or_default(),
            digits.get(2..5).unwrap_or_default(),
            digits.get(5..8).unwrap_or_default(),
            digits.get(8..12).unwrap_or_default(),
            digits.get(12..14).unwrap_or_default(),
        )
    }
}

impl_simple_value_object!(Cnpj);

/// A CPF or a CNPJ, chosen by the number of digits in the input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Document {
    /// 11 digits.
    Cpf(Cpf),
    /// 14 digits.
    Cnpj(Cnpj),
}

impl FromStr for Document {
    type Err = error_stack::Report<InvalidValueObject>;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let digits = sanitize::digits_of(raw).unwrap_or_default();
        match digits.len() {
            consts::CPF_LENGTH => digits.parse().map(Self::Cpf),
            consts::CNPJ_LENGTH => digits.parse().map(Self::Cnpj),
            _ => Err(report!(InvalidValueObject::new(
                ValueObjectKind::Document,
                "CPF or CNPJ must contain 11 or 14 digits"
            ))),
        }
    }
}

impl TryFrom<String> for Document {
    type Error = error_stack::Report<InvalidValueObject>;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl SimpleValueObject for Document {
    fn value(&self) -> &str {
        match self {
            Self::Cpf(cpf) => cpf.value(),
            Self::Cnpj(cnpj) => cnpj.value(),
        }
    }
}

impl Formatted for Document {
    fn formatted(&self) -> String {
        match self {
            Self::Cpf(cpf) => cpf.formatted(),
            Self::Cnpj(cnpj) => cnpj.formatted(),
        }
    }
}

impl WireValue for Document {
    fn wire_value(&self) -> Value {
        Value::String(self.value().to_owned())
    }
}

/// Email address, trimmed and lowercased.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Email(Secret<String, EmailStrategy>);

impl FromStr for Email {
    type Err = error_stack::Report<InvalidValueObject>;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let email = sanitize::lowercase_str(raw).unwrap_or_default();
        match validation::validate_email(&email) {
            Ok(()) => Ok(Self(Secret::new(email))),
            Err(error) => Err(error.change_context(InvalidValueObject::new(
                ValueObjectKind::Email,
                format!("Invalid email address: {email}"),
            ))),
        }
    }
}

impl_simple_value_object!(Email);

/// Landline (10 digits) or mobile (11 digits) phone number including the area code.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Phone(Secret<String, PhoneNumberStrategy>);

impl FromStr for Phone {
    type Err = error_stack::Report<InvalidValueObject>;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let digits = sanitize::digits_of(raw).unwrap_or_default();
        if matches!(digits.len(), 10 | 11) {
            Ok(Self(Secret::new(digits)))
        } else {
            Err(report!(InvalidValueObject::new(
                ValueObjectKind::Phone,
                "Phone must contain 10 or 11 digits"
            )))
        }
    }
}

impl Formatted for Phone {
    fn formatted(&self) -> String {
        let digits = self.value();
        let split_at = digits.len().saturating_sub(4);
        format!(
            "({}) {}-{}",
            digits.get(0..2).unwrap_or_default(),
            digits.get(2..split_at).unwrap_or_default(),
            digits.get(split_at..).unwrap_or_default(),
        )
    }
}

impl_simple_value_object!(Phone);

/// Brazilian postal code (CEP), exactly 8 digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PostalCode(Secret<String, WithoutMask>);

/// Postal codes are not masked.
#[derive(Debug)]
pub enum WithoutMask {}

impl<T> Strategy<T> for WithoutMask
where
    T: AsRef<str>,
{
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", val.as_ref())
    }
}

impl FromStr for PostalCode {
    type Err = error_stack::Report<InvalidValueObject>;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let digits = sanitize::digits_of(raw).unwrap_or_default();
        if digits.len() == consts::POSTAL_CODE_LENGTH {
            Ok(Self(Secret::new(digits)))
        } else {
            Err(report!(InvalidValueObject::new(
                ValueObjectKind::PostalCode,
                "Postal code must contain exactly 8 digits"
            )))
        }
    }
}

impl Formatted for PostalCode {
    fn formatted(&self) -> String {
        let digits = self.value();
        format!(
            "{}-{}",
            digits.get(0..5).unwrap_or_default(),
            digits.get(5..8).unwrap_or_default(),
        )
    }
}

impl_simple_value_object!(PostalCode);

/// Parse a simple value object out of an untyped input value.
pub fn parse_value<T>(value: &Value) -> CustomResult<T, InvalidValueObject>
where
    T: FromStr<Err = error_stack::Report<InvalidValueObject>>,
{
    sanitize::sanitize_string(value).unwrap_or_default().parse()
}

fn to_digits(digits: &str) -> Vec<u32> {
    digits.chars().filter_map(|digit| digit.to_digit(10)).collect()
}

fn all_equal(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair.first() == pair.last())
}

fn cpf_check_digit(body: &[u32]) -> u32 {
    let first_weight = u32::try_from(body.len() + 1).unwrap_or_default();
    let sum: u32 = body
        .iter()
        .zip((2..=first_weight).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();

    match (sum * 10) % 11 {
        10 => 0,
        rest => rest,
    }
}

fn is_valid_cpf(digits: &str) -> bool {
    let digits = to_digits(digits);
    if digits.len() != consts::CPF_LENGTH || all_equal(&digits) {
        return false;
    }

    let (Some(first_body), Some(second_body)) = (digits.get(..9), digits.get(..10)) else {
        return false;
    };

    digits.get(9) == Some(&cpf_check_digit(first_body))
        && digits.get(10) == Some(&cpf_check_digit(second_body))
}

const CNPJ_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

fn cnpj_check_digit(body: &[u32]) -> u32 {
    let weights = CNPJ_WEIGHTS
        .get(CNPJ_WEIGHTS.len().saturating_sub(body.len())..)
        .unwrap_or_default();
    let sum: u32 = body
        .iter()
        .zip(weights)
        .map(|(digit, weight)| digit * weight)
        .sum();

    match sum % 11 {
        rest if rest < 2 => 0,
        rest => 11 - rest,
    }
}

fn is_valid_cnpj(digits: &str) -> bool {
    let digits = to_digits(digits);
    if digits.len() != consts::CNPJ_LENGTH || all_equal(&digits) {
        return false;
    }

    let (Some(first_body), Some(second_body)) = (digits.get(..12), digits.get(..13)) else {
        return false;
    };

    digits.get(12) == Some(&cnpj_check_digit(first_body))
        && digits.get(13) == Some(&cnpj_check_digit(second_body))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use proptest::prelude::*;
    use test_case::test_case;

    use super::*;

    #[test]
    fn cpf_is_normalized_and_formatted() {
        let cpf: Cpf = "199.003.930-82".parse().unwrap();

        assert_eq!(cpf.value(), "19900393082");
        assert_eq!(cpf.formatted(), "199.003.930-82");
        assert_eq!(format!("{cpf:?}"), "Cpf(*********82)");
    }

    #[test_case("19900393082" ; "first")]
    #[test_case("96682822057" ; "second")]
    #[test_case("07462524040" ; "leading zero")]
    #[test_case("01478108096" ; "another leading zero")]
    #[test_case("898.870.660-95" ; "punctuated")]
    fn accepts_valid_cpfs(raw: &str) {
        assert!(raw.parse::<Cpf>().is_ok());
    }

    #[test_case("11111111111" ; "repeated digits")]
    #[test_case("19900393083" ; "wrong check digit")]
    #[test_case("1990039308" ; "too short")]
    #[test_case("" ; "empty")]
    fn rejects_invalid_cpfs(raw: &str) {
        let error = raw.parse::<Cpf>().unwrap_err();
        assert_eq!(error.current_context().kind, ValueObjectKind::Cpf);
    }

    #[test]
    fn cpf_error_names_the_digits() {
        let error = "111.111.111-11".parse::<Cpf>().unwrap_err();
        assert_eq!(error.current_context().message, "Invalid CPF: 11111111111");
    }

    #[test]
    fn cnpj_is_normalized_and_formatted() {
        let cnpj: Cnpj = "85.312.108/0001-72".parse().unwrap();

        assert_eq!(cnpj.value(), "85312108000172");
        assert_eq!(cnpj.formatted(), "85.312.108/0001-72");
        assert!("42240295000113".parse::<Cnpj>().is_ok());
        assert!("12345678000195".parse::<Cnpj>().is_ok());
    }

    #[test]
    fn cnpj_rejects_invalid_numbers() {
        let error = "11111111111111".parse::<Cnpj>().unwrap_err();
        assert_eq!(error.current_context().message, "Invalid Cnpj: 11111111111111");
        assert!("85312108000173".parse::<Cnpj>().is_err());
    }

    #[test]
    fn document_dispatches_on_length() {
        assert!(matches!(
            "199.003.930-82".parse::<Document>().unwrap(),
            Document::Cpf(_)
        ));
        assert!(matches!(
            "85.312.108/0001-72".parse::<Document>().unwrap(),
            Document::Cnpj(_)
        ));

        let error = "123456789012".parse::<Document>().unwrap_err();
        assert_eq!(error.current_context().kind, ValueObjectKind::Document);
        assert_eq!(
            error.current_context().message,
            "CPF or CNPJ must contain 11 or 14 digits"
        );
    }

    #[test]
    fn document_equality_is_variant_aware() {
        let cpf: Document = "19900393082".parse().unwrap();
        let same: Document = "199.003.930-82".parse().unwrap();
        let cnpj: Document = "85312108000172".parse().unwrap();

        assert_eq!(cpf, same);
        assert_ne!(cpf, cnpj);
    }

    #[test]
    fn email_is_lowercased_and_masked() {
        let email: Email = "  John.Doe@Example.COM ".parse().unwrap();

        assert_eq!(email.value(), "john.doe@example.com");
        assert_eq!(format!("{email:?}"), "Email(********@example.com)");
        assert!("not-an-email".parse::<Email>().is_err());
        assert!("".parse::<Email>().is_err());
    }

    #[test_case("11999999999", "(11) 99999-9999" ; "mobile")]
    #[test_case("(11) 3333-4444", "(11) 3333-4444" ; "landline")]
    fn phone_is_formatted(raw: &str, expected: &str) {
        let phone: Phone = raw.parse().unwrap();
        assert_eq!(phone.formatted(), expected);
    }

    #[test_case("119999" ; "too short")]
    #[test_case("119999999999" ; "too long")]
    fn phone_rejects_invalid_lengths(raw: &str) {
        let error = raw.parse::<Phone>().unwrap_err();
        assert_eq!(
            error.current_context().message,
            "Phone must contain 10 or 11 digits"
        );
    }

    #[test]
    fn postal_code_is_formatted() {
        let postal_code: PostalCode = "12345678".parse().unwrap();

        assert_eq!(postal_code.value(), "12345678");
        assert_eq!(postal_code.formatted(), "12345-678");
        assert_eq!(
            "1234-567".parse::<PostalCode>().unwrap_err().current_context().message,
            "Postal code must contain exactly 8 digits"
        );
    }

    #[test]
    fn parses_from_untyped_values() {
        let postal_code: PostalCode = parse_value(&serde_json::json!(12345678)).unwrap();
        assert_eq!(postal_code.value(), "12345678");

        let missing = parse_value::<Phone>(&Value::Null);
        assert!(missing.is_err());
    }

    proptest! {
        #[test]
        fn eleven_digits_go_through_cpf_validation(digits in "[0-9]{11}") {
            let document = digits.parse::<Document>();
            let cpf = digits.parse::<Cpf>();

            prop_assert_eq!(document.is_ok(), cpf.is_ok());
            if let Err(error) = document {
                prop_assert_eq!(error.current_context().kind, ValueObjectKind::Cpf);
            }
        }

        #[test]
        fn fourteen_digits_go_through_cnpj_validation(digits in "[0-9]{14}") {
            let document = digits.parse::<Document>();
            let cnpj = digits.parse::<Cnpj>();

            prop_assert_eq!(document.is_ok(), cnpj.is_ok());
            if let Err(error) = document {
                prop_assert_eq!(error.current_context().kind, ValueObjectKind::Cnpj);
            }
        }

        #[test]
        fn other_lengths_are_rejected(digits in "[0-9]{0,30}") {
            prop_assume!(digits.len() != 11 && digits.len() != 14);

            let error = digits.parse::<Document>().unwrap_err();
            prop_assert_eq!(error.current_context().kind, ValueObjectKind::Document);
        }
    }
}
