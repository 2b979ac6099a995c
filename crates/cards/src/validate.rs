use std::{fmt, ops::Deref, str::FromStr};

use common_utils::{
    errors::{InvalidValueObject, ValueObjectKind},
    sanitize,
};
use error_stack::{report, Report};
use masking::{PeekInterface, Secret, Strategy, WithType, WithoutType};
#[cfg(feature = "logs")]
use router_env::logger;
use time::Date;

/// Shortest card number accepted.
pub const CARD_NUMBER_MIN_LENGTH: usize = 13;

/// Longest card number accepted.
pub const CARD_NUMBER_MAX_LENGTH: usize = 19;

pub(crate) fn invalid_card(message: impl Into<String>) -> Report<InvalidValueObject> {
    report!(InvalidValueObject::new(ValueObjectKind::CreditCard, message))
}

/// Card number
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CardNumber(Secret<String, CardNumberStrategy>);

impl CardNumber {
    /// First six digits, identifying the issuer.
    pub fn get_card_isin(&self) -> String {
        self.0.peek().chars().take(6).collect::<String>()
    }

    /// This method returns the last 4 characters of the card number.
    pub fn get_last4(&self) -> String {
        let number = self.0.peek();
        number
            .get(number.len().saturating_sub(4)..)
            .unwrap_or_default()
            .to_owned()
    }
}

impl FromStr for CardNumber {
    type Err = Report<InvalidValueObject>;

    /// Strips everything but digits, then checks the length and the Luhn checksum.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = sanitize::digits_of(s).unwrap_or_default();

        if (CARD_NUMBER_MIN_LENGTH..=CARD_NUMBER_MAX_LENGTH).contains(&digits.len())
            && luhn::valid(&digits)
        {
            Ok(Self(Secret::new(digits)))
        } else {
            Err(invalid_card("Invalid credit card number"))
        }
    }
}

impl TryFrom<String> for CardNumber {
    type Error = Report<InvalidValueObject>;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl Deref for CardNumber {
    type Target = Secret<String, CardNumberStrategy>;

    fn deref(&self) -> &Secret<String, CardNumberStrategy> {
        &self.0
    }
}

/// Shows the issuer digits and masks the rest.
pub enum CardNumberStrategy {}

impl<T> Strategy<T> for CardNumberStrategy
where
    T: AsRef<str>,
{
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val_str: &str = val.as_ref();

        if val_str.len() < CARD_NUMBER_MIN_LENGTH || val_str.len() > CARD_NUMBER_MAX_LENGTH {
            return WithType::fmt(val, f);
        }

        if let Some(value) = val_str.get(..6) {
            write!(f, "{}{}", value, "*".repeat(val_str.len() - 6))
        } else {
            #[cfg(feature = "logs")]
            logger::error!("Invalid card number length");
            WithType::fmt(val, f)
        }
    }
}

/// Card security code (CVV), 3 or 4 digits.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CardSecurityCode(Secret<String, WithoutType>);

impl FromStr for CardSecurityCode {
    type Err = Report<InvalidValueObject>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let csc = s.trim();

        if matches!(csc.len(), 3 | 4) && csc.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(Secret::new(csc.to_owned())))
        } else {
            Err(invalid_card("CVV must be 3 or 4 digits"))
        }
    }
}

impl PeekInterface<String> for CardSecurityCode {
    fn peek(&self) -> &String {
        self.0.peek()
    }
}

/// Expiration month as two digits, `01` to `12`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CardExpirationMonth(String);

impl CardExpirationMonth {
    /// Left pads a single digit month, e.g. `3` becomes `03`.
    pub fn new(digits: &str) -> Result<Self, Report<InvalidValueObject>> {
        let month = format!("{digits:0>2}");

        match month.parse::<u8>() {
            Ok(1..=12) if month.len() == 2 => Ok(Self(month)),
            _ => Err(invalid_card("Expiration month must be between 01 and 12")),
        }
    }

    /// `01` to `12`.
    pub fn two_digits(&self) -> &str {
        &self.0
    }

    fn number(&self) -> u8 {
        self.0.parse().unwrap_or_default()
    }
}

/// Expiration year as four digits.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CardExpirationYear(String);

impl CardExpirationYear {
    /// Only the shape is checked here, see [`CardExpiration::new`] for the calendar check.
    pub fn new(digits: &str) -> Result<Self, Report<InvalidValueObject>> {
        if digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(digits.to_owned()))
        } else {
            Err(invalid_card("Expiration year must contain 4 digits"))
        }
    }

    /// e.g. `2030`.
    pub fn four_digits(&self) -> &str {
        &self.0
    }

    /// e.g. `30`.
    pub fn two_digits(&self) -> &str {
        self.0.get(2..4).unwrap_or_default()
    }

    fn number(&self) -> i32 {
        self.0.parse().unwrap_or_default()
    }
}

/// Month and year printed on the card.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CardExpiration {
    pub month: CardExpirationMonth,
    pub year: CardExpirationYear,
}

impl CardExpiration {
    /// Validates the month and year, and rejects a card expired as of `today`. A card stays valid
    /// through its whole expiration month.
    pub fn new(
        month: &str,
        year: &str,
        today: Date,
    ) -> Result<Self, Report<InvalidValueObject>> {
        let month = CardExpirationMonth::new(month)?;
        let year = CardExpirationYear::new(year)?;

        if year.number() < today.year() {
            return Err(invalid_card("Expiration year cannot be in the past"));
        }

        if year.number() == today.year() && month.number() < u8::from(today.month()) {
            return Err(invalid_card(
                "Expiration month cannot be in the past for the current year",
            ));
        }

        Ok(Self { month, year })
    }

    pub fn get_month(&self) -> &CardExpirationMonth {
        &self.month
    }

    pub fn get_year(&self) -> &CardExpirationYear {
        &self.year
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use test_case::test_case;
    use time::macros::date;

    use super::*;

    const TODAY: Date = date!(2025 - 06 - 15);

    fn message(error: &Report<InvalidValueObject>) -> &str {
        &error.current_context().message
    }

    #[test]
    fn valid_card_number() {
        let card_number = CardNumber::from_str("371449635398431").unwrap();
        assert_eq!(card_number.peek(), "371449635398431");
        assert_eq!(card_number.get_card_isin(), "371449");
        assert_eq!(card_number.get_last4(), "8431");
    }

    #[test]
    fn card_number_no_whitespace() {
        let card_number = CardNumber::from_str("4111 1111-1111 1111").unwrap();
        assert_eq!(format!("{:?}", *card_number), "411111**********");
    }

    #[test_case("371446431" ; "too short")]
    #[test_case("4111111111111112" ; "bad checksum")]
    #[test_case("41111111111111111111" ; "too long")]
    #[test_case("" ; "empty")]
    fn invalid_card_number(number: &str) {
        let error = CardNumber::from_str(number).unwrap_err();
        assert_eq!(message(&error), "Invalid credit card number");
        assert_eq!(error.current_context().kind, ValueObjectKind::CreditCard);
    }

    #[test]
    fn test_invalid_card_number_masking() {
        let secret: Secret<String, CardNumberStrategy> = Secret::new("1234567890".to_string());
        assert_eq!("*** alloc::string::String ***", format!("{secret:?}"));
    }

    #[test_case("123" ; "three digits")]
    #[test_case("1234" ; "four digits")]
    fn valid_security_code(cvv: &str) {
        let csc = CardSecurityCode::from_str(cvv).unwrap();
        assert_eq!(csc.peek(), cvv);
        assert_eq!(format!("{csc:?}"), "CardSecurityCode(*** ***)");
    }

    #[test_case("12" ; "too short")]
    #[test_case("12345" ; "too long")]
    #[test_case("12a" ; "not a digit")]
    fn invalid_security_code(cvv: &str) {
        let error = CardSecurityCode::from_str(cvv).unwrap_err();
        assert_eq!(message(&error), "CVV must be 3 or 4 digits");
    }

    #[test_case("1", "01" ; "padded")]
    #[test_case("09", "09" ; "two digits")]
    #[test_case("12", "12" ; "december")]
    fn expiration_month(input: &str, expected: &str) {
        assert_eq!(CardExpirationMonth::new(input).unwrap().two_digits(), expected);
    }

    #[test_case("0" ; "zero")]
    #[test_case("13" ; "thirteen")]
    #[test_case("" ; "empty")]
    #[test_case("012" ; "three digits")]
    fn invalid_expiration_month(input: &str) {
        let error = CardExpirationMonth::new(input).unwrap_err();
        assert_eq!(message(&error), "Expiration month must be between 01 and 12");
    }

    #[test]
    fn expiration_year_digits() {
        let year = CardExpirationYear::new("2030").unwrap();
        assert_eq!(year.four_digits(), "2030");
        assert_eq!(year.two_digits(), "30");
        assert!(CardExpirationYear::new("30").is_err());
    }

    #[test]
    fn expiration_against_today() {
        assert!(CardExpiration::new("06", "2025", TODAY).is_ok());
        assert!(CardExpiration::new("01", "2026", TODAY).is_ok());

        let error = CardExpiration::new("12", "2024", TODAY).unwrap_err();
        assert_eq!(message(&error), "Expiration year cannot be in the past");

        let error = CardExpiration::new("05", "2025", TODAY).unwrap_err();
        assert_eq!(
            message(&error),
            "Expiration month cannot be in the past for the current year"
        );
    }

    #[test]
    fn month_is_checked_before_year() {
        let error = CardExpiration::new("13", "2020", TODAY).unwrap_err();
        assert_eq!(message(&error), "Expiration month must be between 01 and 12");
    }

    #[test]
    fn card_is_valid_through_its_expiration_month() {
        let expiration = CardExpiration::new("06", "2025", TODAY).unwrap();

        assert!(CardExpiration::new("06", "2025", date!(2025 - 06 - 30)).is_ok());
        assert!(CardExpiration::new("06", "2025", date!(2025 - 07 - 01)).is_err());
        assert_eq!(expiration.get_month().two_digits(), "06");
        assert_eq!(expiration.get_year().four_digits(), "2025");
    }
}
