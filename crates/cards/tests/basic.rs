#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::str::FromStr;

use cards::{CardExpiration, CardNumber, CreditCard};
use common_utils::{date_time, errors::ValueObjectKind};
use proptest::prelude::*;
use serde_json::json;

fn check_digit(body: &str) -> u32 {
    let sum: u32 = body
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(index, digit)| {
            if index % 2 == 0 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();

    (10 - sum % 10) % 10
}

#[test]
fn test_card_expiration_is_checked_against_today() {
    let today = date_time::today();
    let next_year = (today.year() + 1).to_string();
    let last_year = (today.year() - 1).to_string();

    let card_exp = CardExpiration::new("1", &next_year, today).unwrap();
    assert_eq!(card_exp.get_month().two_digits(), "01");

    assert!(CardExpiration::new("12", &last_year, today).is_err());
}

#[test]
fn test_credit_card_from_map_uses_current_date() {
    let next_year = (date_time::today().year() + 1).to_string();
    let raw = json!({
        "holderName": "John Doe",
        "number": "4000000000000010",
        "expirationMonth": "12",
        "expirationYear": next_year,
        "cvv": "1234",
    });

    let card = CreditCard::from_map(raw.as_object().unwrap()).unwrap();
    assert_eq!(card.number().get_card_isin(), "400000");
}

proptest! {
    #[test]
    fn valid_checksums_are_accepted(body in "[1-9][0-9]{11,17}") {
        let number = format!("{body}{}", check_digit(&body));
        prop_assert!(CardNumber::from_str(&number).is_ok());
    }

    #[test]
    fn broken_checksums_are_rejected(body in "[1-9][0-9]{11,17}", offset in 1_u32..10) {
        let broken = (check_digit(&body) + offset) % 10;
        let number = format!("{body}{broken}");

        let error = CardNumber::from_str(&number).unwrap_err();
        prop_assert_eq!(error.current_context().kind, ValueObjectKind::CreditCard);
        prop_assert_eq!(error.current_context().message.as_str(), "Invalid credit card number");
    }

    #[test]
    fn out_of_range_lengths_are_rejected(number in "[0-9]{1,12}|[0-9]{20,24}") {
        prop_assert!(CardNumber::from_str(&number).is_err());
    }
}
