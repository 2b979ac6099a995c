#![allow(clippy::unwrap_used, clippy::expect_used)]

use api_models::{
    credit_cards::CardTokenizeRequest,
    customers::{CustomerCreateRequest, CustomerListRequest},
    errors::{ErrorCategory, InvalidRequestData},
    payments::{PaymentListConstraints, PaymentsCreateRequest, PaymentsUpdateRequest},
    value_objects::Split,
    webhooks::WebhookCreateRequest,
};
use common_enums::BillingType;
use common_utils::{date_time, pii::SimpleValueObject, types::RawInput, wire::ToWire};
use proptest::prelude::*;
use serde_json::{json, Value};

fn raw(value: Value) -> RawInput {
    value.as_object().cloned().expect("test input must be an object")
}

fn payment() -> RawInput {
    raw(json!({
        "customer": "cus_000005219613",
        "billingType": "boleto",
        "value": "129,90",
        "dueDate": "2030-05-10",
    }))
}

fn customer() -> RawInput {
    raw(json!({ "name": "João Pereira", "cpfCnpj": "123.456.789-09" }))
}

fn webhook() -> RawInput {
    raw(json!({
        "name": "Payments",
        "url": "https://erp.example.com/hooks",
        "email": "erp@example.com",
        "sendType": "NON_SEQUENTIALLY",
    }))
}

fn tokenize() -> RawInput {
    let next_year = date_time::today().year() + 1;
    raw(json!({
        "customer": "cus_000005219613",
        "creditCard": {
            "holderName": "João Pereira",
            "number": "5162306219378829",
            "expirationMonth": "12",
            "expirationYear": next_year,
            "cvv": "123",
        },
        "creditCardHolderInfo": {
            "name": "João Pereira",
            "email": "joao@example.com",
            "cpfCnpj": "12345678909",
            "postalCode": "89223005",
            "addressNumber": "277",
            "phone": "4738010919",
        },
        "remoteIp": "116.213.42.53",
    }))
}

#[test]
fn formatted_cpf_is_sent_as_digits() {
    let request = CustomerCreateRequest::from_map(&customer()).unwrap();

    assert_eq!(request.cpf_cnpj.value(), "12345678909");
    assert_eq!(request.to_wire().get("cpfCnpj"), Some(&json!("12345678909")));
}

#[test]
fn repeated_digit_cpf_is_an_invalid_format() {
    let mut input = customer();
    input.insert("cpfCnpj".into(), json!("11111111111"));

    let error = CustomerCreateRequest::from_map(&input).unwrap_err();
    let context = error.current_context();
    assert_eq!(context.category(), ErrorCategory::InvalidFormat);
    assert_eq!(context.field(), Some("cpfCnpj"));
    assert_eq!(context.to_string(), "Invalid CPF: 11111111111");
}

#[test]
fn percentage_discount_above_one_hundred_is_rejected() {
    let mut input = payment();
    input.insert(
        "discount".into(),
        json!({ "value": 150, "dueDateLimitDays": 0, "type": "PERCENTAGE" }),
    );

    let error = PaymentsCreateRequest::from_map(&input).unwrap_err();
    let context = error.current_context();
    assert_eq!(context.category(), ErrorCategory::InvalidFormat);
    assert_eq!(context.field(), Some("discount"));
    assert_eq!(
        context.to_string(),
        "Invalid format for 'discount': Discount percentage cannot exceed 100%"
    );
}

#[test]
fn negative_value_is_a_business_rule() {
    let mut input = payment();
    input.insert("value".into(), json!(-100));

    let error = PaymentsCreateRequest::from_map(&input).unwrap_err();
    assert_eq!(error.current_context().category(), ErrorCategory::BusinessRule);
    assert_eq!(error.current_context().to_string(), "Value must be greater than 0");
}

#[test]
fn list_limit_is_clamped() {
    let low = PaymentListConstraints::from_map(&raw(json!({ "limit": -5 }))).unwrap();
    let high = CustomerListRequest::from_map(&raw(json!({ "limit": "102" })));

    assert_eq!(low.limit, Some(1));
    assert_eq!(high.limit, Some(100));
    assert_eq!(high.to_wire().get("limit"), Some(&json!(100)));
}

#[test]
fn inverted_creation_range_is_rejected() {
    let input = raw(json!({
        "dateCreatedStart": "2024-03-01",
        "dateCreatedEnd": "2024-02-01",
    }));

    let error = PaymentListConstraints::from_map(&input).unwrap_err();
    assert_eq!(
        error.current_context().to_string(),
        r#"The "dateCreatedStart" must be before "dateCreatedEnd""#
    );
}

#[test]
fn update_keeps_billing_type_and_dates() {
    let mut input = payment();
    input.insert("billingType".into(), json!("cartão de crédito"));
    input.insert("dueDate".into(), json!("10/05/2030"));

    let request = PaymentsUpdateRequest::from_map(&input).unwrap();
    let wire = request.to_wire();

    assert_eq!(request.billing_type, BillingType::CreditCard);
    assert_eq!(wire.get("dueDate"), Some(&json!("2030-05-10")));
    assert!(!wire.contains_key("customer"));
}

type Strict = fn(&RawInput) -> Option<(ErrorCategory, Option<String>)>;

fn outcome<E: InvalidRequestData>(
    result: common_utils::errors::CustomResult<impl Sized, E>,
) -> Option<(ErrorCategory, Option<String>)> {
    result.err().map(|error| {
        let context = error.current_context();
        (context.category(), context.field().map(str::to_owned))
    })
}

fn strict_requests() -> [(&'static str, RawInput, Strict, &'static [&'static str]); 5] {
    [
        (
            "customer create",
            customer(),
            |raw| outcome(CustomerCreateRequest::from_map(raw)),
            &["name", "cpfCnpj"],
        ),
        (
            "payment create",
            payment(),
            |raw| outcome(PaymentsCreateRequest::from_map(raw)),
            &["customer", "billingType", "value", "dueDate"],
        ),
        (
            "payment update",
            payment(),
            |raw| outcome(PaymentsUpdateRequest::from_map(raw)),
            &["billingType", "value", "dueDate"],
        ),
        (
            "card tokenize",
            tokenize(),
            |raw| outcome(CardTokenizeRequest::from_map(raw)),
            &["customer", "creditCard", "creditCardHolderInfo", "remoteIp"],
        ),
        (
            "webhook create",
            webhook(),
            |raw| outcome(WebhookCreateRequest::from_map(raw)),
            &["name", "url", "email", "sendType"],
        ),
    ]
}

#[test]
fn strict_requests_name_the_missing_field() {
    for (name, input, build, required) in strict_requests() {
        assert_eq!(build(&input), None, "{name} should accept its base input");

        for field in required.iter().copied() {
            for absent in [None, Some(Value::Null)] {
                let mut input = input.clone();
                match absent {
                    None => input.remove(field),
                    Some(value) => input.insert(field.into(), value),
                };

                assert_eq!(
                    build(&input),
                    Some((ErrorCategory::MissingField, Some(field.to_owned()))),
                    "{name} without {field}"
                );
            }
        }
    }
}

fn garbage() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[ a-zA-Z0-9%/:-]{0,12}".prop_map(Value::from),
        Just(json!([])),
        Just(json!({})),
    ]
}

const LIST_KEYS: [&str; 12] = [
    "limit",
    "offset",
    "name",
    "email",
    "cpfCnpj",
    "groupName",
    "billingType",
    "status",
    "invoiceStatus",
    "paymentDate",
    "anticipated",
    "customer",
];

/// Values no filter accepts, whatever its type.
fn unusable() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(json!("   ")),
        Just(json!([])),
        Just(json!({ "nested": 1 })),
    ]
}

fn customer_filters() -> RawInput {
    raw(json!({
        "limit": 10,
        "offset": 0,
        "name": "Maria",
        "email": "maria@example.com",
        "cpfCnpj": "123.456.789-09",
        "groupName": "vip",
        "externalReference": "erp-1",
    }))
}

/// Input key, wire key and a value of the right JSON type the filter still rejects.
const CUSTOMER_FILTERS: [(&str, &str, &str); 7] = [
    ("limit", "limit", "many"),
    ("offset", "offset", "-1"),
    ("name", "name", "   "),
    ("email", "email", "maria@"),
    ("cpfCnpj", "cpfCnpj", "123"),
    ("groupName", "groupName", ""),
    ("externalReference", "externalReference", " "),
];

fn payment_filters() -> RawInput {
    raw(json!({
        "installment": "ins_1",
        "offset": 5,
        "limit": 10,
        "customer": "cus_1",
        "customerGroupName": "vip",
        "billingType": "pix",
        "status": "pending",
        "subscription": "sub_1",
        "externalReference": "erp-1",
        "paymentDate": "2024-01-10",
        "invoiceStatus": "scheduled",
        "anticipated": true,
        "anticipable": "no",
        "dateCreatedStart": "2024-01-01",
        "dateCreatedEnd": "2024-01-31",
        "paymentDateStart": "2024-02-01",
        "paymentDateEnd": "2024-02-28",
        "dueDateStart": "2024-03-01",
        "dueDateEnd": "2024-03-31",
    }))
}

const PAYMENT_FILTERS: [(&str, &str, &str); 19] = [
    ("installment", "installment", " "),
    ("offset", "offset", "-3"),
    ("limit", "limit", "ten"),
    ("customer", "customer", ""),
    ("customerGroupName", "customerGroupName", "  "),
    ("billingType", "billingType", "cheque"),
    ("status", "status", "lost"),
    ("subscription", "subscription", ""),
    ("externalReference", "externalReference", " "),
    ("paymentDate", "paymentDate", "yesterday"),
    ("invoiceStatus", "invoiceStatus", "unknown"),
    ("anticipated", "anticipated", "maybe"),
    ("anticipable", "anticipable", "perhaps"),
    ("dateCreatedStart", "dateCreated[ge]", "2024-13-01"),
    ("dateCreatedEnd", "dateCreated[le]", "31/02/2024"),
    ("paymentDateStart", "paymentDate[ge]", "soon"),
    ("paymentDateEnd", "paymentDate[le]", "2024/02"),
    ("dueDateStart", "dueDate[ge]", "march"),
    ("dueDateEnd", "dueDate[le]", "00/00/0000"),
];

proptest! {
    #[test]
    fn list_filters_never_fail(values in proptest::collection::vec(garbage(), LIST_KEYS.len())) {
        let input: RawInput = LIST_KEYS
            .iter()
            .zip(values)
            .map(|(key, value)| ((*key).to_owned(), value))
            .collect();

        let customers = CustomerListRequest::from_map(&input);
        let payments = PaymentListConstraints::from_map(&input).unwrap();

        for limit in [customers.limit, payments.limit].into_iter().flatten() {
            prop_assert!((1..=100).contains(&limit));
        }
        for offset in [customers.offset, payments.offset].into_iter().flatten() {
            prop_assert!(offset >= 0);
        }
        if let Some(document) = &customers.cpf_cnpj {
            prop_assert!(matches!(document.value().len(), 11 | 14));
            prop_assert!(document.value().chars().all(|c| c.is_ascii_digit()));
        }
        if let Some(email) = &customers.email {
            prop_assert!(email.value().contains('@'));
        }

        for wire in [customers.to_wire(), payments.to_wire()] {
            for (key, value) in &wire {
                prop_assert!(!value.is_null(), "{} is null", key);
                prop_assert!(!value.as_str().is_some_and(|text| text.trim().is_empty()), "{} is blank", key);
            }
        }
    }

    #[test]
    fn absent_filters_stay_absent(value in garbage()) {
        let input = raw(json!({ "unrelated": value }));

        prop_assert_eq!(CustomerListRequest::from_map(&input), CustomerListRequest::default());
        prop_assert_eq!(
            PaymentListConstraints::from_map(&input).unwrap(),
            PaymentListConstraints::default()
        );
        prop_assert!(CustomerListRequest::from_map(&input).to_wire().is_empty());
    }

    #[test]
    fn rejected_customer_filter_is_left_out(
        index in any::<prop::sample::Index>(),
        unusable in unusable(),
        typed in any::<bool>(),
    ) {
        let (key, wire_key, rejected) = *index.get(&CUSTOMER_FILTERS);
        let mut input = customer_filters();
        input.insert(key.to_owned(), if typed { json!(rejected) } else { unusable });

        let wire = CustomerListRequest::from_map(&input).to_wire();

        prop_assert!(!wire.contains_key(wire_key), "{} was sent", wire_key);
        prop_assert_eq!(wire.len(), CUSTOMER_FILTERS.len() - 1);
    }

    #[test]
    fn rejected_payment_filter_is_left_out(
        index in any::<prop::sample::Index>(),
        unusable in unusable(),
        typed in any::<bool>(),
    ) {
        let (key, wire_key, rejected) = *index.get(&PAYMENT_FILTERS);
        let mut input = payment_filters();
        input.insert(key.to_owned(), if typed { json!(rejected) } else { unusable });

        let wire = PaymentListConstraints::from_map(&input).unwrap().to_wire();

        prop_assert!(!wire.contains_key(wire_key), "{} was sent", wire_key);
        prop_assert_eq!(wire.len(), PAYMENT_FILTERS.len() - 1);
    }

    #[test]
    fn split_percentages_are_checked_against_the_total(
        percentages in proptest::collection::vec(0u8..=100, 1..6),
        fixed in proptest::collection::vec(0u16..=500, 0..4),
        payment_value in 1u16..=1000,
    ) {
        let entries: Vec<Value> = percentages
            .iter()
            .map(|percentage| json!({ "walletId": "w", "percentageValue": percentage }))
            .chain(fixed.iter().map(|value| json!({ "walletId": "w", "fixedValue": value })))
            .collect();
        let split = Split::from_list(&entries).unwrap();

        let total_percentage: u32 = percentages.iter().copied().map(u32::from).sum();
        let total_fixed: u32 = fixed.iter().copied().map(u32::from).sum();

        prop_assert_eq!(split.count(), entries.len());
        prop_assert_eq!(split.total_percentage(), f64::from(total_percentage));
        prop_assert_eq!(split.total_fixed_value(), f64::from(total_fixed));
        prop_assert_eq!(
            split.validate_for(f64::from(payment_value)).is_ok(),
            total_percentage <= 100 && total_fixed <= u32::from(payment_value)
        );
    }

    #[test]
    fn split_cents_are_compared_exactly(
        fixed_cents in proptest::collection::vec(0u32..=50_000, 1..6),
        hundredths in proptest::collection::vec(0u32..=10_000, 0..4),
        payment_cents in 1u32..=150_000,
    ) {
        let entries: Vec<Value> = fixed_cents
            .iter()
            .map(|cents| json!({ "walletId": "w", "fixedValue": f64::from(*cents) / 100.0 }))
            .chain(hundredths.iter().map(|hundredths| {
                json!({ "walletId": "w", "percentageValue": f64::from(*hundredths) / 100.0 })
            }))
            .collect();
        let split = Split::from_list(&entries).unwrap();

        let total_cents: u32 = fixed_cents.iter().sum();
        let total_hundredths: u32 = hundredths.iter().sum();

        prop_assert_eq!(
            split.validate_for(f64::from(payment_cents) / 100.0).is_ok(),
            total_hundredths <= 10_000 && total_cents <= payment_cents
        );
    }

    #[test]
    fn split_matching_the_payment_value_is_accepted(
        fixed_cents in proptest::collection::vec(1u32..=50_000, 1..6),
    ) {
        let entries: Vec<Value> = fixed_cents
            .iter()
            .map(|cents| json!({ "walletId": "w", "fixedValue": f64::from(*cents) / 100.0 }))
            .collect();
        let payment_value = f64::from(fixed_cents.iter().sum::<u32>()) / 100.0;

        prop_assert!(Split::from_list(&entries).unwrap().validate_for(payment_value).is_ok());
    }
}
