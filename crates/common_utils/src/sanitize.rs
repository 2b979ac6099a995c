//! Total normalization of loosely typed input.
//!
//! Every function accepts any [`serde_json::Value`] and either returns a normalized value or
//! `None`. Nothing in here fails.

use serde_json::Value;

/// Trim a string or stringify a scalar. Blank results are absent.
pub fn sanitize_string(input: &Value) -> Option<String> {
    let raw = match input {
        Value::String(value) => value.trim().to_owned(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };

    (!raw.is_empty()).then_some(raw)
}

/// Trim and lowercase. Used before matching against alias tables.
pub fn sanitize_lowercase(input: &Value) -> Option<String> {
    sanitize_string(input).map(|value| value.to_lowercase())
}

/// Lowercase a plain string the same way [`sanitize_lowercase`] does.
pub fn lowercase_str(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Keep ASCII digits only. An input without digits is absent.
pub fn only_digits(input: &Value) -> Option<String> {
    sanitize_string(input).and_then(|value| digits_of(&value))
}

/// Keep ASCII digits of a plain string. An input without digits is absent.
pub fn digits_of(input: &str) -> Option<String> {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    (!digits.is_empty()).then_some(digits)
}

/// Coerce to an integer. Integral floats and numeric strings are accepted.
pub fn sanitize_integer(input: &Value) -> Option<i64> {
    match input {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(integral_float)),
        Value::String(value) => {
            let value = value.trim();
            value
                .parse::<i64>()
                .ok()
                .or_else(|| parse_decimal(value).and_then(integral_float))
        }
        Value::Bool(flag) => Some(i64::from(*flag)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Coerce to a finite float. A decimal comma is accepted for strings such as `"10,50"`.
pub fn sanitize_float(input: &Value) -> Option<f64> {
    let number = match input {
        Value::Number(number) => number.as_f64(),
        Value::String(value) => parse_decimal(value.trim()),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    };

    number.filter(|value| value.is_finite())
}

/// Coerce to a boolean from booleans, `0`/`1` and common English and Portuguese words.
pub fn sanitize_boolean(input: &Value) -> Option<bool> {
    match input {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => match number.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        Value::String(value) => match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" | "sim" | "s" => Some(true),
            "false" | "0" | "no" | "off" | "não" | "nao" | "n" => Some(false),
            _ => None,
        },
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn parse_decimal(value: &str) -> Option<f64> {
    if value.contains(',') && !value.contains('.') {
        value.replace(',', ".").parse::<f64>().ok()
    } else {
        value.parse::<f64>().ok()
    }
}

fn integral_float(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    format!("{value:.0}").parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use proptest::prelude::*;
    use serde_json::json;
    use test_case::test_case;

    use super::*;

    #[test_case(json!("  Maria  "), Some("Maria") ; "trims")]
    #[test_case(json!("   "), None ; "blank")]
    #[test_case(json!(42), Some("42") ; "number")]
    #[test_case(json!(true), Some("true") ; "boolean")]
    #[test_case(json!(null), None ; "null")]
    #[test_case(json!(["a"]), None ; "array")]
    fn sanitizes_strings(input: Value, expected: Option<&str>) {
        assert_eq!(sanitize_string(&input).as_deref(), expected);
    }

    #[test_case(json!("199.003.930-82"), Some("19900393082") ; "punctuated cpf")]
    #[test_case(json!("(11) 99999-9999"), Some("11999999999") ; "phone")]
    #[test_case(json!(12345678), Some("12345678") ; "number")]
    #[test_case(json!("abc"), None ; "no digits")]
    #[test_case(json!(""), None ; "empty")]
    fn extracts_digits(input: Value, expected: Option<&str>) {
        assert_eq!(only_digits(&input).as_deref(), expected);
    }

    #[test_case(json!(12), Some(12) ; "integer")]
    #[test_case(json!(12.0), Some(12) ; "integral float")]
    #[test_case(json!(12.5), None ; "fractional float")]
    #[test_case(json!(" 30 "), Some(30) ; "numeric string")]
    #[test_case(json!("-5"), Some(-5) ; "negative string")]
    #[test_case(json!("3.0"), Some(3) ; "integral string")]
    #[test_case(json!("ten"), None ; "word")]
    #[test_case(json!(true), Some(1) ; "boolean")]
    fn coerces_integers(input: Value, expected: Option<i64>) {
        assert_eq!(sanitize_integer(&input), expected);
    }

    #[test_case(json!(10.5), Some(10.5) ; "float")]
    #[test_case(json!("10.50"), Some(10.5) ; "dot string")]
    #[test_case(json!("10,50"), Some(10.5) ; "comma string")]
    #[test_case(json!("NaN"), None ; "not a number")]
    #[test_case(json!("inf"), None ; "infinite")]
    #[test_case(json!({}), None ; "object")]
    fn coerces_floats(input: Value, expected: Option<f64>) {
        assert_eq!(sanitize_float(&input), expected);
    }

    #[test_case(json!(true), Some(true) ; "boolean")]
    #[test_case(json!(0), Some(false) ; "zero")]
    #[test_case(json!(2), None ; "two")]
    #[test_case(json!(" Yes "), Some(true) ; "yes")]
    #[test_case(json!("sim"), Some(true) ; "sim")]
    #[test_case(json!("Não"), Some(false) ; "nao")]
    #[test_case(json!("off"), Some(false) ; "off")]
    #[test_case(json!("maybe"), None ; "unknown word")]
    fn coerces_booleans(input: Value, expected: Option<bool>) {
        assert_eq!(sanitize_boolean(&input), expected);
    }

    proptest! {
        #[test]
        fn string_sanitizers_are_idempotent(input in ".*") {
            let once = sanitize_string(&json!(input));
            let twice = once.as_ref().and_then(|value| sanitize_string(&json!(value)));
            prop_assert_eq!(once, twice);

            let once = sanitize_lowercase(&json!(input));
            let twice = once.as_ref().and_then(|value| sanitize_lowercase(&json!(value)));
            prop_assert_eq!(once, twice);

            let once = only_digits(&json!(input));
            let twice = once.as_ref().and_then(|value| only_digits(&json!(value)));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn numeric_sanitizers_are_idempotent(input in any::<i64>(), float in -1.0e12f64..1.0e12) {
            let once = sanitize_integer(&json!(input));
            prop_assert_eq!(once, once.and_then(|value| sanitize_integer(&json!(value))));

            let once = sanitize_float(&json!(float));
            prop_assert_eq!(once, once.and_then(|value| sanitize_float(&json!(value))));
        }

        #[test]
        fn boolean_sanitizer_is_idempotent(input in "(true|false|yes|no|sim|nao|1|0|on|off|x)") {
            let once = sanitize_boolean(&json!(input));
            prop_assert_eq!(once, once.and_then(|value| sanitize_boolean(&json!(value))));
        }
    }
}
