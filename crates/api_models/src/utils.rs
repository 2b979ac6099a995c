//! Helpers shared by the request models.

use common_enums::{lenient_parse, DomainEnum};
use common_utils::{
    consts,
    date_time,
    errors::{CustomResult, InvalidValueObject},
    ext_traits::RawInputExt,
    types::RawInput,
};
use error_stack::{report, Report};
#[cfg(feature = "logs")]
use router_env::{logger, Tag};
use serde_json::Value;
use time::Date;

use crate::errors::{InvalidDateRange, InvalidRequestData};

/// Translation of value object failures into request errors.
pub(crate) trait ValueObjectResultExt<T> {
    /// Rule violation carrying the value object's own message.
    fn into_rule<E: InvalidRequestData>(self) -> CustomResult<T, E>;

    /// Rule violation whose message is `{prefix}{value object message}`.
    fn into_prefixed_rule<E: InvalidRequestData>(self, prefix: &str) -> CustomResult<T, E>;

    /// Invalid format of `field`, detailed as `Invalid format for '{field}': {message}`.
    fn into_invalid_format<E: InvalidRequestData>(self, field: &str) -> CustomResult<T, E>;
}

impl<T> ValueObjectResultExt<T> for CustomResult<T, InvalidValueObject> {
    fn into_rule<E: InvalidRequestData>(self) -> CustomResult<T, E> {
        self.into_prefixed_rule("")
    }

    fn into_prefixed_rule<E: InvalidRequestData>(self, prefix: &str) -> CustomResult<T, E> {
        self.map_err(|error| {
            let message = format!("{prefix}{}", error.current_context().message);
            error.change_context(E::rule(message))
        })
    }

    fn into_invalid_format<E: InvalidRequestData>(self, field: &str) -> CustomResult<T, E> {
        self.map_err(|error| {
            let detail = format!(
                "Invalid format for '{field}': {}",
                error.current_context().message
            );
            error.change_context(E::invalid_format(field, Some(detail)))
        })
    }
}

/// Nested object under `key`. Anything but an object is a format error.
pub(crate) fn nested_map<'a, E: InvalidRequestData>(
    raw: &'a RawInput,
    key: &str,
) -> CustomResult<Option<&'a RawInput>, E> {
    match raw.optional_value(key) {
        None => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(report!(E::invalid_format(key, None))),
    }
}

/// Nested list under `key`. Anything but an array is a format error.
pub(crate) fn nested_list<'a, E: InvalidRequestData>(
    raw: &'a RawInput,
    key: &str,
) -> CustomResult<Option<&'a Vec<Value>>, E> {
    match raw.optional_value(key) {
        None => Ok(None),
        Some(Value::Array(list)) => Ok(Some(list)),
        Some(_) => Err(report!(E::invalid_format(key, None))),
    }
}

/// Hands the result of a strict request back after logging a rejection.
///
/// Only the category reaches the log, messages may carry personal data.
pub(crate) fn log_rejection<T, E: InvalidRequestData>(
    _request: &'static str,
    result: CustomResult<T, E>,
) -> CustomResult<T, E> {
    #[cfg(feature = "logs")]
    if let Err(error) = &result {
        let context = error.current_context();
        logger::debug!(
            tag = ?Tag::ValidationFailure,
            request = _request,
            category = %context.category(),
            field = context.field(),
            "request rejected"
        );
    }
    result
}

fn discard<T>(_key: &str) -> Option<T> {
    #[cfg(feature = "logs")]
    logger::debug!(tag = ?Tag::FilterDiscarded, filter = _key, "invalid filter dropped");
    None
}

/// Lenient read: the value under `key` if `read` accepts it, otherwise `None`. A present value
/// that `read` rejects is logged as discarded.
pub(crate) fn filter<T>(
    raw: &RawInput,
    key: &str,
    read: impl FnOnce(&RawInput, &str) -> Option<T>,
) -> Option<T> {
    if !raw.has_value(key) {
        return None;
    }
    read(raw, key).or_else(|| discard(key))
}

/// `limit` clamped into the accepted page size range. Whole numbers beyond `i64` saturate.
pub(crate) fn limit_filter(raw: &RawInput) -> Option<i64> {
    filter(raw, "limit", |raw, key| {
        raw.optional_integer(key).or_else(|| {
            raw.optional_float(key)
                .filter(|limit| limit.fract() == 0.0)
                .map(|limit| {
                    if limit.is_sign_negative() {
                        i64::MIN
                    } else {
                        i64::MAX
                    }
                })
        })
    })
    .map(|limit| limit.clamp(consts::LIST_LIMIT_MIN, consts::LIST_LIMIT_MAX))
}

/// `offset`, dropped when negative.
pub(crate) fn offset_filter(raw: &RawInput) -> Option<i64> {
    filter(raw, "offset", |raw, key| {
        raw.optional_integer(key).filter(|offset| *offset >= 0)
    })
}

pub(crate) fn string_filter(raw: &RawInput, key: &str) -> Option<String> {
    filter(raw, key, RawInputExt::optional_string)
}

pub(crate) fn boolean_filter(raw: &RawInput, key: &str) -> Option<bool> {
    filter(raw, key, RawInputExt::optional_boolean)
}

pub(crate) fn enum_filter<E: DomainEnum>(raw: &RawInput, key: &str) -> Option<E> {
    filter(raw, key, |raw, key| {
        raw.optional_string(key)
            .and_then(|value| lenient_parse::<E>(&value))
    })
}

pub(crate) fn date_filter(raw: &RawInput, key: &str) -> Option<Date> {
    filter(raw, key, |raw, key| {
        raw.optional_string(key)
            .and_then(|value| date_time::parse_date(&value))
    })
}

/// Value object filter: the input is dropped when the value object rejects it.
pub(crate) fn value_object_filter<T>(
    raw: &RawInput,
    key: &str,
    parse: impl FnOnce(&Value) -> CustomResult<T, InvalidValueObject>,
) -> Option<T> {
    filter(raw, key, |raw, key| {
        raw.optional_value(key).and_then(|value| parse(value).ok())
    })
}

/// Optional start and end of a date filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<Date>,
    pub end: Option<Date>,
}

impl DateRange {
    /// Reads both ends leniently, then rejects a start falling after the end.
    pub(crate) fn from_keys(
        raw: &RawInput,
        start_key: &'static str,
        end_key: &'static str,
    ) -> CustomResult<Self, InvalidDateRange> {
        let range = Self {
            start: date_filter(raw, start_key),
            end: date_filter(raw, end_key),
        };

        match (range.start, range.end) {
            (Some(start), Some(end)) if start > end => Err(report!(InvalidDateRange {
                start: start_key,
                end: end_key,
            })),
            _ => Ok(range),
        }
    }
}

/// Strictly positive finite amount, or the given rule error.
pub(crate) fn positive_amount<E: InvalidRequestData>(
    value: Option<f64>,
    message: &str,
) -> Result<f64, Report<E>> {
    value
        .filter(|value| *value > 0.0)
        .ok_or_else(|| report!(E::rule(message)))
}
