//! Helpers shared by every closed set of domain codes.
//!
//! An enum opts in by implementing [`DomainEnum`]: its variant list comes from
//! [`strum::VariantArray`], its canonical codes from [`strum::IntoStaticStr`], and it supplies
//! its own alias table and labels. Parsing, enumeration and the options list are then provided
//! by the free functions in this module.

use std::borrow::Cow;

use common_utils::{errors::CustomResult, sanitize};
use error_stack::report;

use crate::errors::EnumParseError;

/// A closed set of domain codes, each mapping to exactly one canonical wire string.
pub trait DomainEnum:
    Copy + PartialEq + strum::VariantArray + Into<&'static str> + 'static
{
    /// Human readable type name used in parse errors, e.g. `billing type`.
    const TYPE_NAME: &'static str;

    /// Lowercase synonyms accepted on top of the canonical code. Several aliases may resolve to
    /// the same variant.
    const ALIASES: &'static [(&'static str, Self)];

    /// Fixed human readable label.
    fn label(self) -> Cow<'static, str>;

    /// Canonical wire code, e.g. `CREDIT_CARD`.
    fn code(self) -> &'static str {
        self.into()
    }
}

/// Resolve `input` against the canonical codes, then the alias table, ignoring case and
/// surrounding whitespace. Returns `None` on no match.
pub fn lenient_parse<E: DomainEnum>(input: &str) -> Option<E> {
    let normalized = sanitize::lowercase_str(input)?;

    E::VARIANTS
        .iter()
        .copied()
        .find(|variant| variant.code().eq_ignore_ascii_case(&normalized))
        .or_else(|| {
            E::ALIASES
                .iter()
                .find(|(alias, _)| *alias == normalized)
                .map(|(_, variant)| *variant)
        })
}

/// Same matching as [`lenient_parse`], failing with an error naming the type and the input.
pub fn strict_parse<E: DomainEnum>(input: &str) -> CustomResult<E, EnumParseError> {
    lenient_parse(input).ok_or_else(|| {
        report!(EnumParseError {
            type_name: E::TYPE_NAME,
            value: input.to_owned(),
        })
    })
}

/// Every variant, in declaration order.
pub fn all_variants<E: DomainEnum>() -> &'static [E] {
    E::VARIANTS
}

/// `(code, label)` pairs, in declaration order.
pub fn options_map<E: DomainEnum>() -> Vec<(&'static str, Cow<'static, str>)> {
    E::VARIANTS
        .iter()
        .map(|variant| (variant.code(), variant.label()))
        .collect()
}

/// Implements [`std::str::FromStr`] through [`strict_parse`] and renders the canonical code on
/// the wire.
macro_rules! impl_domain_enum_conversions {
    ($($name:ty),+ $(,)?) => {
        $(
            impl ::std::str::FromStr for $name {
                type Err = ::error_stack::Report<$crate::errors::EnumParseError>;

                fn from_str(input: &str) -> Result<Self, Self::Err> {
                    $crate::domain::strict_parse(input)
                }
            }

            impl ::common_utils::wire::WireValue for $name {
                fn wire_value(&self) -> ::serde_json::Value {
                    ::serde_json::Value::String(
                        $crate::domain::DomainEnum::code(*self).to_owned(),
                    )
                }
            }
        )+
    };
}

pub(crate) use impl_domain_enum_conversions;
