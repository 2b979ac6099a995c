#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unreachable,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub mod consts;
pub mod errors;
pub mod ext_traits;
pub mod macros;
pub mod pii;
pub mod sanitize;
pub mod types;
pub mod validation;
pub mod wire;

/// Date-time utilities.
pub mod date_time {
    use time::{
        format_description::well_known::Rfc3339, macros::format_description, Date,
        OffsetDateTime, PrimitiveDateTime,
    };

    /// Create a new [`PrimitiveDateTime`] with the current date and time in UTC.
    pub fn now() -> PrimitiveDateTime {
        let utc_date_time = OffsetDateTime::now_utc();
        PrimitiveDateTime::new(utc_date_time.date(), utc_date_time.time())
    }

    /// Current calendar date in UTC.
    pub fn today() -> Date {
        now().date()
    }

    /// Parse a calendar date out of the representations callers commonly hand over:
    /// `2024-01-31`, `31/01/2024`, RFC 3339 timestamps and naive `2024-01-31 10:00:00`
    /// timestamps. The time of day, if any, is discarded.
    pub fn parse_date(input: &str) -> Option<Date> {
        let input = input.trim();

        Date::parse(input, format_description!("[year]-[month]-[day]"))
            .ok()
            .or_else(|| Date::parse(input, format_description!("[day]/[month]/[year]")).ok())
            .or_else(|| {
                OffsetDateTime::parse(input, &Rfc3339)
                    .ok()
                    .map(|date_time| date_time.date())
            })
            .or_else(|| {
                PrimitiveDateTime::parse(
                    input,
                    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
                )
                .ok()
                .map(|date_time| date_time.date())
            })
            .or_else(|| {
                PrimitiveDateTime::parse(
                    input,
                    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
                )
                .ok()
                .map(|date_time| date_time.date())
            })
    }

    /// Render a date as `YYYY-MM-DD`.
    pub fn format_date(date: Date) -> String {
        format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            u8::from(date.month()),
            date.day()
        )
    }

}
