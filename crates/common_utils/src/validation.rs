//! Custom validations for some shared types.

#![deny(clippy::invalid_regex)]

use std::{net::IpAddr, sync::LazyLock};

use error_stack::report;
use regex::Regex;
#[cfg(feature = "logs")]
use router_env::logger;

use crate::{
    consts,
    errors::{CustomResult, ValidationError},
};

/// Performs a simple validation against a provided email address.
pub fn validate_email(email: &str) -> CustomResult<(), ValidationError> {
    #[deny(clippy::invalid_regex)]
    static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| {
        #[allow(unknown_lints)]
        #[allow(clippy::manual_ok_err)]
        match Regex::new(
            r"^(?i)[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)+$",
        ) {
            Ok(regex) => Some(regex),
            Err(_error) => {
                #[cfg(feature = "logs")]
                logger::error!(?_error);
                None
            }
        }
    });
    let email_regex = match EMAIL_REGEX.as_ref() {
        Some(regex) => Ok(regex),
        None => Err(report!(ValidationError::InvalidValue {
            message: "Invalid regex expression".into()
        })),
    }?;

    if email.is_empty() || email.chars().count() > consts::EMAIL_MAX_LENGTH {
        return Err(report!(ValidationError::InvalidValue {
            message: "Email address is either empty or exceeds maximum allowed length".into()
        }));
    }

    if !email_regex.is_match(email) {
        return Err(report!(ValidationError::InvalidValue {
            message: "Invalid email address format".into()
        }));
    }

    Ok(())
}

/// Parses an absolute URL which carries a host, e.g. `https://example.com/return`.
pub fn validate_url(url: &str) -> CustomResult<url::Url, ValidationError> {
    let parsed = url::Url::parse(url.trim()).map_err(|error| {
        report!(ValidationError::InvalidValue {
            message: format!("Invalid URL: {error}"),
        })
    })?;

    if !parsed.has_host() {
        return Err(report!(ValidationError::InvalidValue {
            message: "URL has no host".into()
        }));
    }

    Ok(parsed)
}

/// Checks that the scheme of an already parsed URL is `https`.
///
/// [`url::Url`] normalizes the scheme to lowercase, so `HTTPS://` passes as well.
pub fn validate_https_scheme(url: &url::Url) -> CustomResult<(), ValidationError> {
    if url.scheme() == "https" {
        Ok(())
    } else {
        Err(report!(ValidationError::IncorrectValueProvided {
            field_name: "scheme"
        }))
    }
}

/// Parses an IPv4 or IPv6 address.
pub fn validate_ip_address(ip: &str) -> CustomResult<IpAddr, ValidationError> {
    ip.trim().parse::<IpAddr>().map_err(|_| {
        report!(ValidationError::InvalidValue {
            message: "Invalid IP address".into()
        })
    })
}
