//! Errors raised while building request models.

/// Machine checkable category of an invalid-data error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCategory {
    MissingField,
    InvalidFormat,
    BusinessRule,
}

/// Behaviour shared by the per-domain invalid-data errors.
pub trait InvalidRequestData: error_stack::Context + Sized {
    /// `Required field '{field}' is missing.`
    fn missing_field(field: &str) -> Self;

    /// `Field '{field}' has invalid format.` unless a detail message is given.
    fn invalid_format(field: &str, detail: Option<String>) -> Self;

    /// Any other rule violation.
    fn rule(message: impl Into<String>) -> Self;

    fn category(&self) -> ErrorCategory;

    /// Input key the error is about, if it concerns a single field.
    fn field(&self) -> Option<&str>;
}

fn invalid_format_message(field: &str, detail: Option<&str>) -> String {
    detail.map_or_else(
        || format!("Field '{field}' has invalid format."),
        ToOwned::to_owned,
    )
}

macro_rules! invalid_request_data {
    ($($(#[$meta:meta])* $name:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
            pub enum $name {
                #[error("Required field '{field}' is missing.")]
                MissingField { field: String },
                #[error("{}", invalid_format_message(.field, .detail.as_deref()))]
                InvalidFormat {
                    field: String,
                    detail: Option<String>,
                },
                #[error("{message}")]
                Rule { message: String },
            }

            impl InvalidRequestData for $name {
                fn missing_field(field: &str) -> Self {
                    Self::MissingField {
                        field: field.to_owned(),
                    }
                }

                fn invalid_format(field: &str, detail: Option<String>) -> Self {
                    Self::InvalidFormat {
                        field: field.to_owned(),
                        detail,
                    }
                }

                fn rule(message: impl Into<String>) -> Self {
                    Self::Rule {
                        message: message.into(),
                    }
                }

                fn category(&self) -> ErrorCategory {
                    match self {
                        Self::MissingField { .. } => ErrorCategory::MissingField,
                        Self::InvalidFormat { .. } => ErrorCategory::InvalidFormat,
                        Self::Rule { .. } => ErrorCategory::BusinessRule,
                    }
                }

                fn field(&self) -> Option<&str> {
                    match self {
                        Self::MissingField { field } | Self::InvalidFormat { field, .. } => {
                            Some(field)
                        }
                        Self::Rule { .. } => None,
                    }
                }
            }
        )+
    };
}

invalid_request_data! {
    /// Customer create or update input was rejected.
    InvalidCustomerData;
    /// Payment create, update or charge input was rejected.
    InvalidPaymentData;
    /// Webhook input was rejected.
    InvalidWebhookData;
    /// Card tokenization input was rejected.
    InvalidCreditCardData;
}

/// Both ends of a date filter were given and the start falls after the end.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("The \"{start}\" must be before \"{end}\"")]
pub struct InvalidDateRange {
    pub start: &'static str,
    pub end: &'static str,
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn missing_field_message() {
        let error = InvalidCustomerData::missing_field("name");
        assert_eq!(error.to_string(), "Required field 'name' is missing.");
        assert_eq!(error.category(), ErrorCategory::MissingField);
        assert_eq!(error.field(), Some("name"));
    }

    #[test_case(None, "Field 'email' has invalid format." ; "default message")]
    #[test_case(Some("Invalid format for 'email': nope".to_owned()), "Invalid format for 'email': nope" ; "detail")]
    fn invalid_format_text(detail: Option<String>, expected: &str) {
        let error = InvalidWebhookData::invalid_format("email", detail);
        assert_eq!(error.to_string(), expected);
        assert_eq!(error.category(), ErrorCategory::InvalidFormat);
    }

    #[test]
    fn rules_are_business_errors() {
        let error = InvalidPaymentData::rule("Value must be greater than 0");
        assert_eq!(error.to_string(), "Value must be greater than 0");
        assert_eq!(error.category(), ErrorCategory::BusinessRule);
        assert_eq!(error.field(), None);
        assert_eq!(ErrorCategory::BusinessRule.to_string(), "business_rule");
    }

    #[test]
    fn date_range_message() {
        let error = InvalidDateRange {
            start: "dateCreatedStart",
            end: "dateCreatedEnd",
        };
        assert_eq!(
            error.to_string(),
            r#"The "dateCreatedStart" must be before "dateCreatedEnd""#
        );
    }
}
