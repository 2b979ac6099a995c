//! Errors surfaced by the services and the transport seam.

use api_models::errors::{
    ErrorCategory, InvalidCreditCardData, InvalidCustomerData, InvalidDateRange,
    InvalidPaymentData, InvalidRequestData, InvalidWebhookData,
};
use common_utils::errors::CustomResult;

/// Failure of a service operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The input was rejected before anything was sent.
    #[error("{message}")]
    Validation {
        /// Category of the rejected input.
        category: ErrorCategory,
        /// Input key the rejection is about, if any.
        field: Option<String>,
        /// Human readable reason.
        message: String,
    },
    /// The transport failed to deliver the request or to read the response.
    #[error("Failed to communicate with the Asaas API")]
    Transport,
}

impl ApiError {
    /// Rejection of a blank resource id, e.g. `Customer ID cannot be empty`.
    pub fn empty_id(resource: &str) -> Self {
        Self::Validation {
            category: ErrorCategory::MissingField,
            field: Some("id".to_owned()),
            message: format!("{resource} ID cannot be empty"),
        }
    }

    /// Whether the error was raised before contacting the transport.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Failure reported by a [`crate::api::ConnectorTransport`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request could not be sent.
    #[error("Failed to send the request")]
    RequestFailed,
    /// No response arrived within the configured timeout.
    #[error("Request timed out")]
    Timeout,
    /// The API answered with a non-success status code.
    #[error("Asaas API responded with status {status}")]
    UnexpectedStatus {
        /// HTTP status code of the response.
        status: u16,
    },
    /// The response body is not valid JSON.
    #[error("Failed to deserialize the response body")]
    ResponseDeserializationFailed,
}

/// Client settings which cannot be used to reach the API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// `api_key` is empty or missing.
    #[error("API key must not be empty")]
    MissingApiKey,
    /// `base_url` override is not an absolute URL.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Request-model errors that can be reported as [`ApiError::Validation`].
pub trait ValidationContext: error_stack::Context {
    /// Category and input key of the rejection.
    fn describe(&self) -> (ErrorCategory, Option<String>);
}

macro_rules! impl_validation_context {
    ($($name:ty),+ $(,)?) => {
        $(
            impl ValidationContext for $name {
                fn describe(&self) -> (ErrorCategory, Option<String>) {
                    (self.category(), self.field().map(ToOwned::to_owned))
                }
            }
        )+
    };
}

impl_validation_context!(
    InvalidCustomerData,
    InvalidPaymentData,
    InvalidWebhookData,
    InvalidCreditCardData,
);

impl ValidationContext for InvalidDateRange {
    fn describe(&self) -> (ErrorCategory, Option<String>) {
        (ErrorCategory::BusinessRule, Some(self.start.to_owned()))
    }
}

/// Lifts request-model errors into [`ApiError::Validation`], keeping the original report as the
/// cause.
pub trait ValidationResultExt<T> {
    /// See the trait documentation.
    fn into_validation_error(self) -> CustomResult<T, ApiError>;
}

impl<T, E: ValidationContext> ValidationResultExt<T> for CustomResult<T, E> {
    fn into_validation_error(self) -> CustomResult<T, ApiError> {
        self.map_err(|error| {
            let (category, field) = error.current_context().describe();
            let message = error.current_context().to_string();
            error.change_context(ApiError::Validation {
                category,
                field,
                message,
            })
        })
    }
}
