//! Errors and error specific types for universal use

/// Custom Result
/// A custom datatype that wraps the error variant <E> into a report, allowing
/// error_stack::Report<E> specific extendability
///
/// Effectively, equivalent to `Result<T, error_stack::Report<E>>`
///
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Validation errors.
#[allow(missing_docs)] // Only to prevent warnings about struct fields not being documented
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// An incorrect value was provided for the field specified by `field_name`.
    #[error("Incorrect value provided for field: {field_name}")]
    IncorrectValueProvided { field_name: &'static str },

    /// An invalid input was provided.
    #[error("{message}")]
    InvalidValue { message: String },
}

/// The value object a [`InvalidValueObject`] error originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ValueObjectKind {
    /// Brazilian individual taxpayer registry number.
    Cpf,
    /// Brazilian company registry number.
    Cnpj,
    /// CPF or CNPJ, chosen by digit count.
    Document,
    /// Email address.
    Email,
    /// Landline or mobile phone number.
    Phone,
    /// Brazilian postal code (CEP).
    PostalCode,
    /// Credit card data.
    CreditCard,
    /// Credit card holder data.
    CreditCardHolderInfo,
    /// Payment discount.
    Discount,
    /// Late payment fine.
    Fine,
    /// Late payment interest.
    Interest,
    /// Checkout redirect callback.
    Callback,
    /// Payment split configuration.
    Split,
    /// One recipient of a payment split.
    SplitEntry,
}

/// A value object rejected its input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct InvalidValueObject {
    /// Value object that rejected the input.
    pub kind: ValueObjectKind,
    /// Human readable reason.
    pub message: String,
}

impl InvalidValueObject {
    /// Create a new error for the given value object kind.
    pub fn new(kind: ValueObjectKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// `Missing required field: {field}` raised by structured value objects.
    pub fn missing_field(kind: ValueObjectKind, field: &str) -> Self {
        Self::new(kind, format!("Missing required field: {field}"))
    }
}
