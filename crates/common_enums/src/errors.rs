//! Errors raised while resolving domain codes.

/// No variant of the enum matched the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {type_name} '{value}'")]
pub struct EnumParseError {
    /// Human readable type name, e.g. `billing type`.
    pub type_name: &'static str,
    /// Input as given by the caller.
    pub value: String,
}
