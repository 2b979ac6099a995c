//! Commonly used constants

/// Longest email address accepted, local part and domain included.
pub const EMAIL_MAX_LENGTH: usize = 319;

/// Upper bound of every percentage based amount.
pub const MAX_PERCENTAGE: f64 = 100.0;

/// Smallest page size a list request may ask for.
pub const LIST_LIMIT_MIN: i64 = 1;

/// Largest page size a list request may ask for.
pub const LIST_LIMIT_MAX: i64 = 100;

/// Digits in a CPF.
pub const CPF_LENGTH: usize = 11;

/// Digits in a CNPJ.
pub const CNPJ_LENGTH: usize = 14;

/// Digits in a postal code (CEP).
pub const POSTAL_CODE_LENGTH: usize = 8;
