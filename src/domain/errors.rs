//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The raw phone text is empty or whitespace.
    EmptyPhone,

    /// The phone text is neither `+<digits>` nor a bare national number.
    InvalidPhone(String),

    /// The configured country code is not 1-3 digits.
    InvalidCountryCode(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPhone => write!(f, "Phone number is empty"),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidCountryCode(code) => write!(f, "Invalid country code: {}", code),
        }
    }
}

impl std::error::Error for ValidationError {}
