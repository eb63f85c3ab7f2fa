//! Dialable phone numbers.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Length of a national number that gets the default country code prepended.
const NATIONAL_NUMBER_DIGITS: usize = 10;

/// A phone number in dialable form: a leading `+` followed only by digits.
///
/// Values are only produced by [`PhoneNormalizer::normalize`] or by
/// deserializing a string that already has this shape.
///
/// # Example
///
/// ```
/// use outbound_dialer::domain::PhoneNormalizer;
///
/// let phone = PhoneNormalizer::default().normalize("(555) 123-4567").unwrap();
/// assert_eq!(phone.as_str(), "+15551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPhone(String);

impl NormalizedPhone {
    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The digits after the leading `+`.
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }

    fn is_dialable(value: &str) -> bool {
        match value.strip_prefix('+') {
            Some(digits) => !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()),
            None => false,
        }
    }
}

/// Turns spreadsheet phone text into [`NormalizedPhone`] values.
///
/// Accepts exactly two shapes after stripping formatting:
/// - `+` followed by digits, kept as-is
/// - a bare 10-digit national number, which gets the configured country code
///
/// Anything else is rejected so the contact can be skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNormalizer {
    country_code: String,
}

impl PhoneNormalizer {
    /// Create a normalizer that prefixes national numbers with `country_code`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCountryCode` unless the code is 1-3 ASCII digits.
    pub fn new(country_code: impl Into<String>) -> Result<Self, ValidationError> {
        let country_code = country_code.into();
        let trimmed = country_code.trim().trim_start_matches('+');

        if trimmed.is_empty() || trimmed.len() > 3 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidCountryCode(country_code));
        }

        Ok(Self {
            country_code: trimmed.to_string(),
        })
    }

    /// The country code prepended to national numbers (digits only).
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Normalize raw phone text.
    ///
    /// # Errors
    ///
    /// - `ValidationError::EmptyPhone` for empty or whitespace-only input
    /// - `ValidationError::InvalidPhone` when the stripped text matches neither shape
    pub fn normalize(&self, raw: &str) -> Result<NormalizedPhone, ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::EmptyPhone);
        }

        let stripped = strip_formatting(raw);

        if stripped.starts_with('+') {
            if NormalizedPhone::is_dialable(&stripped) {
                return Ok(NormalizedPhone(stripped));
            }
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }

        if stripped.len() == NATIONAL_NUMBER_DIGITS {
            return Ok(NormalizedPhone(format!("+{}{}", self.country_code, stripped)));
        }

        Err(ValidationError::InvalidPhone(raw.to_string()))
    }
}

impl Default for PhoneNormalizer {
    fn default() -> Self {
        Self {
            country_code: "1".to_string(),
        }
    }
}

/// Keep ASCII digits, plus a `+` only when it comes before every digit.
fn strip_formatting(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_digit() {
            out.push(c);
        } else if c == '+' && out.is_empty() {
            out.push(c);
        }
    }
    out
}

// Serde support - serialize as string
impl Serialize for NormalizedPhone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - only already-dialable strings deserialize
impl<'de> Deserialize<'de> for NormalizedPhone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if NormalizedPhone::is_dialable(&s) {
            Ok(NormalizedPhone(s))
        } else {
            Err(serde::de::Error::custom(ValidationError::InvalidPhone(s)))
        }
    }
}

impl fmt::Display for NormalizedPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
