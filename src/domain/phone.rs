//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for phone numbers in canonical form.
///
/// Validation and normalization happen at construction time, so a
/// `PhoneNumber` always holds a canonical value starting with `+`.
/// Two input shapes are accepted:
///
/// - `+` followed by 11 digits (12 characters total) is kept as-is
/// - exactly 10 digits without a `+` gets the `+38` country prefix
///
/// Everything else, including non-digit characters after an optional
/// leading `+`, is rejected.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "+380501234567");
///
/// let phone = PhoneNumber::new("+380501234567").unwrap();
/// assert_eq!(phone.as_str(), "+380501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating and normalizing the input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the input contains a
    /// non-digit after the optional leading `+`, or if its length matches
    /// neither accepted shape. The length check is applied to the shape the
    /// input arrived in: `+` followed by 10 digits is invalid, it does not
    /// fall through to the bare 10-digit rule.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        let (has_plus, digits) = match raw.strip_prefix('+') {
            Some(rest) => (true, rest),
            None => (false, raw.as_str()),
        };

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhone(raw));
        }

        match (has_plus, digits.len()) {
            (true, 11) => Ok(Self(raw)),
            (false, 10) => Ok(Self(format!("+38{}", digits))),
            _ => Err(ValidationError::InvalidPhone(raw)),
        }
    }

    /// Get the canonical phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
