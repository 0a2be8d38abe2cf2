//! Contact model: one name and its ordered list of phone numbers.

use crate::domain::{ContactName, PhoneNumber, ValidationError};
use crate::error::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact record.
///
/// The name is fixed at construction; the phone list is mutable and keeps
/// insertion order. Duplicate phone numbers are permitted, the record does
/// not deduplicate on insert.
///
/// Phone lookups (`remove_phone`, `edit_phone`, `find_phone`) compare
/// against the *canonical* value, so callers pass the normalized `+...`
/// form, not raw user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    name: ContactName,
    phones: Vec<PhoneNumber>,
}

impl Contact {
    /// Create a contact with the given name and no phone numbers.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The contact's phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Validate and normalize `raw`, then append it to the phone list.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `raw` fails validation;
    /// the phone list is unchanged in that case.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone whose canonical value equals `canonical`.
    ///
    /// Removing a number that isn't on the record is a no-op, not an error.
    pub fn remove_phone(&mut self, canonical: &str) {
        self.phones.retain(|p| p.as_str() != canonical);
    }

    /// Replace the first phone whose canonical value equals `old` with a
    /// freshly validated number built from `new`.
    ///
    /// The replacement is constructed before anything is committed, so a
    /// validation failure leaves the record untouched. The list position of
    /// the edited entry is preserved.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::PhoneNotFound` if no phone matches `old`, or
    /// a wrapped `ValidationError::InvalidPhone` if `new` is invalid.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| ContactError::PhoneNotFound(old.to_string()))?;
        self.phones[index] = PhoneNumber::new(new)?;
        Ok(())
    }

    /// Find the first phone whose canonical value equals `canonical`.
    pub fn find_phone(&self, canonical: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == canonical)
    }
}

// Display support - this is the user-facing rendering used by the handlers
impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}
