//! In-memory address book keyed by contact name.

use crate::models::Contact;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The in-memory collection of all contact records for a session.
///
/// Records are keyed by their exact name (no case folding) and kept in
/// insertion order, which is the order `render_all` reports them in. The
/// book owns its records exclusively; callers get transient references.
///
/// Backed by a vector with linear lookup. The book lives for one
/// interactive session and holds at most a handful of records, so a
/// hash index would buy nothing.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AddressBook {
    records: Vec<Contact>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any existing record with the same name.
    ///
    /// Upsert semantics: last write wins, and a replacement keeps the
    /// original insertion position. A new name lands at the end.
    pub fn add_record(&mut self, record: Contact) {
        match self.position(record.name().as_str()) {
            Some(index) => {
                debug!(name = %record.name(), "replacing existing record");
                self.records[index] = record;
            }
            None => {
                debug!(name = %record.name(), "adding new record");
                self.records.push(record);
            }
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Look up a record by exact name, mutably.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove the record with the given name, if present.
    pub fn delete(&mut self, name: &str) {
        if let Some(index) = self.position(name) {
            self.records.remove(index);
            debug!(name, "record deleted");
        }
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Render every record in insertion order, one per line.
    ///
    /// Returns `None` for an empty book so callers can tell "no contacts"
    /// apart from a book whose records happen to render to little output.
    pub fn render_all(&self) -> Option<String> {
        if self.records.is_empty() {
            return None;
        }
        Some(
            self.records
                .iter()
                .map(Contact::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}
