//! Command handlers.
//!
//! Each handler takes the positional arguments parsed from the input line
//! plus the address book, and returns the string to show the user. Wrong
//! argument counts, validation failures, and lookup misses all terminate
//! here as fixed messages; no error leaves a handler.

use crate::error::{ContactError, ContactResult};
use crate::models::Contact;
use crate::store::AddressBook;
use tracing::debug;

/// Shown for a wrong argument count or an invalid name/phone value.
pub const MSG_BAD_INPUT: &str = "Give me name and phone please.";

/// Shown when a lookup by name finds no record.
pub const MSG_NO_CONTACT: &str = "Contact not found.";

/// Shown when editing a phone number the record doesn't have.
pub const MSG_NO_PHONE: &str = "Phone number not found.";

/// Shown by `all` when the book is empty.
pub const MSG_NO_CONTACTS: &str = "No contacts found.";

/// `add <name> <phone>`: create the record if the name is new, then add
/// the phone to it.
///
/// The record is created before the phone is validated, so an invalid
/// phone still leaves an empty record behind for the name.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> String {
    let [name, phone] = args else {
        debug!(count = args.len(), "add: wrong argument count");
        return MSG_BAD_INPUT.to_string();
    };

    match try_add(name, phone, book) {
        Ok(()) => "Contact added.".to_string(),
        Err(err) => {
            debug!(%err, "add: rejected");
            MSG_BAD_INPUT.to_string()
        }
    }
}

fn try_add(name: &str, phone: &str, book: &mut AddressBook) -> ContactResult<()> {
    if book.find(name).is_none() {
        book.add_record(Contact::new(name)?);
    }
    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
    }
    Ok(())
}

/// `change <name> <old> <new>`: replace one phone number on an existing
/// record.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> String {
    let [name, old, new] = args else {
        debug!(count = args.len(), "change: wrong argument count");
        return MSG_BAD_INPUT.to_string();
    };

    let Some(record) = book.find_mut(name) else {
        return MSG_NO_CONTACT.to_string();
    };

    match record.edit_phone(old, new) {
        Ok(()) => "Contact updated.".to_string(),
        Err(ContactError::PhoneNotFound(phone)) => {
            debug!(name = %name, phone = %phone, "change: phone not on record");
            MSG_NO_PHONE.to_string()
        }
        Err(err) => {
            debug!(%err, "change: rejected");
            MSG_BAD_INPUT.to_string()
        }
    }
}

/// `phone <name>`: render the record. Arguments past the name are ignored.
pub fn show_phone(args: &[String], book: &AddressBook) -> String {
    let Some(name) = args.first() else {
        debug!("phone: missing name argument");
        return MSG_BAD_INPUT.to_string();
    };

    match book.find(name) {
        Some(record) => record.to_string(),
        None => MSG_NO_CONTACT.to_string(),
    }
}

/// `all`: render every record, or report that the book is empty.
pub fn show_all(book: &AddressBook) -> String {
    match book.render_all() {
        Some(rendered) => rendered,
        None => MSG_NO_CONTACTS.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_contact_success() {
        let mut book = AddressBook::new();
        let reply = add_contact(&args(&["Bob", "1234567890"]), &mut book);
        assert_eq!(reply, "Contact added.");
        assert_eq!(
            book.find("Bob").unwrap().phones()[0].as_str(),
            "+381234567890"
        );
    }

    #[test]
    fn test_add_contact_appends_to_existing() {
        let mut book = AddressBook::new();
        add_contact(&args(&["Bob", "0501234567"]), &mut book);
        add_contact(&args(&["Bob", "0507654321"]), &mut book);

        assert_eq!(book.len(), 1);
        assert_eq!(book.find("Bob").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_contact_wrong_arity() {
        let mut book = AddressBook::new();
        assert_eq!(add_contact(&args(&["Bob"]), &mut book), MSG_BAD_INPUT);
        assert_eq!(
            add_contact(&args(&["Bob", "0501234567", "extra"]), &mut book),
            MSG_BAD_INPUT
        );
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_contact_invalid_phone_keeps_empty_record() {
        let mut book = AddressBook::new();
        let reply = add_contact(&args(&["Bob", "12345"]), &mut book);
        assert_eq!(reply, MSG_BAD_INPUT);

        // The record was created before the phone was rejected
        let record = book.find("Bob").unwrap();
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_change_contact_success() {
        let mut book = AddressBook::new();
        add_contact(&args(&["Bob", "+380501234567"]), &mut book);

        let reply = change_contact(
            &args(&["Bob", "+380501234567", "0507654321"]),
            &mut book,
        );
        assert_eq!(reply, "Contact updated.");
        assert_eq!(
            book.find("Bob").unwrap().phones()[0].as_str(),
            "+380507654321"
        );
    }

    #[test]
    fn test_change_contact_missing_record() {
        let mut book = AddressBook::new();
        let reply = change_contact(&args(&["Alice", "1", "2"]), &mut book);
        assert_eq!(reply, MSG_NO_CONTACT);
    }

    #[test]
    fn test_change_contact_missing_phone() {
        let mut book = AddressBook::new();
        add_contact(&args(&["Bob", "0501234567"]), &mut book);

        let reply = change_contact(
            &args(&["Bob", "+380000000000", "0507654321"]),
            &mut book,
        );
        assert_eq!(reply, MSG_NO_PHONE);
    }

    #[test]
    fn test_change_contact_invalid_new_phone() {
        let mut book = AddressBook::new();
        add_contact(&args(&["Bob", "0501234567"]), &mut book);

        let reply = change_contact(&args(&["Bob", "+380501234567", "nope"]), &mut book);
        assert_eq!(reply, MSG_BAD_INPUT);
        // Old number still in place
        assert_eq!(
            book.find("Bob").unwrap().phones()[0].as_str(),
            "+380501234567"
        );
    }

    #[test]
    fn test_change_contact_wrong_arity() {
        let mut book = AddressBook::new();
        assert_eq!(
            change_contact(&args(&["Bob", "0501234567"]), &mut book),
            MSG_BAD_INPUT
        );
    }

    #[test]
    fn test_show_phone_renders_record() {
        let mut book = AddressBook::new();
        add_contact(&args(&["Bob", "1234567890"]), &mut book);

        let reply = show_phone(&args(&["Bob"]), &book);
        assert_eq!(reply, "Contact name: Bob, phones: +381234567890");
    }

    #[test]
    fn test_show_phone_ignores_extra_args() {
        let mut book = AddressBook::new();
        add_contact(&args(&["Bob", "1234567890"]), &mut book);

        let reply = show_phone(&args(&["Bob", "whatever"]), &book);
        assert_eq!(reply, "Contact name: Bob, phones: +381234567890");
    }

    #[test]
    fn test_show_phone_missing_record() {
        let book = AddressBook::new();
        assert_eq!(show_phone(&args(&["Bob"]), &book), MSG_NO_CONTACT);
    }

    #[test]
    fn test_show_phone_no_args() {
        let book = AddressBook::new();
        assert_eq!(show_phone(&[], &book), MSG_BAD_INPUT);
    }

    #[test]
    fn test_show_all_empty_and_populated() {
        let mut book = AddressBook::new();
        assert_eq!(show_all(&book), MSG_NO_CONTACTS);

        add_contact(&args(&["Bob", "1234567890"]), &mut book);
        assert_eq!(show_all(&book), "Contact name: Bob, phones: +381234567890");
    }
}
