//! Scripted end-to-end sessions through the REPL.
//!
//! Each test feeds a whole session into the loop via an in-memory reader
//! and checks the transcript written to an in-memory writer.

use contact_book::{repl, AddressBook};
use std::io::Cursor;

/// Run a session with no prompt so the transcript is just output lines.
fn run_session(input: &str) -> String {
    let mut book = AddressBook::new();
    let mut output = Vec::new();
    repl::run(Cursor::new(input), &mut output, "", &mut book).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_session_add_query_exit() {
    let transcript = run_session(
        "hello\n\
         add Bob 1234567890\n\
         phone Bob\n\
         all\n\
         exit\n",
    );

    assert_eq!(
        transcript,
        "Welcome to the assistant bot!\n\
         How can I help you?\n\
         Contact added.\n\
         Contact name: Bob, phones: +381234567890\n\
         Contact name: Bob, phones: +381234567890\n\
         Good bye!\n"
    );
}

#[test]
fn test_session_change_flow() {
    let transcript = run_session(
        "add Bob +380501234567\n\
         change Bob +380501234567 0507654321\n\
         phone Bob\n\
         close\n",
    );

    assert!(transcript.contains("Contact added.\n"));
    assert!(transcript.contains("Contact updated.\n"));
    assert!(transcript.contains("Contact name: Bob, phones: +380507654321\n"));
    assert!(transcript.ends_with("Good bye!\n"));
}

#[test]
fn test_session_unknown_command() {
    let transcript = run_session("frobnicate\nexit\n");
    assert!(transcript.contains("Command not found.\n"));
}

#[test]
fn test_session_command_case_insensitive() {
    let transcript = run_session("ADD Bob 1234567890\nPHONE Bob\nEXIT\n");
    assert!(transcript.contains("Contact added.\n"));
    assert!(transcript.contains("Contact name: Bob, phones: +381234567890\n"));
    assert!(transcript.ends_with("Good bye!\n"));
}

#[test]
fn test_session_blank_lines_reprompt() {
    let mut book = AddressBook::new();
    let mut output = Vec::new();
    repl::run(
        Cursor::new("\n   \nhello\nexit\n"),
        &mut output,
        "> ",
        &mut book,
    )
    .unwrap();
    let transcript = String::from_utf8(output).unwrap();

    // Blank lines produce a fresh prompt and nothing else
    assert_eq!(transcript.matches("> ").count(), 4);
    assert!(transcript.contains("How can I help you?\n"));
}

#[test]
fn test_session_eof_acts_like_exit() {
    let transcript = run_session("add Bob 1234567890\n");
    assert!(transcript.ends_with("Good bye!\n"));
}

#[test]
fn test_session_malformed_input_keeps_running() {
    let transcript = run_session(
        "add\n\
         add Bob\n\
         add Bob 123\n\
         change Alice 1 2\n\
         all\n\
         exit\n",
    );

    assert_eq!(transcript.matches("Give me name and phone please.\n").count(), 3);
    assert!(transcript.contains("Contact not found.\n"));
    // "add Bob 123" created the record before rejecting the phone
    assert!(transcript.contains("Contact name: Bob, phones: \n"));
    assert!(transcript.ends_with("Good bye!\n"));
}
