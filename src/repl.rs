//! The read-eval-print loop.
//!
//! Thin glue between the terminal and the command handlers: reads a line,
//! tokenizes it, dispatches to the matching handler, prints the reply.
//! Generic over reader and writer so tests can drive a whole session with
//! in-memory buffers.

use crate::commands;
use crate::store::AddressBook;
use std::io::{BufRead, Write};
use tracing::{debug, info};

const MSG_WELCOME: &str = "Welcome to the assistant bot!";
const MSG_HELLO: &str = "How can I help you?";
const MSG_GOODBYE: &str = "Good bye!";
const MSG_UNKNOWN: &str = "Command not found.";

/// Split an input line into a lower-cased command and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}

/// Run the interactive loop until `close`/`exit` or end of input.
///
/// # Errors
///
/// Only I/O errors from the reader or writer propagate; user input never
/// produces an error.
pub fn run<R, W>(
    mut reader: R,
    mut writer: W,
    prompt: &str,
    book: &mut AddressBook,
) -> std::io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(writer, "{}", MSG_WELCOME)?;

    let mut line = String::new();
    loop {
        write!(writer, "{}", prompt)?;
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            // EOF behaves like `exit`
            info!("end of input, shutting down");
            writeln!(writer, "{}", MSG_GOODBYE)?;
            return Ok(());
        }

        let Some((command, args)) = parse_input(&line) else {
            continue;
        };
        debug!(%command, args = args.len(), "dispatching");

        let reply = match command.as_str() {
            "hello" => MSG_HELLO.to_string(),
            "add" => commands::add_contact(&args, book),
            "change" => commands::change_contact(&args, book),
            "phone" => commands::show_phone(&args, book),
            "all" => commands::show_all(book),
            "close" | "exit" => {
                writeln!(writer, "{}", MSG_GOODBYE)?;
                return Ok(());
            }
            _ => MSG_UNKNOWN.to_string(),
        };

        writeln!(writer, "{}", reply)?;
    }
}
