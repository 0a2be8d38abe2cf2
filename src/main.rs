//! Contact Book - Main entry point

use anyhow::Result;
use contact_book::{repl, AddressBook, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only, stdout belongs to the session)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Configuration loaded successfully");

    // The book lives for the whole session; handlers borrow it per call
    let mut book = AddressBook::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = repl::run(stdin.lock(), stdout.lock(), &config.prompt, &mut book) {
        error!("Terminal I/O failed: {}", e);
        return Err(e.into());
    }

    info!(contacts = book.len(), "session ended");
    Ok(())
}
