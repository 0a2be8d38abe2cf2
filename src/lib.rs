//! Contact Book - an interactive command-line contact manager.
//!
//! Stores contact names and normalized phone numbers in memory for one
//! session, driven by line commands (`add`, `change`, `phone`, `all`).
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names and phone numbers
//! - **models**: The contact record (name + ordered phone list)
//! - **store**: The in-memory address book keyed by name
//! - **commands**: Handlers mapping parsed arguments to store operations
//! - **repl**: Line tokenizing, dispatch, and the interactive loop
//! - **config**: Runtime settings from environment variables
//! - **error**: Custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod store;

pub use config::Config;
pub use domain::{ContactName, PhoneNumber, ValidationError};
pub use error::{ConfigError, ContactError};
pub use models::Contact;
pub use store::AddressBook;
