//! Contact Bot - an interactive command-line contact manager.
//!
//! The bot reads one command per line, keeps an in-memory address book of
//! named contacts with validated phone numbers, and prints a textual reply
//! for every command.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`ContactName`, `PhoneNumber`)
//! - **models**: The `Record` stored for each contact
//! - **book**: The `AddressBook` mapping names to records
//! - **matching**: Fuzzy name and phone matching for `search`
//! - **commands**: Command registry and handlers
//! - **repl**: Line dispatch and the read-eval-print loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod repl;

pub use book::AddressBook;
pub use config::Config;
pub use domain::{ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError};
pub use matching::{ContactMatcher, MatchResult};
pub use models::Record;
pub use repl::{ContactBot, Control, Reply};
