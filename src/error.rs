//! Error types for the contact bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by the record model and the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// No record is stored under the name
    #[error("Contact with name '{0}' not found in the address book.")]
    ContactNotFound(String),

    /// The record has no such phone
    #[error("The phone number {phone} does not exist for contact {name}.")]
    PhoneNotFound { name: String, phone: String },
}

/// Errors a command handler can return to the dispatcher.
///
/// None of these are fatal: the dispatcher renders each one as a single
/// response line and the REPL moves on to the next input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Referenced contact is missing
    #[error("Contact with name '{0}' not found in the address book.")]
    ContactNotFound(String),

    /// Referenced phone is missing from an existing contact
    #[error("The phone number {phone} does not exist for contact {name}.")]
    PhoneNotFound { name: String, phone: String },

    /// Malformed name or phone
    #[error("{0}")]
    InvalidValue(#[from] ValidationError),

    /// Too few tokens for the command
    #[error("Please enter command, name, and phone. Usage: {usage}")]
    MissingArguments { usage: &'static str },

    /// First token is not a registered command
    #[error("Incorrect input '{0}', please, try again:")]
    UnknownCommand(String),
}

impl From<BookError> for CommandError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::ContactNotFound(name) => CommandError::ContactNotFound(name),
            BookError::PhoneNotFound { name, phone } => CommandError::PhoneNotFound { name, phone },
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
