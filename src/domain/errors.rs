//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided contact name consists only of digits.
    NumericName(String),

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::NumericName(name) => {
                write!(f, "Wrong name: '{}'. A name cannot be only digits", name)
            }
            Self::InvalidPhone(phone) => {
                write!(f, "Wrong phone: '{}'. A phone must be exactly 10 digits", phone)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
