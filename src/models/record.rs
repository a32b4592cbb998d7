//! Record model representing one contact in the address book.

use crate::domain::{ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a fixed name and an ordered list of phone numbers.
///
/// Phones keep insertion order. Duplicates are allowed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,
}

impl Record {
    /// Create a record with no phones.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
        }
    }

    /// Create a record holding a single phone.
    pub fn with_phone(name: ContactName, phone: PhoneNumber) -> Self {
        Self {
            name,
            phones: vec![phone],
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Append a phone to the end of the list.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Find the first phone equal to `value`.
    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Replace the first occurrence of `old` with `new`, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if `old` is not on this record.
    pub fn edit_phone(&mut self, old: &str, new: PhoneNumber) -> BookResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| self.phone_not_found(old))?;
        self.phones[index] = new;
        Ok(())
    }

    /// Remove the first occurrence of `phone` and return it.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` and leaves the record untouched if
    /// `phone` is not on this record.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<PhoneNumber> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| self.phone_not_found(phone))?;
        Ok(self.phones.remove(index))
    }

    /// Phones joined with `", "`, as shown to the user.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn phone_not_found(&self, phone: &str) -> BookError {
        BookError::PhoneNotFound {
            name: self.name.to_string(),
            phone: phone.to_string(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Phones: {}", self.name, self.phones_display())
    }
}
