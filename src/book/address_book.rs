//! In-memory address book keyed by contact name.

use crate::error::{BookError, BookResult};
use crate::matching::{ContactMatcher, MatchResult};
use crate::models::Record;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// The collection of all records, one per name.
///
/// Records iterate in name order.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, replacing any record already there.
    ///
    /// Returns the replaced record, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        let previous = self.records.insert(key, record);
        if let Some(prev) = &previous {
            warn!(
                name = %prev.name(),
                dropped_phones = prev.phones().len(),
                "Existing contact overwritten"
            );
        }
        previous
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable access to the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if no such record exists.
    pub fn get_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Remove the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if no such record exists.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        self.records
            .remove(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Iterate over all records in name order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fuzzy search by name, or by phone digits when the query is numeric.
    pub fn search(
        &self,
        query: &str,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult<'_>> {
        let results =
            ContactMatcher::new().find_matches(query, self.records(), max_results, min_confidence);
        debug!(query = %query, matches = results.len(), "Address book search");
        results
    }
}
