//! Fuzzy matching implementation for contact search.
//!
//! This module provides contact matching with:
//! - Exact and partial matching on phone digits
//! - Fuzzy name matching (substring and Levenshtein distance)
//! - Confidence scoring (0-100 scale)

use crate::models::Record;

/// A match result containing a record and its confidence score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    /// The matched record
    pub record: &'a Record,

    /// Confidence score (0-100, where 100 is an exact phone match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Query equals one of the record's phones
    ExactPhone,

    /// Query is a run of digits inside one of the record's phones
    PartialPhone,

    /// Fuzzy name match
    FuzzyName,
}

/// Contact matcher with fuzzy name and phone matching.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContactMatcher;

impl ContactMatcher {
    /// Create a new ContactMatcher.
    pub fn new() -> Self {
        Self
    }

    /// Find records matching the query.
    ///
    /// # Arguments
    /// * `query` - Name fragment or phone digits
    /// * `records` - Records to search through
    /// * `max_results` - Maximum number of results to return
    /// * `min_confidence` - Minimum confidence threshold (0-100)
    ///
    /// # Returns
    /// Matches sorted by confidence (highest first), ties broken by name
    pub fn find_matches<'a, I>(
        &self,
        query: &str,
        records: I,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult<'a>>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let query = Self::normalize_name(query);
        if query.is_empty() || max_results == 0 {
            return Vec::new();
        }

        let digits_only = query.chars().all(|c| c.is_ascii_digit());
        let mut results: Vec<MatchResult<'a>> = Vec::new();

        for record in records {
            let matched = if digits_only {
                self.match_phone(&query, record)
            } else {
                self.fuzzy_match_name(&query, record.name().as_str())
                    .map(|confidence| (confidence, MatchType::FuzzyName))
            };

            if let Some((confidence, match_type)) = matched {
                if confidence >= min_confidence {
                    results.push(MatchResult {
                        record,
                        confidence,
                        match_type,
                    });
                }
            }
        }

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.record.name().cmp(b.record.name()))
        });
        results.truncate(max_results);
        results
    }

    /// Match phone digits against every phone on the record.
    fn match_phone(&self, digits: &str, record: &Record) -> Option<(u8, MatchType)> {
        let mut best: Option<(u8, MatchType)> = None;

        for phone in record.phones() {
            let phone = phone.as_str();
            let candidate = if phone == digits {
                Some((100, MatchType::ExactPhone))
            } else if phone.contains(digits) {
                let ratio = digits.len() as f64 / phone.len() as f64;
                Some(((80.0 * ratio + 10.0) as u8, MatchType::PartialPhone))
            } else {
                None
            };

            if let Some((score, _)) = candidate {
                if best.map_or(true, |(b, _)| score > b) {
                    best = candidate;
                }
            }
        }

        best
    }

    /// Fuzzy match a query against a contact name.
    fn fuzzy_match_name(&self, query: &str, contact_name: &str) -> Option<u8> {
        let name_normalized = Self::normalize_name(contact_name);
        let score = Self::calculate_fuzzy_score(query, &name_normalized);

        if score > 0 {
            Some(score)
        } else {
            None
        }
    }

    /// Calculate fuzzy match score using Levenshtein distance and substring matching.
    ///
    /// Returns a confidence score from 0-95 (95 max to reserve 100 for exact phone matches).
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        let query_len = query.chars().count();
        let target_len = target.chars().count();

        // Contains match (substring)
        if target.contains(query) {
            let ratio = query_len as f64 / target_len as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query_len.max(target_len);

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Single rolling row instead of the full matrix
        let mut row: Vec<usize> = (0..=s2_chars.len()).collect();

        for (i, c1) in s1_chars.iter().enumerate() {
            let mut diagonal = row[0];
            row[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = if c1 == c2 { 0 } else { 1 };
                let above = row[j + 1];
                row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
                diagonal = above;
            }
        }

        row[s2_chars.len()]
    }

    /// Normalize a name for comparison.
    ///
    /// Lowercases, trims, and collapses internal whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}
