//! Data models for the address book.
//!
//! A `Record` is the stored form of one contact: a validated name plus the
//! phone numbers collected for it.

pub mod record;

pub use record::Record;
