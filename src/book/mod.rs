//! Contact storage.
//!
//! The address book lives for the whole session and is lent to each
//! command handler as `&mut AddressBook`. Nothing is persisted.

mod address_book;

pub use address_book::AddressBook;
