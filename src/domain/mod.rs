//! Domain value objects and types.
//!
//! Type-safe wrappers for contact names and phone numbers. Both validate
//! at construction time, so an invalid value can never reach the
//! address book.

pub mod contact_name;
pub mod errors;
pub mod phone;

pub use contact_name::ContactName;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
