//! Business logic services
//!
//! Service layer components that apply validation rules on behalf of the
//! config-entry write path.

pub mod entry_validator;

pub use entry_validator::EntryValidator;
