//! Common utilities shared across database implementations

pub mod error;

pub use error::DatabaseError;
