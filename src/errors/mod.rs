//! # Error Handling
//!
//! Error types for meshgate, defined with `thiserror`.

pub mod types;

pub use types::{MeshgateError, Result};
