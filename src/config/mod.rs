//! # Configuration Management
//!
//! Settings that control how entries are validated and how validation is
//! observed. Loaded from `MESHGATE_*` environment variables or from a file
//! with environment overrides.

pub mod settings;

pub use settings::{AppConfig, ObservabilityConfig, ValidationMode, ValidationSettings};
