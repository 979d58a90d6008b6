//! # Error Types
//!
//! Crate-level error type using `thiserror`. Rule violations themselves are
//! [`ValidationError`]s; [`MeshgateError`] wraps them with the entry they were
//! found in, alongside configuration failures.

use crate::validation::ValidationError;

/// Custom result type for meshgate operations
pub type Result<T> = std::result::Result<T, MeshgateError>;

/// Main error type for meshgate
#[derive(thiserror::Error, Debug)]
pub enum MeshgateError {
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Entry rejected at its first violation
    #[error("Invalid config entry {entry}: {source}")]
    Validation {
        entry: String,
        #[source]
        source: ValidationError,
    },

    /// Entry rejected with every violation it contains
    #[error("Invalid config entry {entry}: {}", join_violations(.violations))]
    Violations { entry: String, violations: Vec<ValidationError> },
}

fn join_violations(violations: &[ValidationError]) -> String {
    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

impl MeshgateError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into(), source: None }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>>(
        message: S,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::Config { message: message.into(), source: Some(source) }
    }

    /// Create a fail-fast rejection for the entry labelled `entry`
    pub fn validation<E: Into<String>>(entry: E, source: ValidationError) -> Self {
        Self::Validation { entry: entry.into(), source }
    }

    /// Create an aggregate rejection for the entry labelled `entry`
    pub fn violations<E: Into<String>>(entry: E, violations: Vec<ValidationError>) -> Self {
        Self::Violations { entry: entry.into(), violations }
    }

    /// Rule violations carried by this error, empty for configuration errors
    pub fn rule_violations(&self) -> &[ValidationError] {
        match self {
            MeshgateError::Validation { source, .. } => std::slice::from_ref(source),
            MeshgateError::Violations { violations, .. } => violations,
            MeshgateError::Config { .. } => &[],
        }
    }

    /// Whether the error rejects a submitted entry
    pub fn is_rejection(&self) -> bool {
        matches!(self, MeshgateError::Validation { .. } | MeshgateError::Violations { .. })
    }

    /// HTTP status code an API layer should answer with for this error
    pub fn status_code(&self) -> u16 {
        match self {
            MeshgateError::Config { .. } => 500,
            MeshgateError::Validation { .. } => 400,
            MeshgateError::Violations { .. } => 400,
        }
    }

    /// Check if this error should be retried.
    ///
    /// Validation is deterministic, so rejections never are.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

impl From<::config::ConfigError> for MeshgateError {
    fn from(error: ::config::ConfigError) -> Self {
        Self::config_with_source("Configuration loading failed", Box::new(error))
    }
}

impl From<validator::ValidationErrors> for MeshgateError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages = Vec::new();
        collect_validator_messages("", &errors, &mut messages);
        messages.sort();

        Self::config(format!("Validation failed: {}", messages.join("; ")))
    }
}

/// Flatten nested validator errors into `path.to.field: message` lines
fn collect_validator_messages(
    prefix: &str,
    errors: &validator::ValidationErrors,
    messages: &mut Vec<String>,
) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let error_messages: Vec<String> = field_errors
                    .iter()
                    .map(|e| {
                        e.message.as_ref().map_or("Invalid value".to_string(), |m| m.to_string())
                    })
                    .collect();
                messages.push(format!("{}: {}", path, error_messages.join(", ")));
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_validator_messages(&path, nested, messages);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_validator_messages(&format!("{}[{}]", path, index), nested, messages);
                }
            }
        }
    }
}
