//! Error types for loader operations.
//!
//! This module defines [`LoaderError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Argument validation fails synchronously, before any injection is issued
//! - Resource-serving errors are surfaced to the browser as HTTP-style
//!   responses by [`crate::resources::ResourceHandler`], not to application code
//! - Use `anyhow::Error` (via `LoaderError::Other`) for custom provider errors

use thiserror::Error;

/// Core error type for loader operations.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// A required argument was absent or empty.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A packaged resource does not exist.
    #[error("Resource not found: {library}/{file}")]
    ResourceNotFound { library: String, file: String },

    /// A packaged resource exists but could not be read.
    #[error("Failed to read resource {library}/{file}: {message}")]
    ResourceReadFailure {
        library: String,
        file: String,
        message: String,
    },

    /// Generic wrapped error for anyhow interop (custom resource providers).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LoaderError {
    /// Shorthand for an [`LoaderError::InvalidArgument`] with the given message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        LoaderError::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Result type alias for loader operations.
pub type Result<T> = std::result::Result<T, LoaderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_displays_message() {
        let err = LoaderError::invalid_argument("library name cannot be empty");
        assert!(err.to_string().contains("library name cannot be empty"));
    }

    #[test]
    fn resource_not_found_displays_library_and_file() {
        let err = LoaderError::ResourceNotFound {
            library: "leaflet".into(),
            file: "leaflet.css".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("leaflet"));
        assert!(msg.contains("leaflet.css"));
    }

    #[test]
    fn resource_read_failure_displays_all_fields() {
        let err = LoaderError::ResourceReadFailure {
            library: "chart".into(),
            file: "chart.js".into(),
            message: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("chart"));
        assert!(msg.contains("chart.js"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn other_wraps_anyhow() {
        let err: LoaderError = anyhow::anyhow!("provider exploded").into();
        assert!(err.to_string().contains("provider exploded"));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(LoaderError::invalid_argument("test"))
        }
        assert!(returns_error().is_err());
    }
}
