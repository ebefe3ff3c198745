//! Error types for the vigência cost engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Note that a configuration resolution miss is *not* an error: callers
//! receive `None` and fall back to zeroed benefit figures. Errors here cover
//! configuration loading and invalid configuration data only.

use thiserror::Error;

/// The main error type for the vigência cost engine.
///
/// # Example
///
/// ```
/// use vigencia_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file or directory was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A loaded configuration record contained inconsistent data.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfiguration {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
