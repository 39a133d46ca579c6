//! Error types for the outreach composer.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can abort a message generation run.
#[derive(Error, Debug)]
pub enum ComposeError {
    /// The template source produced no templates
    #[error("No templates found in the template source")]
    NoTemplates,

    /// A required input source was not supplied
    #[error("Missing required input: {0}")]
    MissingInput(String),

    /// Tabular input or output could not be processed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Reading an input or writing an artifact failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Another run is still in progress
    #[error("A run is already in progress")]
    RunInProgress,

    /// Generic failure with context
    #[error("Generation failed: {0}")]
    Other(String),
}

impl ComposeError {
    /// Whether this error is one of the named user-facing abort conditions
    /// rather than an unexpected failure.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::NoTemplates | Self::MissingInput(_))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with ComposeError
pub type ComposeResult<T> = Result<T, ComposeError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
