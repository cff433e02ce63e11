//! Error handling for the animgen code generation library.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. It uses `thiserror` for easy
//! error handling and implements conversions from common error types.
//!
//! Generation preconditions (an empty parameter name, no usable class name)
//! surface as [`Error::Generation`] before any text is produced. Data-quality
//! problems such as unsupported parameter kinds are not errors at all; they
//! are reported through [`crate::diagnostics::DiagnosticSink`].
//!
//! # Examples
//!
//! ```
//! use animgen_core::error::{Error, Result};
//!
//! fn might_fail(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(Error::generation("parameter name is empty"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(might_fail("").is_err());
//! ```

use thiserror::Error;

/// Result type for animgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for animgen operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed controller description
    #[error("Controller error: {0}")]
    Controller(String),

    /// Generation precondition violated by the caller
    #[error("Generation error: {0}")]
    Generation(String),

    /// A generated identifier is declared twice
    #[error("'{first}' and '{second}' both map to identifier '{identifier}'")]
    NameCollision {
        first: String,
        second: String,
        identifier: String,
    },
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new controller error
    pub fn controller<S: Into<String>>(msg: S) -> Self {
        Self::Controller(msg.into())
    }

    /// Create a new generation error
    pub fn generation<S: Into<String>>(msg: S) -> Self {
        Self::Generation(msg.into())
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Config(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Config(s)
    }
}
