//! Error types for cleanarch-core.

use thiserror::Error;

/// All errors that can arise from parameter validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required parameter was missing or empty. Detected before any I/O;
    /// the filesystem is untouched when this is returned.
    #[error("missing required argument '{field}'")]
    MissingArgument { field: &'static str },
}
