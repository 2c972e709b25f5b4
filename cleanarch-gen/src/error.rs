//! Error types for cleanarch-gen.

use std::path::PathBuf;

use thiserror::Error;

use cleanarch_core::ConfigError;
use cleanarch_renderer::RenderError;

/// All errors that can arise from a generation run. Every variant is fatal
/// to the current invocation; there is no warning tier.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Parameter validation failure — detected before any I/O.
    #[error("invalid parameters: {0}")]
    Config(#[from] ConfigError),

    /// A template failed to render, with the output path it was meant for.
    #[error("failed to render {path}: {source}")]
    Render {
        path: PathBuf,
        #[source]
        source: RenderError,
    },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`GenerateError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> GenerateError {
    GenerateError::Io {
        path: path.into(),
        source,
    }
}
