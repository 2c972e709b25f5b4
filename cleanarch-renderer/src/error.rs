//! Error types for cleanarch-renderer.

use thiserror::Error;

/// All errors that can arise from template rendering.
///
/// The builtin registry is static and ships with the engine, so either
/// variant indicates a defect in the engine itself rather than caller
/// input. They are surfaced, never silently skipped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A `{{` with no closing `}}` in the template body.
    #[error("unterminated placeholder marker at byte {offset}")]
    UnterminatedMarker { offset: usize },

    /// A marker naming anything other than `.Name` or `.Module`.
    #[error("unknown template field '{marker}'; expected .Name or .Module")]
    UnknownField { marker: String },
}
