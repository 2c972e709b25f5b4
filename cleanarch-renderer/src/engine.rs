//! Placeholder substitution engine.
//!
//! A marker is `{{` … `}}`; the interior, after trimming ASCII whitespace,
//! must be `.Name` or `.Module`. Every occurrence is replaced with the
//! corresponding [`ProjectConfig`] field; text outside markers is copied
//! byte-for-byte. Rendering is deterministic — no environment, timestamps
//! or randomness.

use cleanarch_core::ProjectConfig;

use crate::error::RenderError;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Render a template body against the parameter record.
///
/// Pure function: the same `(body, config)` pair always yields the same
/// output. Errors abort only this body's rendering; the caller decides
/// whether to continue with other entries.
pub fn render(body: &str, config: &ProjectConfig) -> Result<String, RenderError> {
    let mut out = String::with_capacity(body.len() + 64);
    let mut rest = body;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        // Byte offset of the marker in the original body, for diagnostics.
        let offset = body.len() - rest.len() + start;

        let after = &rest[start + OPEN.len()..];
        let end = after
            .find(CLOSE)
            .ok_or(RenderError::UnterminatedMarker { offset })?;

        let marker = after[..end].trim();
        match marker {
            ".Name" => out.push_str(&config.name.0),
            ".Module" => out.push_str(&config.module.0),
            other => {
                return Err(RenderError::UnknownField {
                    marker: other.to_owned(),
                })
            }
        }
        rest = &after[end + CLOSE.len()..];
    }
    out.push_str(rest);

    // The registry is static and under the generator's control; a marker
    // surviving substitution is a defect, not caller input.
    debug_assert!(
        !out.contains("{{."),
        "rendered output still contains an unresolved marker"
    );
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
