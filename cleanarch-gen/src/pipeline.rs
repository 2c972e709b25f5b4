//! Generation pipeline.
//!
//! Sequence: validate parameters → create root → create planned directories
//! → render and write every registry entry in declaration order → report.
//! The first renderer or filesystem error halts the run carrying the
//! underlying cause; validation failure touches nothing on disk.

use std::path::{Path, PathBuf};

use serde::Serialize;

use cleanarch_core::ProjectConfig;
use cleanarch_renderer::{engine, TemplateRegistry};

use crate::error::GenerateError;
use crate::materializer::{self, Overwrite, WriteOutcome};

/// Summary of a completed generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    /// Absolute or caller-relative path of the generated root.
    pub root: PathBuf,
    /// Relative paths written, in registry declaration order.
    pub written: Vec<String>,
    /// Relative paths left untouched under [`Overwrite::SkipExisting`].
    pub skipped: Vec<String>,
}

/// Generate a project tree at `parent_dir/<config.name>`.
///
/// No component reads back from disk during generation, and the process
/// working directory is never consulted or changed.
pub fn generate(
    config: &ProjectConfig,
    parent_dir: &Path,
    registry: &TemplateRegistry,
    overwrite: Overwrite,
) -> Result<GenerateReport, GenerateError> {
    config.validate()?;

    let root = parent_dir.join(&config.name.0);
    materializer::create_root(&root)?;
    materializer::create_directories(&root, registry.plan())?;

    let mut written = Vec::new();
    let mut skipped = Vec::new();
    for entry in registry.entries() {
        let content = engine::render(&entry.body, config).map_err(|source| {
            GenerateError::Render {
                path: PathBuf::from(&entry.relative_path),
                source,
            }
        })?;
        match materializer::write_file(&root, &entry.relative_path, &content, overwrite)? {
            WriteOutcome::Written { .. } => written.push(entry.relative_path.clone()),
            WriteOutcome::Skipped { .. } => skipped.push(entry.relative_path.clone()),
        }
    }

    tracing::info!(
        "generated '{}': {} written, {} skipped",
        config.name,
        written.len(),
        skipped.len()
    );
    Ok(GenerateReport {
        root,
        written,
        skipped,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
