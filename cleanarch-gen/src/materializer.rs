//! Directory and file materialization.
//!
//! All functions take an explicit root path — there is no ambient working
//! directory. Directory creation is idempotent; file writes truncate any
//! pre-existing file unless [`Overwrite::SkipExisting`] is selected.

use std::path::{Path, PathBuf};

use cleanarch_renderer::DirectoryPlan;

use crate::error::{io_err, GenerateError};

// ---------------------------------------------------------------------------
// Overwrite policy
// ---------------------------------------------------------------------------

/// What to do when a target file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Truncate and rewrite without warning (safe regeneration).
    #[default]
    Always,
    /// Leave the existing file untouched and report it skipped.
    SkipExisting,
}

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File was created or truncated and fully written.
    Written { path: PathBuf },
    /// File already existed and `SkipExisting` was in effect.
    Skipped { path: PathBuf },
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Create the top-level output directory.
///
/// Idempotent: an existing directory at `root` is fine. Fails if the parent
/// path is missing, permissions are insufficient, or a non-directory entry
/// already occupies `root`.
pub fn create_root(root: &Path) -> Result<(), GenerateError> {
    std::fs::create_dir_all(root).map_err(|e| io_err(root, e))?;
    tracing::debug!("root ready: {}", root.display());
    Ok(())
}

/// Create every planned directory under `root`, idempotently, in plan order.
/// The first failure aborts the remaining creations.
pub fn create_directories(root: &Path, plan: &DirectoryPlan) -> Result<(), GenerateError> {
    for dir in plan.dirs() {
        let path = root.join(dir);
        std::fs::create_dir_all(&path).map_err(|e| io_err(&path, e))?;
        tracing::debug!("dir ready: {}", path.display());
    }
    Ok(())
}

/// Write `content` in full to `root/relative_path`.
///
/// The parent directory is created if missing (plans may omit it). The file
/// handle is released on every exit path, including write failure.
pub fn write_file(
    root: &Path,
    relative_path: &str,
    content: &str,
    overwrite: Overwrite,
) -> Result<WriteOutcome, GenerateError> {
    let path = root.join(relative_path);

    if overwrite == Overwrite::SkipExisting && path.exists() {
        tracing::debug!("skipped (exists): {}", path.display());
        return Ok(WriteOutcome::Skipped { path });
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    std::fs::write(&path, content).map_err(|e| io_err(&path, e))?;

    tracing::info!("wrote: {}", path.display());
    Ok(WriteOutcome::Written { path })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
