//! Parameter types for the scaffolding engine.
//!
//! [`ProjectConfig`] is the full parameter record: the project name (used as
//! the output root directory name) and the module path (embedded verbatim
//! into rendered output). Both are opaque strings — beyond non-emptiness,
//! no path-safety or module well-formedness checks are performed.

use std::fmt;

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed project name. Doubles as the output root directory name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(pub String);

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ProjectName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProjectName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A strongly-typed module/import path (e.g. `github.com/org/project`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModulePath(pub String);

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ModulePath {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ModulePath {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// ProjectConfig
// ---------------------------------------------------------------------------

/// The parameter record supplied by the caller. Constructed once, read-only
/// for the remainder of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub name: ProjectName,
    pub module: ModulePath,
}

impl ProjectConfig {
    /// Build a config from raw strings. No validation happens here; call
    /// [`ProjectConfig::validate`] before generation.
    pub fn new(name: impl Into<ProjectName>, module: impl Into<ModulePath>) -> Self {
        Self {
            name: name.into(),
            module: module.into(),
        }
    }

    /// Check that both fields are non-empty.
    ///
    /// Returns [`ConfigError::MissingArgument`] naming the first empty field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.0.is_empty() {
            return Err(ConfigError::MissingArgument { field: "name" });
        }
        if self.module.0.is_empty() {
            return Err(ConfigError::MissingArgument { field: "module" });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
