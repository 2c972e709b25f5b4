//! Template registry and directory plan.
//!
//! # Builtin layout
//!
//! ```text
//! <name>/
//!   cmd/api/main.go
//!   internal/domain/user.go
//!   internal/usecase/user_usecase.go
//!   internal/repository/user_repository.go
//!   internal/handler/user_handler.go
//!   pkg/config/config.go
//!   pkg/database/mongodb.go
//!   pkg/auth/jwt.go
//!   go.mod
//!   .env
//! ```
//!
//! Entry order is declaration order and is the order files are written in.

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const BUILTIN: &[(&str, &str)] = &[
    ("cmd/api/main.go", include_str!("templates/main.go.tmpl")),
    ("internal/domain/user.go", include_str!("templates/user.go.tmpl")),
    (
        "internal/usecase/user_usecase.go",
        include_str!("templates/user_usecase.go.tmpl"),
    ),
    (
        "internal/repository/user_repository.go",
        include_str!("templates/user_repository.go.tmpl"),
    ),
    (
        "internal/handler/user_handler.go",
        include_str!("templates/user_handler.go.tmpl"),
    ),
    ("pkg/config/config.go", include_str!("templates/config.go.tmpl")),
    ("pkg/database/mongodb.go", include_str!("templates/mongodb.go.tmpl")),
    ("pkg/auth/jwt.go", include_str!("templates/jwt.go.tmpl")),
    ("go.mod", include_str!("templates/go.mod.tmpl")),
    (".env", include_str!("templates/env.tmpl")),
];

// ---------------------------------------------------------------------------
// TemplateEntry
// ---------------------------------------------------------------------------

/// A single output file: slash-separated path relative to the generation
/// root, plus the template body to render into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub relative_path: String,
    pub body: String,
}

impl TemplateEntry {
    pub fn new(relative_path: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            body: body.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// DirectoryPlan
// ---------------------------------------------------------------------------

/// Ordered list of relative directories that must exist before any file is
/// written. Computed once from the entry paths; shared by all components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPlan {
    dirs: Vec<String>,
}

impl DirectoryPlan {
    /// Collect the non-empty parent directory of every entry path, first
    /// occurrence wins. Root-level files (`go.mod`, `.env`) contribute no
    /// directory. Directories are created with `create_dir_all`, so parents
    /// of planned paths need no separate plan entries.
    pub fn for_entries(entries: &[TemplateEntry]) -> Self {
        let mut dirs: Vec<String> = Vec::new();
        for entry in entries {
            if let Some((parent, _file)) = entry.relative_path.rsplit_once('/') {
                if !parent.is_empty() && !dirs.iter().any(|d| d == parent) {
                    dirs.push(parent.to_owned());
                }
            }
        }
        Self { dirs }
    }

    pub fn dirs(&self) -> &[String] {
        &self.dirs
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

// ---------------------------------------------------------------------------
// TemplateRegistry
// ---------------------------------------------------------------------------

/// Immutable mapping from relative output path to template body, plus the
/// [`DirectoryPlan`] derived from it. Constructed once; never mutated.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    entries: Vec<TemplateEntry>,
    plan: DirectoryPlan,
}

impl TemplateRegistry {
    /// Build a registry from arbitrary entries, preserving their order.
    pub fn new(entries: Vec<TemplateEntry>) -> Self {
        let plan = DirectoryPlan::for_entries(&entries);
        Self { entries, plan }
    }

    /// The builtin clean-architecture service skeleton (10 entries).
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN
                .iter()
                .map(|(path, body)| TemplateEntry::new(*path, *body))
                .collect(),
        )
    }

    /// Entries in declaration order — the order files are written in.
    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    /// The directory plan computed at construction.
    pub fn plan(&self) -> &DirectoryPlan {
        &self.plan
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_ten_entries() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(registry.len(), 10);
    }

    #[test]
    fn builtin_plan_is_the_eight_layer_directories() {
        let registry = TemplateRegistry::builtin();
        let expected = [
            "cmd/api",
            "internal/domain",
            "internal/usecase",
            "internal/repository",
            "internal/handler",
            "pkg/config",
            "pkg/database",
            "pkg/auth",
        ];
        assert_eq!(registry.plan().dirs(), &expected);
    }

    #[test]
    fn builtin_first_entry_is_the_entry_point() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(registry.entries()[0].relative_path, "cmd/api/main.go");
    }

    #[test]
    fn root_level_files_contribute_no_directory() {
        let entries = vec![
            TemplateEntry::new("go.mod", "module x"),
            TemplateEntry::new(".env", "KEY=value"),
        ];
        let plan = DirectoryPlan::for_entries(&entries);
        assert!(plan.is_empty());
    }

    #[test]
    fn shared_parent_appears_once_in_plan() {
        let entries = vec![
            TemplateEntry::new("pkg/config/config.go", ""),
            TemplateEntry::new("pkg/config/defaults.go", ""),
            TemplateEntry::new("pkg/auth/jwt.go", ""),
        ];
        let plan = DirectoryPlan::for_entries(&entries);
        assert_eq!(plan.dirs(), &["pkg/config", "pkg/auth"]);
    }

    #[test]
    fn custom_registry_keeps_declaration_order() {
        let registry = TemplateRegistry::new(vec![
            TemplateEntry::new("b/second.txt", "2"),
            TemplateEntry::new("a/first.txt", "1"),
        ]);
        assert_eq!(registry.entries()[0].relative_path, "b/second.txt");
        assert_eq!(registry.plan().dirs(), &["b", "a"]);
    }
}
