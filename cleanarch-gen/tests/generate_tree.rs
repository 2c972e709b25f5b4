//! End-to-end generation tests against a real temporary filesystem.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

use cleanarch_core::ProjectConfig;
use cleanarch_gen::{generate, GenerateError, Overwrite};
use cleanarch_renderer::TemplateRegistry;

const EXPECTED_FILES: [&str; 10] = [
    "cmd/api/main.go",
    "internal/domain/user.go",
    "internal/usecase/user_usecase.go",
    "internal/repository/user_repository.go",
    "internal/handler/user_handler.go",
    "pkg/config/config.go",
    "pkg/database/mongodb.go",
    "pkg/auth/jwt.go",
    "go.mod",
    ".env",
];

fn config() -> ProjectConfig {
    ProjectConfig::new("shop", "example.com/org/shop")
}

fn collect_files(root: &Path, prefix: &Path, out: &mut BTreeSet<String>) {
    for entry in fs::read_dir(root).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();
        let rel = path.strip_prefix(prefix).unwrap();
        if path.is_dir() {
            collect_files(&path, prefix, out);
        } else {
            out.insert(rel.to_string_lossy().replace('\\', "/"));
        }
    }
}

#[test]
fn successful_run_produces_exactly_the_scaffold_tree() {
    let tmp = TempDir::new().unwrap();
    let report = generate(
        &config(),
        tmp.path(),
        &TemplateRegistry::builtin(),
        Overwrite::Always,
    )
    .expect("generate");

    let root = tmp.path().join("shop");
    assert_eq!(report.root, root);

    let mut actual = BTreeSet::new();
    collect_files(&root, &root, &mut actual);
    let expected: BTreeSet<String> = EXPECTED_FILES.iter().map(|s| s.to_string()).collect();
    assert_eq!(actual, expected, "tree must contain the ten files and nothing else");

    for dir in [
        "cmd/api",
        "internal/domain",
        "internal/usecase",
        "internal/repository",
        "internal/handler",
        "pkg/config",
        "pkg/database",
        "pkg/auth",
    ] {
        assert!(root.join(dir).is_dir(), "missing directory {dir}");
    }
}

#[test]
fn no_generated_file_contains_an_unresolved_marker() {
    let tmp = TempDir::new().unwrap();
    generate(
        &config(),
        tmp.path(),
        &TemplateRegistry::builtin(),
        Overwrite::Always,
    )
    .expect("generate");

    for rel in EXPECTED_FILES {
        let content = fs::read_to_string(tmp.path().join("shop").join(rel)).unwrap();
        assert!(
            !content.contains("{{."),
            "{rel} contains an unresolved marker"
        );
    }
}

#[test]
fn shop_scenario_substitutes_the_module_path() {
    let tmp = TempDir::new().unwrap();
    generate(
        &config(),
        tmp.path(),
        &TemplateRegistry::builtin(),
        Overwrite::Always,
    )
    .expect("generate");

    let main_go = fs::read_to_string(tmp.path().join("shop/cmd/api/main.go")).unwrap();
    assert!(main_go.contains("example.com/org/shop/internal/handler"));

    let go_mod = fs::read_to_string(tmp.path().join("shop/go.mod")).unwrap();
    assert!(go_mod.lines().next().unwrap().contains("example.com/org/shop"));
}

#[test]
fn regenerating_is_a_no_op_for_final_contents() {
    let tmp = TempDir::new().unwrap();
    let registry = TemplateRegistry::builtin();

    generate(&config(), tmp.path(), &registry, Overwrite::Always).expect("first run");
    let before: Vec<String> = EXPECTED_FILES
        .iter()
        .map(|rel| fs::read_to_string(tmp.path().join("shop").join(rel)).unwrap())
        .collect();

    generate(&config(), tmp.path(), &registry, Overwrite::Always)
        .expect("second run into the existing tree must not fail");
    let after: Vec<String> = EXPECTED_FILES
        .iter()
        .map(|rel| fs::read_to_string(tmp.path().join("shop").join(rel)).unwrap())
        .collect();

    assert_eq!(before, after);
}

#[test]
fn existing_file_at_root_path_fails_with_zero_output() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("shop"), "not a directory").unwrap();

    let err = generate(
        &config(),
        tmp.path(),
        &TemplateRegistry::builtin(),
        Overwrite::Always,
    )
    .expect_err("root creation must fail");
    assert!(matches!(err, GenerateError::Io { .. }));

    // The blocking file is the only entry; no subdirectories or files appeared.
    let entries: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert!(tmp.path().join("shop").is_file());
}
