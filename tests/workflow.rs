// tests/workflow.rs

//! Full migration workflow tests: rewrite, validate, clean.

mod common;

use modshift::manifest::MigrationManifest;
use modshift::{cleanup, manifest, rewrite, validate};

#[test]
fn test_full_migration_workflow() {
    let manifest = MigrationManifest::default();
    let site = common::setup_legacy_site(&manifest);
    let root = site.path();

    // Before the rewrite the validator flags every page as legacy
    let before = validate::run(root, &manifest);
    assert!(!before.success());
    assert!(!before.pages.passed());
    assert_eq!(before.pages.updated(), 0);

    // Rewrite every page
    let first_pass = rewrite::run(root, &manifest, false).unwrap();
    assert_eq!(first_pass.updated(), manifest.pages.len());
    assert_eq!(first_pass.missing(), 0);
    assert_eq!(first_pass.failed(), 0);

    // All five checks pass now
    let after = validate::run(root, &manifest);
    assert!(after.success(), "failed checks: {:?}", after.checks());
    assert_eq!(after.percentage(), 100);

    // A second pass changes nothing
    let second_pass = rewrite::run(root, &manifest, false).unwrap();
    assert_eq!(second_pass.updated(), 0);
    assert_eq!(second_pass.unchanged(), manifest.pages.len());

    // Cleanup removes the transitional files and nothing else
    let cleaned = cleanup::execute(root, &manifest);
    assert_eq!(cleaned.failed(), 0);
    assert_eq!(cleaned.deleted(), manifest.cleanup.len());
    assert!(!root.join(&manifest.legacy_script).exists());
    assert!(root.join(&manifest.backup_file).exists());
    assert!(root.join(&manifest.entry_point).exists());

    // The tree still validates after cleanup
    let final_report = validate::run(root, &manifest);
    assert!(final_report.success());
}

#[test]
fn test_dry_run_then_real_run() {
    let manifest = MigrationManifest::default();
    let site = common::setup_legacy_site(&manifest);
    let root = site.path();

    let preview = rewrite::run(root, &manifest, true).unwrap();
    assert_eq!(preview.updated(), manifest.pages.len());

    // Nothing on disk changed
    let still_legacy = validate::run(root, &manifest);
    assert!(!still_legacy.pages.passed());

    let applied = rewrite::run(root, &manifest, false).unwrap();
    assert_eq!(applied.updated(), manifest.pages.len());
    assert!(validate::run(root, &manifest).pages.passed());
}

#[test]
fn test_custom_manifest_drives_the_whole_run() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    std::fs::write(
        root.join("migration.toml"),
        r#"
legacy_script = "bundle.js"
entry_point = "app/index.js"
backup_file = "bundle.js.backup"
test_page = "preview.html"
pages = ["index.html", "about.html"]
validated_pages = ["index.html"]
directories = ["app"]
cleanup = ["bundle.js"]
preserved = ["bundle.js.backup"]

[[modules]]
path = "app/index.js"
description = "Entry point"
"#,
    )
    .unwrap();

    let manifest = manifest::load_or_default(root, None).unwrap();
    assert_eq!(manifest.legacy_script, "bundle.js");

    std::fs::create_dir_all(root.join("app")).unwrap();
    std::fs::write(root.join("app/index.js"), "export {};\n").unwrap();
    std::fs::write(
        root.join("index.html"),
        r#"<script src="bundle.js" defer></script>"#,
    )
    .unwrap();
    std::fs::write(root.join("about.html"), "<p>no scripts here</p>").unwrap();
    std::fs::write(root.join("bundle.js"), "// legacy\n").unwrap();
    std::fs::write(root.join("bundle.js.backup"), "// legacy\n").unwrap();
    std::fs::write(
        root.join("package.json"),
        r#"{"name": "custom", "version": "1.0.0", "type": "module"}"#,
    )
    .unwrap();

    let report = rewrite::run(root, &manifest, false).unwrap();
    assert_eq!(report.updated(), 1);
    assert_eq!(report.unchanged(), 1);

    let content = std::fs::read_to_string(root.join("index.html")).unwrap();
    assert!(content.contains(r#"<script type="module" src="app/index.js"></script>"#));
    assert!(!content.contains("bundle.js\" defer"));

    let validation = validate::run(root, &manifest);
    assert!(validation.success(), "failed checks: {:?}", validation.checks());

    let cleaned = cleanup::execute(root, &manifest);
    assert_eq!(cleaned.deleted(), 1);
    assert!(!root.join("bundle.js").exists());
    assert!(root.join("bundle.js.backup").exists());
}

#[test]
fn test_missing_pages_do_not_abort_the_rewrite() {
    let manifest = MigrationManifest::default();
    let site = common::setup_legacy_site(&manifest);
    let root = site.path();

    std::fs::remove_file(root.join("blog.html")).unwrap();
    std::fs::remove_file(root.join("consultation.html")).unwrap();

    let report = rewrite::run(root, &manifest, false).unwrap();
    assert_eq!(report.missing(), 2);
    assert_eq!(report.updated(), manifest.pages.len() - 2);
    assert_eq!(report.failed(), 0);
}
