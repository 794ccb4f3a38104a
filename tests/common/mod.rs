// tests/common/mod.rs

//! Shared test fixtures for integration tests.

use modshift::manifest::MigrationManifest;
use tempfile::TempDir;

/// Lay out a pre-migration site matching the manifest.
///
/// Every page still carries the legacy script tag; the module tree, backup
/// and descriptor are already in place, as they are right before the rewrite
/// step. Returns the TempDir - keep it alive for the duration of the test.
pub fn setup_legacy_site(manifest: &MigrationManifest) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    for directory in &manifest.directories {
        std::fs::create_dir_all(root.join(directory)).unwrap();
    }

    for module in &manifest.modules {
        let path = root.join(&module.path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, format!("// {}\nexport {{}};\n", module.description)).unwrap();
    }

    for page in &manifest.pages {
        let title = page.trim_end_matches(".html");
        std::fs::write(
            root.join(page),
            format!(
                "<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n    <meta charset=\"UTF-8\">\n    \
                 <title>{title}</title>\n</head>\n<body>\n    <main>{title}</main>\n    \
                 <script src=\"{legacy}\"></script>\n</body>\n</html>\n",
                title = title,
                legacy = manifest.legacy_script,
            ),
        )
        .unwrap();
    }

    std::fs::write(
        root.join(&manifest.legacy_script),
        "// monolithic bundle\nconsole.log('legacy');\n",
    )
    .unwrap();
    std::fs::write(
        root.join(&manifest.backup_file),
        "// monolithic bundle\nconsole.log('legacy');\n",
    )
    .unwrap();
    std::fs::write(
        root.join(&manifest.descriptor_file),
        r#"{"name": "oudar-avocats", "version": "2.0.0", "type": "module"}"#,
    )
    .unwrap();
    std::fs::write(
        root.join(&manifest.test_page),
        format!(
            "<script type=\"module\" src=\"{}\"></script>\n",
            manifest.entry_point
        ),
    )
    .unwrap();

    // Remaining transitional files so cleanup has real work to do
    for entry in &manifest.cleanup {
        let path = root.join(entry);
        if !path.exists() {
            std::fs::write(&path, "# retired helper\n").unwrap();
        }
    }

    dir
}
