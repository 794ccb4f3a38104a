// src/commands/mod.rs
//! Command handlers for the modshift CLI

mod clean;
mod init;
mod rewrite;
mod serve;
mod validate;

pub use clean::cmd_clean;
pub use init::cmd_init;
pub use rewrite::cmd_rewrite;
pub use serve::cmd_serve;
pub use validate::cmd_validate;

use anyhow::{Context, Result};
use modshift::manifest::{self, MigrationManifest};
use std::path::Path;

/// Resolve the manifest governing a run
///
/// An explicit `--manifest` path must exist; otherwise `<root>/migration.toml`
/// is used when present and the built-in defaults when not.
pub(crate) fn load_manifest(root: &Path, explicit: Option<&str>) -> Result<MigrationManifest> {
    let explicit = explicit.map(Path::new);
    manifest::load_or_default(root, explicit).with_context(|| match explicit {
        Some(path) => format!("Failed to load manifest {}", path.display()),
        None => format!(
            "Failed to load {}",
            root.join(manifest::DEFAULT_MANIFEST_PATH).display()
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_manifest_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = load_manifest(dir.path(), None).unwrap();
        assert_eq!(manifest.legacy_script, "script.js");
    }

    #[test]
    fn test_load_manifest_explicit_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let err = load_manifest(dir.path(), missing.to_str()).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }
}
