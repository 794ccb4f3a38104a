// src/commands/init.rs
//! Handler for `modshift init`

use anyhow::{Context, Result};
use modshift::manifest::{MigrationManifest, DEFAULT_MANIFEST_PATH};
use std::path::{Path, PathBuf};
use tracing::info;

/// Write the default migration manifest for editing
pub fn cmd_init(root: &str, manifest_path: Option<&str>, force: bool) -> Result<()> {
    let root = Path::new(root);
    let path = match manifest_path {
        Some(path) => PathBuf::from(path),
        None => root.join(DEFAULT_MANIFEST_PATH),
    };

    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let manifest = MigrationManifest::default();
    let content = manifest
        .to_toml()
        .context("Failed to serialize default manifest")?;
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Wrote default manifest to {}", path.display());

    println!("Created {}", path.display());
    println!(
        "  {} pages, {} module files, {} cleanup entries",
        manifest.pages.len(),
        manifest.modules.len(),
        manifest.cleanup.len()
    );
    println!("\nEdit it to match the site, then run 'modshift rewrite'.");

    Ok(())
}
