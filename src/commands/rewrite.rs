// src/commands/rewrite.rs
//! Handler for `modshift rewrite`

use anyhow::Result;
use modshift::rewrite::{self, RewriteOutcome};
use std::path::Path;
use tracing::info;

/// Rewrite every manifested page to load the module entry point
pub fn cmd_rewrite(root: &str, manifest_path: Option<&str>, dry_run: bool) -> Result<()> {
    let root = Path::new(root);
    let manifest = super::load_manifest(root, manifest_path)?;

    info!(
        "Rewriting {} pages ({} -> {})",
        manifest.pages.len(),
        manifest.legacy_script,
        manifest.entry_point
    );

    println!("Updating HTML files to use ES modules");
    println!("{}", "=".repeat(50));

    let report = rewrite::run(root, &manifest, dry_run)?;

    for (page, outcome) in &report.entries {
        match outcome {
            RewriteOutcome::Updated => println!("  + {}", page),
            RewriteOutcome::Unchanged => println!("  - {} (no legacy tag)", page),
            RewriteOutcome::Missing => println!("  ~ {} (not found)", page),
            RewriteOutcome::Failed(cause) => println!("  ! {} ({})", page, cause),
        }
    }

    println!(
        "\n{} updated, {} unchanged, {} missing",
        report.updated(),
        report.unchanged(),
        report.missing()
    );
    if report.failed() > 0 {
        println!("{} page(s) failed, see above", report.failed());
    }

    if dry_run {
        println!("\nDry run - no files were modified.");
        println!("Run without --dry-run to apply these changes.");
    } else if report.updated() > 0 {
        println!("\nNext: preview with 'modshift serve', then run 'modshift validate'.");
    }

    Ok(())
}
