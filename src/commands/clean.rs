// src/commands/clean.rs
//! Handler for `modshift clean`

use anyhow::Result;
use modshift::cleanup::{self, CleanupOutcome};
use modshift::prompt;
use std::path::Path;
use tracing::info;

/// Delete the manifested transitional files after one confirmation
pub fn cmd_clean(root: &str, manifest_path: Option<&str>, yes: bool) -> Result<()> {
    let root = Path::new(root);
    let manifest = super::load_manifest(root, manifest_path)?;

    println!("Migration cleanup");
    println!("{}", "=".repeat(50));

    let plan = cleanup::plan(root, &manifest);

    if !plan.to_remove.is_empty() {
        println!("\nFiles to delete ({}):", plan.to_remove.len());
        for entry in &plan.to_remove {
            println!("  - {}", entry);
        }
    }
    if !plan.already_absent.is_empty() {
        println!("\nAlready absent ({}):", plan.already_absent.len());
        for entry in &plan.already_absent {
            println!("  ~ {}", entry);
        }
    }
    println!("\nPreserved:");
    for path in &manifest.preserved {
        println!("  + {}", path);
    }

    if plan.is_empty() {
        println!("\nNothing to delete.");
        return Ok(());
    }

    println!();
    if !yes && !prompt::confirm("Delete these files? There is no undo.")? {
        println!("Aborted. Nothing was deleted.");
        return Ok(());
    }

    let report = cleanup::execute(root, &manifest);

    println!();
    for (entry, outcome) in &report.entries {
        match outcome {
            CleanupOutcome::Deleted => {
                info!("Deleted {}", entry);
                println!("  - {} deleted", entry);
            }
            CleanupOutcome::AlreadyAbsent => {}
            CleanupOutcome::Failed(cause) => println!("  ! {} ({})", entry, cause),
        }
    }

    println!("\n{} file(s) deleted", report.deleted());
    if report.failed() > 0 {
        println!("{} file(s) could not be deleted, see above", report.failed());
    } else {
        println!("Cleanup complete. The migration is final.");
    }

    Ok(())
}
