// src/commands/validate.rs
//! Handler for `modshift validate`

use anyhow::Result;
use modshift::classify::PageClass;
use modshift::validate::{self, DescriptorCheck, PageStatus};
use std::path::Path;
use tracing::info;

/// Run the five migration checks and report per item
pub fn cmd_validate(root: &str, manifest_path: Option<&str>) -> Result<()> {
    let root = Path::new(root);
    let manifest = super::load_manifest(root, manifest_path)?;

    info!("Validating migration under {}", root.display());

    println!("Migration validation");
    println!("{}", "=".repeat(50));

    let report = validate::run(root, &manifest);

    println!("\nDirectory structure:");
    for (dir, ok) in &report.directories {
        if *ok {
            println!("  + {}/", dir);
        } else {
            println!("  ! MISSING: {}/", dir);
        }
    }

    println!("\nModule files:");
    for (entry, ok) in &report.modules {
        if *ok {
            println!("  + {} ({})", entry.path, entry.description);
        } else {
            println!("  ! MISSING: {} ({})", entry.path, entry.description);
        }
    }

    println!("\nHTML pages:");
    for (page, status) in &report.pages.entries {
        match status {
            PageStatus::Classified(PageClass::Updated) => {
                println!("  + {} - uses ES modules", page);
            }
            PageStatus::Classified(PageClass::Legacy) => {
                println!("  ! {} - still references {}", page, manifest.legacy_script);
            }
            PageStatus::Classified(PageClass::Unknown) => {
                println!("  ~ {} - no script reference found", page);
            }
            PageStatus::Missing => println!("  ! MISSING: {}", page),
            PageStatus::Unreadable(cause) => println!("  ! {} ({})", page, cause),
        }
    }

    println!("\nBackup:");
    if report.backup.1 {
        println!("  + {}", report.backup.0);
    } else {
        println!("  ! MISSING: {}", report.backup.0);
    }

    println!("\nDescriptor:");
    match &report.descriptor {
        DescriptorCheck::Ok(descriptor) => {
            println!("  + {}", manifest.descriptor_file);
            println!("      name:    {}", descriptor.name());
            println!("      version: {}", descriptor.version());
            println!("      type:    {}", descriptor.kind());
        }
        DescriptorCheck::Missing => println!("  ! MISSING: {}", manifest.descriptor_file),
        DescriptorCheck::Invalid(cause) => {
            println!("  ! {} ({})", manifest.descriptor_file, cause);
        }
    }

    println!("\n{}", "=".repeat(50));
    for (name, ok) in report.checks() {
        println!("  [{}] {}", if ok { "PASS" } else { "FAIL" }, name);
    }
    println!(
        "\n{}/{} checks passed ({}%)",
        report.passed_count(),
        report.checks().len(),
        report.percentage()
    );

    if report.success() {
        println!("\nMigration validated. The site is ready to serve.");
        Ok(())
    } else {
        println!("\nFix the items above and re-run 'modshift validate'.");
        Err(anyhow::anyhow!("Validation failed"))
    }
}
