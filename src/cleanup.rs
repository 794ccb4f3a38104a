// src/cleanup.rs

//! Final cleanup - removes the transitional files once the migration holds.
//!
//! A plan is computed first so the command can show exactly what will be
//! deleted before asking for confirmation. Deletion failures are recorded
//! per file and never halt the run; there is no undo.

use crate::manifest::MigrationManifest;
use std::path::Path;

/// What will happen to the manifested cleanup entries
#[derive(Debug)]
pub struct CleanupPlan {
    /// Entries that exist and will be deleted
    pub to_remove: Vec<String>,
    /// Entries already gone
    pub already_absent: Vec<String>,
}

impl CleanupPlan {
    /// True when there is nothing left to delete
    pub fn is_empty(&self) -> bool {
        self.to_remove.is_empty()
    }
}

/// Result of one deletion attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
    Deleted,
    AlreadyAbsent,
    Failed(String),
}

/// Per-file outcomes of a cleanup run, in manifest order
#[derive(Debug)]
pub struct CleanupReport {
    pub entries: Vec<(String, CleanupOutcome)>,
}

impl CleanupReport {
    pub fn deleted(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, o)| *o == CleanupOutcome::Deleted)
            .count()
    }

    pub fn already_absent(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, o)| *o == CleanupOutcome::AlreadyAbsent)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, o)| matches!(o, CleanupOutcome::Failed(_)))
            .count()
    }
}

/// Split the manifested cleanup entries into present and absent
pub fn plan(root: &Path, manifest: &MigrationManifest) -> CleanupPlan {
    let (to_remove, already_absent) = manifest
        .cleanup
        .iter()
        .cloned()
        .partition(|entry| root.join(entry).exists());

    CleanupPlan {
        to_remove,
        already_absent,
    }
}

/// Delete every manifested cleanup entry that exists
pub fn execute(root: &Path, manifest: &MigrationManifest) -> CleanupReport {
    let entries = manifest
        .cleanup
        .iter()
        .map(|entry| {
            let path = root.join(entry);
            let outcome = if !path.exists() {
                CleanupOutcome::AlreadyAbsent
            } else {
                match std::fs::remove_file(&path) {
                    Ok(()) => CleanupOutcome::Deleted,
                    Err(err) => CleanupOutcome::Failed(err.to_string()),
                }
            };
            (entry.clone(), outcome)
        })
        .collect();

    CleanupReport { entries }
}
