// src/validate.rs

//! Post-migration validation - five independent checks over the project tree.
//!
//! Each check walks one manifested list and records a per-item result; the
//! report aggregates them into named booleans, a pass count and an overall
//! verdict. Checks never abort the run: a broken descriptor or an unreadable
//! page is captured in the report and validation continues.

use crate::classify::{self, PageClass};
use crate::descriptor::{self, PackageDescriptor};
use crate::manifest::{MigrationManifest, ModuleEntry};
use std::path::Path;

/// Classification result for one validated page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStatus {
    Classified(PageClass),
    /// File does not exist
    Missing,
    /// File exists but could not be read
    Unreadable(String),
}

/// Per-page results of the HTML-update check
#[derive(Debug)]
pub struct HtmlCheck {
    pub entries: Vec<(String, PageStatus)>,
}

impl HtmlCheck {
    /// True only if every page is present and classified updated
    pub fn passed(&self) -> bool {
        self.entries
            .iter()
            .all(|(_, status)| matches!(status, PageStatus::Classified(PageClass::Updated)))
    }

    pub fn updated(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, s)| matches!(s, PageStatus::Classified(PageClass::Updated)))
            .count()
    }
}

/// Result of the descriptor check
#[derive(Debug)]
pub enum DescriptorCheck {
    Ok(PackageDescriptor),
    Missing,
    Invalid(String),
}

impl DescriptorCheck {
    pub fn passed(&self) -> bool {
        matches!(self, DescriptorCheck::Ok(_))
    }
}

/// Aggregate validation report
#[derive(Debug)]
pub struct ValidationReport {
    pub directories: Vec<(String, bool)>,
    pub modules: Vec<(ModuleEntry, bool)>,
    pub pages: HtmlCheck,
    pub backup: (String, bool),
    pub descriptor: DescriptorCheck,
}

impl ValidationReport {
    pub fn directories_ok(&self) -> bool {
        self.directories.iter().all(|(_, ok)| *ok)
    }

    pub fn modules_ok(&self) -> bool {
        self.modules.iter().all(|(_, ok)| *ok)
    }

    /// The five named checks in report order
    pub fn checks(&self) -> [(&'static str, bool); 5] {
        [
            ("Directory structure", self.directories_ok()),
            ("Module files", self.modules_ok()),
            ("HTML pages", self.pages.passed()),
            ("Backup", self.backup.1),
            ("Descriptor", self.descriptor.passed()),
        ]
    }

    pub fn passed_count(&self) -> usize {
        self.checks().iter().filter(|(_, ok)| *ok).count()
    }

    pub fn percentage(&self) -> usize {
        self.passed_count() * 100 / self.checks().len()
    }

    pub fn success(&self) -> bool {
        self.passed_count() == self.checks().len()
    }
}

/// Run all five checks against the project root
pub fn run(root: &Path, manifest: &MigrationManifest) -> ValidationReport {
    let directories = manifest
        .directories
        .iter()
        .map(|dir| (dir.clone(), root.join(dir).is_dir()))
        .collect();

    let modules = manifest
        .modules
        .iter()
        .map(|entry| (entry.clone(), root.join(&entry.path).is_file()))
        .collect();

    let pages = HtmlCheck {
        entries: manifest
            .validated_pages
            .iter()
            .map(|page| {
                let path = root.join(page);
                let status = if !path.is_file() {
                    PageStatus::Missing
                } else {
                    match std::fs::read_to_string(&path) {
                        Ok(content) => {
                            PageStatus::Classified(classify::classify_content(&content, manifest))
                        }
                        Err(err) => PageStatus::Unreadable(err.to_string()),
                    }
                };
                (page.clone(), status)
            })
            .collect(),
    };

    let backup = (
        manifest.backup_file.clone(),
        root.join(&manifest.backup_file).is_file(),
    );

    let descriptor_path = root.join(&manifest.descriptor_file);
    let descriptor = if !descriptor_path.is_file() {
        DescriptorCheck::Missing
    } else {
        match descriptor::read(&descriptor_path) {
            Ok(parsed) => DescriptorCheck::Ok(parsed),
            Err(err) => DescriptorCheck::Invalid(err.to_string()),
        }
    };

    ValidationReport {
        directories,
        modules,
        pages,
        backup,
        descriptor,
    }
}
