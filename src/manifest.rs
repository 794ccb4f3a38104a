// src/manifest.rs

//! Migration manifest - the configured lists the tool operates on.
//!
//! Every command works from a `MigrationManifest`: the pages to rewrite, the
//! directory tree and module files the validator expects, the transitional
//! files the cleanup removes, and the handful of fixed names (legacy script,
//! entry point, backup, descriptor). The built-in default carries the site
//! layout this tool was written for; a `migration.toml` at the project root
//! overrides it.
//!
//! # Example migration.toml
//!
//! ```toml
//! version = 1
//!
//! legacy_script = "script.js"
//! entry_point = "js/main.js"
//! backup_file = "script.js.backup"
//! descriptor_file = "package.json"
//! test_page = "index-new.html"
//!
//! pages = ["index.html", "contact.html"]
//! validated_pages = ["index.html"]
//! directories = ["js", "js/modules"]
//! cleanup = ["script.js", "index-new.html"]
//! preserved = ["script.js.backup", "js/", "package.json"]
//!
//! [[modules]]
//! path = "js/main.js"
//! description = "Application entry point"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Current manifest file version
pub const MANIFEST_VERSION: u32 = 1;

/// Default manifest filename, resolved relative to the project root
pub const DEFAULT_MANIFEST_PATH: &str = "migration.toml";

/// Errors that can occur when working with migration manifests
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse manifest file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid manifest version: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },

    #[error("Conflicting manifest entries: {0}")]
    Conflicting(String),
}

/// Result type for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;

/// An expected module file with a human-readable description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleEntry {
    /// Path relative to the project root
    pub path: String,

    /// What this module is for, shown in validator output
    pub description: String,
}

impl ModuleEntry {
    pub fn new(path: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            description: description.into(),
        }
    }
}

/// The migration manifest
///
/// Fields omitted from a manifest file fall back to the built-in defaults,
/// so a partial file overrides only what it names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationManifest {
    /// Manifest file version (for forward compatibility)
    #[serde(default = "default_version")]
    pub version: u32,

    /// Filename of the monolithic script being replaced
    #[serde(default = "default_legacy_script")]
    pub legacy_script: String,

    /// Path of the new module entry point
    #[serde(default = "default_entry_point")]
    pub entry_point: String,

    /// Backup of the legacy script, required by the validator
    #[serde(default = "default_backup_file")]
    pub backup_file: String,

    /// Project metadata descriptor, required by the validator
    #[serde(default = "default_descriptor_file")]
    pub descriptor_file: String,

    /// Transitional page the dev server opens on startup
    #[serde(default = "default_test_page")]
    pub test_page: String,

    /// Pages the rewriter processes
    #[serde(default = "default_pages")]
    pub pages: Vec<String>,

    /// Subset of pages the validator classifies
    #[serde(default = "default_validated_pages")]
    pub validated_pages: Vec<String>,

    /// Directories the validator expects to exist
    #[serde(default = "default_directories")]
    pub directories: Vec<String>,

    /// Transitional files slated for deletion by cleanup
    #[serde(default = "default_cleanup")]
    pub cleanup: Vec<String>,

    /// Paths cleanup leaves alone, shown before the confirmation prompt
    #[serde(default = "default_preserved")]
    pub preserved: Vec<String>,

    /// Module files the validator expects to exist
    ///
    /// Kept last so the serialized file ends with the `[[modules]]` tables.
    #[serde(default = "default_modules")]
    pub modules: Vec<ModuleEntry>,
}

fn default_version() -> u32 {
    MANIFEST_VERSION
}

fn default_legacy_script() -> String {
    "script.js".to_string()
}

fn default_entry_point() -> String {
    "js/main.js".to_string()
}

fn default_backup_file() -> String {
    "script.js.backup".to_string()
}

fn default_descriptor_file() -> String {
    "package.json".to_string()
}

fn default_test_page() -> String {
    "index-new.html".to_string()
}

fn default_pages() -> Vec<String> {
    [
        "index.html",
        "cabinet.html",
        "expertises.html",
        "honoraires.html",
        "contact.html",
        "blog.html",
        "consultation.html",
        "expertise-droit-immobilier.html",
        "expertise-droit-de-la-construction.html",
        "expertise-droit-de-la-copropriete.html",
        "expertise-contentieux-civil-commercial.html",
        "expertise-vente-forcee.html",
        "expertise-droit-famille.html",
        "team-svetlana.html",
        "team-sharon.html",
        "team-leonie.html",
        "mentions-legales.html",
        "plan-du-site.html",
        "gestion-cookies.html",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_validated_pages() -> Vec<String> {
    [
        "index.html",
        "cabinet.html",
        "expertises.html",
        "honoraires.html",
        "contact.html",
        "blog.html",
        "consultation.html",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_directories() -> Vec<String> {
    [
        "js",
        "js/config",
        "js/modules",
        "js/modules/ui",
        "js/modules/features",
        "js/modules/pages",
        "js/utils",
        "js/tests",
        "js/docs",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_modules() -> Vec<ModuleEntry> {
    [
        ("js/config/settings.js", "Global configuration"),
        ("js/config/translations.js", "Translation catalogue"),
        ("js/utils/logger.js", "Logging system"),
        ("js/utils/dom.js", "DOM utilities"),
        ("js/utils/performance.js", "Performance helpers"),
        ("js/utils/stateManager.js", "State manager"),
        ("js/utils/storage.js", "localStorage handling"),
        ("js/utils/lazyLoader.js", "Deferred loading"),
        ("js/utils/events.js", "Event system"),
        ("js/utils/errorHandler.js", "Error handling"),
        ("js/modules/ui/darkMode.js", "Dark mode"),
        ("js/modules/ui/loader.js", "Loading screen"),
        ("js/modules/ui/carousel.js", "Carousels"),
        ("js/modules/ui/drawer.js", "Mobile menu"),
        ("js/modules/ui/header.js", "Header"),
        ("js/modules/ui/animations.js", "Animations"),
        ("js/modules/features/language.js", "Language switching"),
        ("js/modules/features/cookies.js", "Cookie consent"),
        ("js/modules/features/forms.js", "Forms"),
        ("js/modules/features/navigation.js", "Navigation"),
        ("js/modules/features/expertiseNav.js", "Practice-area navigation"),
        ("js/modules/features/blog.js", "Blog"),
        ("js/modules/pages/home.js", "Home page"),
        ("js/modules/pages/contact.js", "Contact page"),
        ("js/modules/pages/expertises.js", "Practice-areas page"),
        ("js/modules/pages/team.js", "Team pages"),
        ("js/main.js", "Application entry point"),
        ("js/tests/utils.test.js", "Unit tests"),
        ("js/docs/README.md", "Documentation"),
        ("js/docs/MIGRATION.md", "Migration guide"),
        ("js/docs/ARCHITECTURE.md", "Architecture notes"),
    ]
    .into_iter()
    .map(|(path, description)| ModuleEntry::new(path, description))
    .collect()
}

fn default_cleanup() -> Vec<String> {
    [
        "script.js",
        "index-new.html",
        "update-html-files.py",
        "validate-migration.py",
        "start-server.py",
        "cleanup-migration.py",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_preserved() -> Vec<String> {
    ["script.js.backup", "js/", "package.json", "TEST-CHECKLIST.md"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for MigrationManifest {
    fn default() -> Self {
        Self {
            version: MANIFEST_VERSION,
            legacy_script: default_legacy_script(),
            entry_point: default_entry_point(),
            backup_file: default_backup_file(),
            descriptor_file: default_descriptor_file(),
            test_page: default_test_page(),
            pages: default_pages(),
            validated_pages: default_validated_pages(),
            directories: default_directories(),
            cleanup: default_cleanup(),
            preserved: default_preserved(),
            modules: default_modules(),
        }
    }
}

impl MigrationManifest {
    /// Check whether a module path is listed
    pub fn has_module(&self, path: &str) -> bool {
        self.modules.iter().any(|m| m.path == path)
    }

    /// Validate the manifest for consistency
    pub fn validate(&self) -> ManifestResult<()> {
        if self.version != MANIFEST_VERSION {
            return Err(ManifestError::VersionMismatch {
                expected: MANIFEST_VERSION,
                found: self.version,
            });
        }

        if self.legacy_script.is_empty() {
            return Err(ManifestError::Conflicting(
                "legacy_script must not be empty".to_string(),
            ));
        }

        if self.entry_point.is_empty() {
            return Err(ManifestError::Conflicting(
                "entry_point must not be empty".to_string(),
            ));
        }

        if self.legacy_script == self.entry_point {
            return Err(ManifestError::Conflicting(format!(
                "legacy_script and entry_point are both '{}'",
                self.legacy_script
            )));
        }

        if !self.has_module(&self.entry_point) {
            return Err(ManifestError::Conflicting(format!(
                "entry_point '{}' is not listed in modules",
                self.entry_point
            )));
        }

        for page in &self.validated_pages {
            if !self.pages.contains(page) {
                return Err(ManifestError::Conflicting(format!(
                    "validated page '{}' is not listed in pages",
                    page
                )));
            }
        }

        if self.cleanup.contains(&self.backup_file) {
            return Err(ManifestError::Conflicting(format!(
                "backup file '{}' is slated for cleanup",
                self.backup_file
            )));
        }

        for path in &self.cleanup {
            if self.preserved.contains(path) {
                return Err(ManifestError::Conflicting(format!(
                    "'{}' is listed both in cleanup and preserved",
                    path
                )));
            }
        }

        Ok(())
    }

    /// Serialize the manifest to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Parse a migration manifest from a TOML file
pub fn load(path: &Path) -> ManifestResult<MigrationManifest> {
    let content = std::fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parse a migration manifest from a TOML string
pub fn parse_str(content: &str) -> ManifestResult<MigrationManifest> {
    let manifest: MigrationManifest = toml::from_str(content)?;
    manifest.validate()?;
    Ok(manifest)
}

/// Load the manifest governing a project
///
/// An explicit path must name an existing file. With no explicit path,
/// `<root>/migration.toml` is used when present, the built-in default
/// otherwise.
pub fn load_or_default(
    root: &Path,
    explicit: Option<&Path>,
) -> ManifestResult<MigrationManifest> {
    match explicit {
        Some(path) => load(path),
        None => {
            let candidate = root.join(DEFAULT_MANIFEST_PATH);
            if candidate.exists() {
                load(&candidate)
            } else {
                Ok(MigrationManifest::default())
            }
        }
    }
}
