// src/classify.rs

//! Three-way classification of HTML pages during the migration.
//!
//! A page is `Updated` once it loads the module entry point, `Legacy` while
//! it still references the monolithic script, and `Unknown` when neither
//! marker is present. Updated wins when both markers appear, so a page that
//! keeps a commented-out legacy tag next to the new module tag still counts
//! as migrated.

use crate::manifest::MigrationManifest;
use std::fmt;

/// Migration status of a single HTML page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageClass {
    /// References the module entry point via a `type="module"` script tag
    Updated,
    /// Still references the legacy monolithic script
    Legacy,
    /// Neither marker found
    Unknown,
}

impl fmt::Display for PageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageClass::Updated => write!(f, "updated"),
            PageClass::Legacy => write!(f, "legacy"),
            PageClass::Unknown => write!(f, "unknown"),
        }
    }
}

/// Classify page content against the manifest's script names
pub fn classify_content(content: &str, manifest: &MigrationManifest) -> PageClass {
    if content.contains("type=\"module\"") && content.contains(&manifest.entry_point) {
        PageClass::Updated
    } else if content.contains(&manifest.legacy_script) {
        PageClass::Legacy
    } else {
        PageClass::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> MigrationManifest {
        MigrationManifest::default()
    }

    #[test]
    fn test_updated_page() {
        let content = r#"<script type="module" src="js/main.js"></script>"#;
        assert_eq!(classify_content(content, &manifest()), PageClass::Updated);
    }

    #[test]
    fn test_legacy_page() {
        let content = r#"<script src="script.js"></script>"#;
        assert_eq!(classify_content(content, &manifest()), PageClass::Legacy);
    }

    #[test]
    fn test_unknown_page() {
        let content = "<html><body>static page</body></html>";
        assert_eq!(classify_content(content, &manifest()), PageClass::Unknown);
    }

    #[test]
    fn test_updated_wins_over_legacy() {
        let content = r#"
            <!-- <script src="script.js"></script> -->
            <script type="module" src="js/main.js"></script>
        "#;
        assert_eq!(classify_content(content, &manifest()), PageClass::Updated);
    }

    #[test]
    fn test_module_attribute_alone_is_not_enough() {
        let content = r#"<script type="module" src="other/app.js"></script>"#;
        assert_eq!(classify_content(content, &manifest()), PageClass::Unknown);
    }
}
