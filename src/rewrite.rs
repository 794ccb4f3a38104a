// src/rewrite.rs

//! HTML rewriter - swaps the legacy script tag for the module entry point.
//!
//! The legacy pattern is compiled once per run from the manifested script
//! name. Matching is deliberately lax about extra attributes so tags like
//! `<script src="script.js" defer></script>` are caught too. The replacement
//! block never matches the pattern, which makes a second run a no-op.

use crate::error::Result;
use crate::manifest::MigrationManifest;
use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::path::Path;

/// What happened to one page during a rewrite pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// Legacy tag found and replaced
    Updated,
    /// No legacy tag in the file
    Unchanged,
    /// File does not exist
    Missing,
    /// Read or write failed; processing continued with the next page
    Failed(String),
}

/// Compiled rewrite rule for one migration
pub struct Rewriter {
    pattern: Regex,
    replacement: String,
}

impl Rewriter {
    /// Compile the legacy tag pattern and build the replacement block
    pub fn new(manifest: &MigrationManifest) -> Result<Self> {
        let pattern = Regex::new(&format!(
            r#"<script\s+src="{}"[^>]*></script>"#,
            regex::escape(&manifest.legacy_script)
        ))?;

        let replacement = format!(
            "<!-- Modular entry point (ES modules) -->\n    \
             <script type=\"module\" src=\"{}\"></script>\n\n    \
             <!-- Fallback for browsers without ES module support -->\n    \
             <script nomodule>\n        \
             console.warn('This browser does not support ES modules.');\n        \
             console.warn('Parts of this site may not work. Please update your browser.');\n    \
             </script>",
            manifest.entry_point
        );

        Ok(Self {
            pattern,
            replacement,
        })
    }

    /// Replace every legacy tag, returning the new text if anything changed
    pub fn rewrite_content(&self, content: &str) -> Option<String> {
        match self.pattern.replace_all(content, NoExpand(&self.replacement)) {
            Cow::Borrowed(_) => None,
            Cow::Owned(updated) => Some(updated),
        }
    }

    /// Rewrite a single page on disk
    ///
    /// I/O failures are folded into the outcome so one broken page does not
    /// abort the run.
    pub fn rewrite_file(&self, path: &Path, dry_run: bool) -> RewriteOutcome {
        if !path.is_file() {
            return RewriteOutcome::Missing;
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => return RewriteOutcome::Failed(err.to_string()),
        };

        match self.rewrite_content(&content) {
            None => RewriteOutcome::Unchanged,
            Some(updated) => {
                if !dry_run {
                    if let Err(err) = std::fs::write(path, updated) {
                        return RewriteOutcome::Failed(err.to_string());
                    }
                }
                RewriteOutcome::Updated
            }
        }
    }
}

/// Per-page outcomes of a rewrite pass, in manifest order
pub struct RewriteReport {
    pub entries: Vec<(String, RewriteOutcome)>,
}

impl RewriteReport {
    fn count(&self, wanted: &RewriteOutcome) -> usize {
        self.entries.iter().filter(|(_, o)| o == wanted).count()
    }

    pub fn updated(&self) -> usize {
        self.count(&RewriteOutcome::Updated)
    }

    pub fn unchanged(&self) -> usize {
        self.count(&RewriteOutcome::Unchanged)
    }

    pub fn missing(&self) -> usize {
        self.count(&RewriteOutcome::Missing)
    }

    pub fn failed(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, o)| matches!(o, RewriteOutcome::Failed(_)))
            .count()
    }
}

/// Rewrite every manifested page under the project root
pub fn run(root: &Path, manifest: &MigrationManifest, dry_run: bool) -> Result<RewriteReport> {
    let rewriter = Rewriter::new(manifest)?;

    let entries = manifest
        .pages
        .iter()
        .map(|page| {
            let outcome = rewriter.rewrite_file(&root.join(page), dry_run);
            (page.clone(), outcome)
        })
        .collect();

    Ok(RewriteReport { entries })
}
