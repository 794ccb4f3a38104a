// src/lib.rs

//! modshift - static site migration toolkit
//!
//! Moves a site off a single monolithic script and onto ES modules in four
//! steps: rewrite the HTML inclusion tags, validate the resulting tree,
//! clean up the transitional files, and preview the result locally.
//!
//! Everything is driven by a [`manifest::MigrationManifest`]: the pages the
//! rewriter touches, the module layout the validator expects, and the files
//! cleanup may delete. A `migration.toml` at the project root overrides the
//! built-in defaults.

pub mod classify;
pub mod cleanup;
pub mod descriptor;
mod error;
pub mod manifest;
pub mod prompt;
pub mod rewrite;
pub mod server;
pub mod validate;

pub use classify::{classify_content, PageClass};
pub use error::{Error, Result};
pub use manifest::{ManifestError, MigrationManifest, DEFAULT_MANIFEST_PATH, MANIFEST_VERSION};
pub use rewrite::{RewriteOutcome, RewriteReport, Rewriter};
pub use server::{DevServer, DevServerConfig, DEFAULT_HOST, DEFAULT_PORT};
pub use validate::ValidationReport;
