// src/descriptor.rs

//! Project descriptor (`package.json`) handling for the validator.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// The subset of `package.json` the validator reports on
#[derive(Debug, Clone, Deserialize)]
pub struct PackageDescriptor {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    /// The `"type"` field; `"module"` marks an ES module project
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl PackageDescriptor {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("n/a")
    }

    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or("n/a")
    }

    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or("n/a")
    }
}

/// Read and parse a project descriptor
pub fn read(path: &Path) -> Result<PackageDescriptor> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| Error::Descriptor {
        path: path.display().to_string(),
        source,
    })
}
