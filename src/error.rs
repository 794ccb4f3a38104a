// src/error.rs
//! Error types for the modshift library

use thiserror::Error;

/// Errors that can occur while running a migration step
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The legacy tag pattern did not compile
    #[error("Invalid legacy tag pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The package descriptor is not valid JSON
    #[error("Failed to parse {path}: {source}")]
    Descriptor {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The requested dev server port is taken
    #[error("Port {port} is already in use")]
    PortInUse { port: u16 },
}

/// Result type for modshift operations
pub type Result<T> = std::result::Result<T, Error>;
