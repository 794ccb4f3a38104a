// src/cli.rs
//! CLI definitions for modshift
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use modshift::server::DEFAULT_PORT;

#[derive(Parser)]
#[command(name = "modshift")]
#[command(version)]
#[command(about = "Move a static site from a monolithic script to ES modules", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default migration manifest describing the site
    Init {
        /// Project root directory
        #[arg(short, long, default_value = ".")]
        root: String,

        /// Where to write the manifest (default: <root>/migration.toml)
        #[arg(short, long)]
        manifest: Option<String>,

        /// Overwrite an existing manifest
        #[arg(long)]
        force: bool,
    },

    /// Replace the legacy script tag with the module entry point in every page
    Rewrite {
        /// Project root directory
        #[arg(short, long, default_value = ".")]
        root: String,

        /// Manifest file (default: <root>/migration.toml if present)
        #[arg(short, long)]
        manifest: Option<String>,

        /// Show what would change without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Check directories, module files, pages, backup and descriptor
    Validate {
        /// Project root directory
        #[arg(short, long, default_value = ".")]
        root: String,

        /// Manifest file (default: <root>/migration.toml if present)
        #[arg(short, long)]
        manifest: Option<String>,
    },

    /// Delete the transitional files once the migration holds
    Clean {
        /// Project root directory
        #[arg(short, long, default_value = ".")]
        root: String,

        /// Manifest file (default: <root>/migration.toml if present)
        #[arg(short, long)]
        manifest: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Preview the site on a local HTTP server
    Serve {
        /// Project root directory
        #[arg(short, long, default_value = ".")]
        root: String,

        /// Manifest file (default: <root>/migration.toml if present)
        #[arg(short, long)]
        manifest: Option<String>,

        /// Port to bind on 127.0.0.1
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Do not open the test page in a browser
        #[arg(long)]
        no_open: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
