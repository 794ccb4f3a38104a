// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use std::io;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init {
            root,
            manifest,
            force,
        }) => commands::cmd_init(&root, manifest.as_deref(), force),
        Some(Commands::Rewrite {
            root,
            manifest,
            dry_run,
        }) => commands::cmd_rewrite(&root, manifest.as_deref(), dry_run),
        Some(Commands::Validate { root, manifest }) => {
            commands::cmd_validate(&root, manifest.as_deref())
        }
        Some(Commands::Clean {
            root,
            manifest,
            yes,
        }) => commands::cmd_clean(&root, manifest.as_deref(), yes),
        Some(Commands::Serve {
            root,
            manifest,
            port,
            no_open,
        }) => commands::cmd_serve(&root, manifest.as_deref(), port, no_open),
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => {
            // No command provided, show help
            println!("modshift v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'modshift --help' for usage information");
            Ok(())
        }
    }
}
