// src/commands/serve.rs
//! Handler for `modshift serve`

use anyhow::{Context, Result};
use modshift::server::{self, DevServer, DevServerConfig, DEFAULT_HOST};
use modshift::Error;
use std::path::Path;
use tracing::info;

/// Serve the project root until interrupted
pub fn cmd_serve(root: &str, manifest_path: Option<&str>, port: u16, no_open: bool) -> Result<()> {
    let root = Path::new(root);
    let manifest = super::load_manifest(root, manifest_path)?;

    let config = DevServerConfig {
        root: root.to_path_buf(),
        port,
    };

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(async {
        let server = match DevServer::bind(&config).await {
            Ok(server) => server,
            Err(Error::PortInUse { port }) => {
                println!("Port {} is already in use.", port);
                println!("Stop the other process or pick another port with --port.");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        let addr = server.local_addr()?;
        let shown_root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
        let base = format!("http://{}:{}", DEFAULT_HOST, addr.port());
        let test_url = format!("{}/{}", base, manifest.test_page);

        info!("Dev server listening on {}", addr);

        println!("Dev server");
        println!("{}", "=".repeat(50));
        println!("  Directory: {}", shown_root.display());
        println!("  Site:      {}", base);
        println!("  Test page: {}", test_url);
        println!("\nPress Ctrl+C to stop.");

        if !no_open {
            if server::open_in_browser(&test_url) {
                println!("Opening {} in the browser...", test_url);
            } else {
                println!("No browser opener found; open {} manually.", test_url);
            }
        }

        tokio::select! {
            result = server.serve() => result.map_err(Into::into),
            _ = tokio::signal::ctrl_c() => {
                println!("\nServer stopped.");
                Ok(())
            }
        }
    })
}
