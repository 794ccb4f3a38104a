// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: project root directory
fn root_arg() -> Arg {
    Arg::new("root")
        .short('r')
        .long("root")
        .value_name("DIR")
        .default_value(".")
        .help("Project root directory")
}

/// Common argument: manifest path
fn manifest_arg() -> Arg {
    Arg::new("manifest")
        .short('m')
        .long("manifest")
        .value_name("PATH")
        .help("Migration manifest file (default: <root>/migration.toml)")
}

fn build_cli() -> Command {
    Command::new("modshift")
        .version(env!("CARGO_PKG_VERSION"))
        .author("modshift Contributors")
        .about("Migration toolkit for moving static sites from a monolithic script to ES modules")
        .subcommand_required(false)
        .subcommand(
            Command::new("init")
                .about("Write the built-in migration manifest as an editable TOML file")
                .arg(root_arg())
                .arg(
                    Arg::new("manifest")
                        .short('m')
                        .long("manifest")
                        .value_name("PATH")
                        .help("Destination path (default: <root>/migration.toml)"),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .action(clap::ArgAction::SetTrue)
                        .help("Overwrite an existing manifest"),
                ),
        )
        .subcommand(
            Command::new("rewrite")
                .about("Replace the legacy script include with the modular block in every page")
                .arg(root_arg())
                .arg(manifest_arg())
                .arg(
                    Arg::new("dry_run")
                        .long("dry-run")
                        .action(clap::ArgAction::SetTrue)
                        .help("Report what would change without writing"),
                ),
        )
        .subcommand(
            Command::new("validate")
                .about("Check the migrated site layout and report pass/fail")
                .arg(root_arg())
                .arg(manifest_arg()),
        )
        .subcommand(
            Command::new("clean")
                .about("Delete transitional files after confirmation")
                .arg(root_arg())
                .arg(manifest_arg())
                .arg(
                    Arg::new("yes")
                        .short('y')
                        .long("yes")
                        .action(clap::ArgAction::SetTrue)
                        .help("Skip the confirmation prompt"),
                ),
        )
        .subcommand(
            Command::new("serve")
                .about("Serve the project directory over HTTP for manual testing")
                .arg(root_arg())
                .arg(manifest_arg())
                .arg(
                    Arg::new("port")
                        .short('p')
                        .long("port")
                        .value_name("PORT")
                        .default_value("8000")
                        .help("Port to bind"),
                )
                .arg(
                    Arg::new("no_open")
                        .long("no-open")
                        .action(clap::ArgAction::SetTrue)
                        .help("Do not open a browser on startup"),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(Arg::new("shell").required(true).help("Shell to target")),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Create man directory - use CARGO_MANIFEST_DIR which is always set by cargo
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    // Generate main man page
    let cmd = build_cli();
    let man = Man::new(cmd);
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("modshift.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
        return;
    }

    println!("cargo:warning=Man page generated at {}", man_path.display());
}
