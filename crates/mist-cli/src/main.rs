//! # mist CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mist_cli::check::run_check;
use mist_cli::gen::run_gen;
use mist_cli::validate::{run_validate, ValidateArgs};
use mist_content::Registry;

/// Tabletop content schema toolchain.
///
/// Compiles structured schema definitions into JSON Schema draft-7
/// artifacts and validates content documents (JSON/TOML) against them.
#[derive(Parser, Debug)]
#[command(name = "mist", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Content root containing schemas/ and examples/.
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile every registry target into its schema artifact.
    Gen,

    /// Validate all example documents against their compiled schemas.
    Check,

    /// Validate specific files against one schema artifact.
    Validate(ValidateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let root = mist_cli::resolve_content_root(cli.root);
    tracing::debug!(root = %root.display(), "resolved content root");

    let registry = Registry::builtin();

    let result = match cli.command {
        Commands::Gen => run_gen(&registry, &root),
        Commands::Check => run_check(&registry, &root),
        Commands::Validate(args) => run_validate(&args, &root),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
