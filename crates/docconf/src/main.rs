//! docconf CLI - Documentation site configuration builder.
//!
//! Provides commands for:
//! - `build`: Assemble, validate, and emit the site configuration
//! - `check`: Validate the navigation declaration without emitting
//! - `explorer`: Emit the API-explorer bootstrap configuration

mod commands;
mod decl;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CheckArgs, ExplorerArgs};
use output::Output;

/// docconf - Documentation site configuration builder.
#[derive(Parser)]
#[command(name = "docconf", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble and emit the site configuration.
    Build(BuildArgs),
    /// Validate the navigation declaration.
    Check(CheckArgs),
    /// Emit the API-explorer bootstrap configuration.
    Explorer(ExplorerArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Check if verbose flag is set
    let verbose = match &cli.command {
        Commands::Build(args) => args.verbose,
        Commands::Check(args) => args.verbose,
        Commands::Explorer(_) => false,
    };

    // Initialize tracing with appropriate log level
    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Explorer(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
