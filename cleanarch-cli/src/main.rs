//! Cleanarch — clean-architecture service scaffolding CLI.
//!
//! # Usage
//!
//! ```text
//! cleanarch new --name <project> --module <import/path>
//!               [--dir <parent>] [--skip-existing] [--json]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::new::NewArgs;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "cleanarch",
    version,
    about = "Scaffold a clean-architecture Go service skeleton",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a new project skeleton.
    New(NewArgs),
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::New(args) => args.run(),
    }
}
