//! CLI argument definitions for regform.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "regform")]
#[command(version)]
#[command(about = "Registration-form validation with a terminal preview", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    regform form               Interactive registration wizard\n    regform sample | regform check    Validate the bundled sample submission"
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a submission read from a JSON file or stdin
    Check {
        /// Path to a submission JSON file (omit to read stdin)
        file: Option<PathBuf>,
        /// Emit machine-readable JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
    /// Fill in a registration form interactively
    Form,
    /// Print a sample submission JSON
    Sample,
    /// Show version information
    Version {
        /// Include build metadata
        #[arg(long)]
        verbose: bool,
    },
}
