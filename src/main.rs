//! CLI entry point for regform.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        // Propagate the flag so library-side helpers see it too.
        std::env::set_var("REGFORM_QUIET", "1");
    }

    match cli.command {
        Commands::Check { file, json } => cmd::check::cmd_check(file.as_deref(), json),
        Commands::Form => cmd::form::cmd_form(),
        Commands::Sample => cmd::sample::cmd_sample(),
        Commands::Version { verbose } => cmd::util::cmd_version(verbose),
    }
}
