//! Validate a submission from a JSON file or stdin.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use regform::submission::SubmissionInput;
use regform::validate::validate;
use regform::{preview, ui};

/// Read, parse, and validate a submission; print the preview or the error
/// list. Exits with code 1 when validation fails.
pub fn cmd_check(file: Option<&Path>, json: bool) -> Result<()> {
    let input = read_submission(file)?;

    match validate(&input) {
        Ok(output) => {
            if json {
                println!("{}", preview::to_pretty_json(&output)?);
            } else {
                if !ui::is_quiet() {
                    println!("{}", ui::valid_line());
                    println!();
                }
                println!("{}", preview::format_submission(&output));
            }
            Ok(())
        }
        Err(errors) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&errors)?);
            } else {
                eprintln!("{}", preview::format_errors(&errors));
            }
            std::process::exit(1);
        }
    }
}

/// Load the raw submission from a file, or from stdin when no file is given.
fn read_submission(file: Option<&Path>) -> Result<SubmissionInput> {
    match file {
        Some(path) => SubmissionInput::load(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read submission from stdin")?;
            if buffer.trim().is_empty() {
                anyhow::bail!(
                    "No submission provided.\n\n\
                     Usage:\n  \
                     regform check submission.json\n  \
                     regform sample | regform check"
                );
            }
            SubmissionInput::from_json(&buffer)
        }
    }
}
