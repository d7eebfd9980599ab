//! Preview rendering for validated submissions.
//!
//! Display-only: the host echoes a successful submission back to the user,
//! either as pretty-printed JSON or as a sectioned text block. Nothing here
//! is persisted or exchanged.

use anyhow::Result;
use colored::Colorize;

use crate::submission::SubmissionOutput;
use crate::validate::FieldErrors;

/// Serialize a validated submission as two-space-indented JSON.
pub fn to_pretty_json(output: &SubmissionOutput) -> Result<String> {
    Ok(serde_json::to_string_pretty(output)?)
}

/// Format a validated submission as a multi-section text preview.
pub fn format_submission(output: &SubmissionOutput) -> String {
    let mut lines = vec![
        "Registration Preview".bold().to_string(),
        "====================".to_string(),
        String::new(),
        format!("  {:<10} {}", "Name:", output.name),
        format!("  {:<10} {}", "Email:", output.email),
        format!("  {:<10} {}", "Password:", mask(&output.password)),
        String::new(),
        format!("Technologies ({})", output.techs.len())
            .bold()
            .to_string(),
        "────────────────".to_string(),
    ];

    for (i, tech) in output.techs.iter().enumerate() {
        lines.push(format!(
            "  {}. {}  {}",
            i + 1,
            tech.title.cyan(),
            format!("(knowledge {})", tech.knowledge).dimmed()
        ));
    }

    lines.join("\n")
}

/// Format a validation failure as one line per violation.
pub fn format_errors(errors: &FieldErrors) -> String {
    let mut lines = vec![format!(
        "{} submission has {} problem{}",
        "✗".red(),
        errors.len(),
        if errors.len() == 1 { "" } else { "s" }
    )];

    for error in errors.iter() {
        lines.push(format!(
            "  {} {}: {}",
            "✗".red(),
            error.path.cyan(),
            error.message
        ));
    }

    lines.join("\n")
}

/// Mask a password for display, keeping only its length visible.
fn mask(password: &str) -> String {
    "•".repeat(password.chars().count())
}
