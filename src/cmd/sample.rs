//! Print a sample submission for piping into `regform check`.

use anyhow::Result;

use regform::submission::{SubmissionInput, TechInput};

/// Print a valid sample submission as JSON.
///
/// The knowledge values deliberately mix text and numeric shapes, matching
/// what real form widgets produce.
pub fn cmd_sample() -> Result<()> {
    let sample = SubmissionInput {
        name: "grace brewster hopper".to_string(),
        email: "grace@example.com".to_string(),
        password: "flowmatic".to_string(),
        techs: vec![
            TechInput::new("COBOL", "95"),
            TechInput::new("Compilers", 90),
        ],
    };

    println!("{}", serde_json::to_string_pretty(&sample)?);
    Ok(())
}
