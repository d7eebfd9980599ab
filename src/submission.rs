//! Submission records: raw form input and the normalized output.
//!
//! [`SubmissionInput`] is what the form hands over on submit, untouched and
//! untrusted. [`SubmissionOutput`] only ever exists after every field rule
//! has passed; see [`crate::validate`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One raw technology row as collected from the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechInput {
    /// Technology name, possibly empty.
    #[serde(default)]
    pub title: String,
    /// Proficiency score, as typed or as picked from a numeric widget.
    #[serde(default)]
    pub knowledge: KnowledgeValue,
}

impl TechInput {
    /// Build a row from raw parts.
    pub fn new(title: impl Into<String>, knowledge: impl Into<KnowledgeValue>) -> Self {
        Self {
            title: title.into(),
            knowledge: knowledge.into(),
        }
    }
}

/// A knowledge score arrives as free text or as a number depending on the
/// input widget that produced it. Both shapes deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KnowledgeValue {
    /// Numeric input (slider, number field).
    Number(f64),
    /// Text input, to be coerced.
    Text(String),
}

impl Default for KnowledgeValue {
    fn default() -> Self {
        KnowledgeValue::Text(String::new())
    }
}

impl From<&str> for KnowledgeValue {
    fn from(s: &str) -> Self {
        KnowledgeValue::Text(s.to_string())
    }
}

impl From<String> for KnowledgeValue {
    fn from(s: String) -> Self {
        KnowledgeValue::Text(s)
    }
}

impl From<i64> for KnowledgeValue {
    fn from(n: i64) -> Self {
        KnowledgeValue::Number(n as f64)
    }
}

impl KnowledgeValue {
    /// Coerce to an integer.
    ///
    /// Returns `None` for non-numeric text and for numbers with a
    /// fractional part. Range checking is the caller's concern.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            KnowledgeValue::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 {
                    Some(*n as i64)
                } else {
                    None
                }
            }
            KnowledgeValue::Text(s) => s.trim().parse::<i64>().ok(),
        }
    }
}

/// Raw, unvalidated form data as collected from the UI.
///
/// Every field defaults to empty so a partially filled form still parses;
/// missing data surfaces as validation errors, not deserialization errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub techs: Vec<TechInput>,
}

impl SubmissionInput {
    /// Parse a submission from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse submission JSON")
    }

    /// Load a submission from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read submission file: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Invalid submission in {}", path.display()))
    }
}

/// One validated technology row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechEntry {
    /// Non-empty technology name.
    pub title: String,
    /// Proficiency score, always in 1..=100.
    pub knowledge: u32,
}

/// Normalized, fully-valid form data ready for downstream use.
///
/// Only produced by [`crate::validate::validate`]; never constructed from
/// partially valid input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionOutput {
    /// Capitalized, whitespace-normalized full name.
    pub name: String,
    pub email: String,
    pub password: String,
    /// At least two entries, input order preserved.
    pub techs: Vec<TechEntry>,
}
