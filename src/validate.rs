//! Submission validation: applies every field rule and aggregates violations.
//!
//! [`validate`] is a pure, single-pass function. All violations across all
//! fields are collected so the caller can display every problem at once;
//! within one scalar field the first failing rule in its chain wins (that
//! part lives in [`crate::rules`]).

use serde::Serialize;
use std::fmt;

use crate::rules;
use crate::submission::{SubmissionInput, SubmissionOutput, TechEntry};

/// A single field-level violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field path, e.g. `email` or `techs[1].knowledge`.
    pub path: String,
    /// Fixed human-readable message.
    pub message: String,
}

impl FieldError {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// All violations from one validation pass, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(path, message));
    }

    /// Look up the message recorded for a field path, if any.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.path == path)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Validate a raw submission against every field rule.
///
/// Returns the normalized output only when every rule passes; otherwise the
/// full list of violations. Technology rows keep their input order. No side
/// effects, no retained state across calls.
pub fn validate(input: &SubmissionInput) -> Result<SubmissionOutput, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = match rules::name_rule(&input.name) {
        Ok(name) => Some(name),
        Err(message) => {
            errors.push("name", message);
            None
        }
    };

    let email = match rules::email_rule(&input.email) {
        Ok(email) => Some(email),
        Err(message) => {
            errors.push("email", message);
            None
        }
    };

    let password = match rules::password_rule(&input.password) {
        Ok(password) => Some(password),
        Err(message) => {
            errors.push("password", message);
            None
        }
    };

    if input.techs.len() < rules::TECHS_MIN_LEN {
        errors.push("techs", rules::TECHS_TOO_FEW);
    }

    let mut techs = Vec::with_capacity(input.techs.len());
    for (i, row) in input.techs.iter().enumerate() {
        let title = match rules::title_rule(&row.title) {
            Ok(title) => Some(title),
            Err(message) => {
                errors.push(format!("techs[{}].title", i), message);
                None
            }
        };

        let knowledge = match rules::knowledge_rule(&row.knowledge) {
            Ok(knowledge) => Some(knowledge),
            Err(message) => {
                errors.push(format!("techs[{}].knowledge", i), message);
                None
            }
        };

        if let (Some(title), Some(knowledge)) = (title, knowledge) {
            techs.push(TechEntry { title, knowledge });
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // All chains passed, so every Option above is Some.
    Ok(SubmissionOutput {
        name: name.unwrap_or_default(),
        email: email.unwrap_or_default(),
        password: password.unwrap_or_default(),
        techs,
    })
}
