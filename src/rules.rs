//! Field rules: one predicate-plus-message pair per rule, chained per field.
//!
//! Each `*_rule` function applies its field's chain in priority order
//! (required, then format, then range) and returns either the normalized
//! value or the first failing rule's message. Aggregation across fields
//! happens in [`crate::validate`].

use regex::Regex;

use crate::submission::KnowledgeValue;

/// Minimum password length.
pub const PASSWORD_MIN_LEN: usize = 6;
/// Minimum number of technology rows.
pub const TECHS_MIN_LEN: usize = 2;
/// Inclusive knowledge score bounds.
pub const KNOWLEDGE_RANGE: std::ops::RangeInclusive<i64> = 1..=100;

pub const NAME_REQUIRED: &str = "name is required";
pub const EMAIL_REQUIRED: &str = "email is required";
pub const EMAIL_INVALID: &str = "enter a valid email";
pub const PASSWORD_REQUIRED: &str = "password is required";
pub const PASSWORD_TOO_SHORT: &str = "password needs at least 6 characters";
pub const TECHS_TOO_FEW: &str = "enter at least two technologies";
pub const TITLE_REQUIRED: &str = "title is required";
pub const KNOWLEDGE_OUT_OF_RANGE: &str = "knowledge must be between 1 and 100";

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$";

/// Name: required, then capitalized word by word.
pub fn name_rule(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NAME_REQUIRED);
    }
    Ok(capitalize_words(trimmed))
}

/// Email: required, then syntactic check against the address grammar.
pub fn email_rule(raw: &str) -> Result<String, &'static str> {
    if raw.is_empty() {
        return Err(EMAIL_REQUIRED);
    }
    if !is_valid_email(raw) {
        return Err(EMAIL_INVALID);
    }
    Ok(raw.to_string())
}

/// Password: required, then minimum length.
pub fn password_rule(raw: &str) -> Result<String, &'static str> {
    if raw.is_empty() {
        return Err(PASSWORD_REQUIRED);
    }
    if raw.chars().count() < PASSWORD_MIN_LEN {
        return Err(PASSWORD_TOO_SHORT);
    }
    Ok(raw.to_string())
}

/// Technology title: required.
pub fn title_rule(raw: &str) -> Result<String, &'static str> {
    if raw.trim().is_empty() {
        return Err(TITLE_REQUIRED);
    }
    Ok(raw.to_string())
}

/// Knowledge score: coercible to an integer in 1..=100.
///
/// Non-numeric text and fractional numbers fail with the range message
/// rather than a separate parse error.
pub fn knowledge_rule(value: &KnowledgeValue) -> Result<u32, &'static str> {
    match value.as_integer() {
        Some(n) if KNOWLEDGE_RANGE.contains(&n) => Ok(n as u32),
        _ => Err(KNOWLEDGE_OUT_OF_RANGE),
    }
}

/// Capitalize each whitespace-delimited word: first character uppercased,
/// remainder unchanged, words rejoined with single spaces.
///
/// Zero-length words (runs of spaces) are skipped, never panicked on.
pub fn capitalize_words(raw: &str) -> String {
    raw.split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Syntactic email check against a standard address grammar.
pub fn is_valid_email(raw: &str) -> bool {
    // Pattern is a fixed literal, compilation cannot fail.
    let re = Regex::new(EMAIL_PATTERN).unwrap();
    re.is_match(raw)
}
