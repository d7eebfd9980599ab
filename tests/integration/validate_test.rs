//! End-to-end validation behavior: every rule, every message, aggregation.

use regform::rules;
use regform::submission::{SubmissionInput, TechInput};
use regform::validate::validate;

use crate::common::valid_submission;

#[test]
fn test_valid_submission_round_trip() {
    let input = valid_submission();
    let output = validate(&input).unwrap();

    assert_eq!(output.name, "João Silva");
    assert_eq!(output.email, "a@b.com");
    assert_eq!(output.password, "123456");
    assert_eq!(output.techs.len(), input.techs.len());
    assert_eq!(output.techs[0].title, "X");
    assert_eq!(output.techs[0].knowledge, 50);
    assert_eq!(output.techs[1].title, "Y");
    assert_eq!(output.techs[1].knowledge, 10);
}

#[test]
fn test_empty_form_reports_four_problems() {
    let input = SubmissionInput {
        name: String::new(),
        email: "bad".to_string(),
        password: "123".to_string(),
        techs: vec![],
    };

    let errors = validate(&input).unwrap_err();
    assert_eq!(errors.len(), 4);
    assert_eq!(errors.get("name"), Some("name is required"));
    assert_eq!(errors.get("email"), Some("enter a valid email"));
    assert_eq!(
        errors.get("password"),
        Some("password needs at least 6 characters")
    );
    assert_eq!(errors.get("techs"), Some("enter at least two technologies"));
}

#[test]
fn test_row_errors_carry_indexed_paths() {
    let mut input = valid_submission();
    input.techs = vec![TechInput::new("A", "150"), TechInput::new("", "5")];

    let errors = validate(&input).unwrap_err();
    assert_eq!(
        errors.get("techs[0].knowledge"),
        Some("knowledge must be between 1 and 100")
    );
    assert_eq!(errors.get("techs[1].title"), Some("title is required"));
    assert!(errors.get("techs[0].title").is_none());
    assert!(errors.get("techs[1].knowledge").is_none());
}

#[test]
fn test_knowledge_range_is_inclusive() {
    for (value, expect_ok) in [("0", false), ("1", true), ("100", true), ("101", false)] {
        let mut input = valid_submission();
        input.techs[0] = TechInput::new("A", value);
        assert_eq!(
            validate(&input).is_ok(),
            expect_ok,
            "knowledge {:?} should be {}",
            value,
            if expect_ok { "accepted" } else { "rejected" }
        );
    }
}

#[test]
fn test_name_normalization_is_idempotent() {
    let mut input = valid_submission();
    let once = validate(&input).unwrap();

    input.name = once.name.clone();
    let twice = validate(&input).unwrap();
    assert_eq!(once.name, twice.name);
}

#[test]
fn test_name_with_irregular_spacing_does_not_panic() {
    let mut input = valid_submission();
    input.name = "  ada    lovelace  ".to_string();
    assert_eq!(validate(&input).unwrap().name, "Ada Lovelace");
}

#[test]
fn test_single_tech_row_still_validated() {
    let mut input = valid_submission();
    input.techs = vec![TechInput::new("", "0")];

    let errors = validate(&input).unwrap_err();
    assert_eq!(errors.get("techs"), Some(rules::TECHS_TOO_FEW));
    assert_eq!(errors.get("techs[0].title"), Some(rules::TITLE_REQUIRED));
    assert_eq!(
        errors.get("techs[0].knowledge"),
        Some(rules::KNOWLEDGE_OUT_OF_RANGE)
    );
}

#[test]
fn test_numeric_knowledge_accepted() {
    let mut input = valid_submission();
    input.techs = vec![TechInput::new("X", 50), TechInput::new("Y", 10)];
    let output = validate(&input).unwrap();
    assert_eq!(output.techs[0].knowledge, 50);
}

#[test]
fn test_validation_is_stateless_across_calls() {
    let bad = SubmissionInput::default();
    let good = valid_submission();

    assert!(validate(&bad).is_err());
    assert!(validate(&good).is_ok());
    assert!(validate(&bad).is_err());
    let errors = validate(&bad).unwrap_err();
    assert_eq!(errors.len(), 4);
}
