//! Submission loading: JSON parsing, file loading, preview rendering.

use std::fs;

use regform::preview;
use regform::submission::SubmissionInput;
use regform::validate::validate;

use crate::common::{valid_submission_json, valid_submission};

#[test]
fn test_load_submission_from_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("submission.json");
    fs::write(&path, valid_submission_json()).unwrap();

    let input = SubmissionInput::load(&path).unwrap();
    let output = validate(&input).unwrap();
    assert_eq!(output.name, "João Silva");
}

#[test]
fn test_load_missing_file_reports_path() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("nope.json");

    let err = SubmissionInput::load(&path).unwrap_err();
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn test_load_malformed_json_reports_path() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("broken.json");
    fs::write(&path, "{not json").unwrap();

    let err = SubmissionInput::load(&path).unwrap_err();
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_partial_json_validates_instead_of_failing_to_parse() {
    let input = SubmissionInput::from_json(r#"{"email": "a@b.com"}"#).unwrap();
    let errors = validate(&input).unwrap_err();

    assert_eq!(errors.get("name"), Some("name is required"));
    assert_eq!(errors.get("password"), Some("password is required"));
    assert!(errors.get("email").is_none());
}

#[test]
fn test_preview_json_round_trips_through_serde() {
    let output = validate(&valid_submission()).unwrap();
    let json = preview::to_pretty_json(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["name"], "João Silva");
    assert_eq!(value["techs"][0]["knowledge"], 50);
    assert_eq!(value["techs"].as_array().unwrap().len(), 2);
}

#[test]
fn test_error_list_serializes_for_machine_output() {
    let errors = validate(&SubmissionInput::default()).unwrap_err();
    let json = serde_json::to_value(&errors).unwrap();

    let paths: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["name", "email", "password", "techs"]);
}
