//! Common test helpers for integration tests

use regform::submission::{SubmissionInput, TechInput};

/// A submission that satisfies every field rule.
pub fn valid_submission() -> SubmissionInput {
    SubmissionInput {
        name: "joão silva".to_string(),
        email: "a@b.com".to_string(),
        password: "123456".to_string(),
        techs: vec![TechInput::new("X", "50"), TechInput::new("Y", "10")],
    }
}

/// JSON form of a valid submission, knowledge as strings like a text widget
/// produces.
pub fn valid_submission_json() -> &'static str {
    r#"{
        "name": "joão silva",
        "email": "a@b.com",
        "password": "123456",
        "techs": [
            {"title": "X", "knowledge": "50"},
            {"title": "Y", "knowledge": "10"}
        ]
    }"#
}
