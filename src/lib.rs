//! # regform - registration-form validation
//!
//! regform validates user-registration submissions: a name, an email, a
//! password, and a dynamic list of technology rows. Given a raw submission
//! it applies a fixed set of field rules and returns either a normalized
//! record or the full list of field-level violations, keyed by field path.
//!
//! ## Core Concepts
//!
//! - **Submission**: raw form data ([`submission::SubmissionInput`]) and its
//!   normalized counterpart ([`submission::SubmissionOutput`])
//! - **Field rule**: a predicate plus a fixed failure message, chained per
//!   field in priority order ([`rules`])
//! - **Preview**: display-only rendering of a valid submission ([`preview`])
//!
//! ## Modules
//!
//! - [`submission`] - Input/output records and JSON loading
//! - [`rules`] - Per-field rule chains, messages, and the name transform
//! - [`validate`] - The validation entry point and error aggregation
//! - [`preview`] - Pretty-JSON and sectioned-text previews
//! - [`ui`] - Terminal color helpers shared by the CLI
//!
//! ## Example
//!
//! ```
//! use regform::submission::{SubmissionInput, TechInput};
//! use regform::validate::validate;
//!
//! let input = SubmissionInput {
//!     name: "joão silva".to_string(),
//!     email: "a@b.com".to_string(),
//!     password: "123456".to_string(),
//!     techs: vec![
//!         TechInput::new("Rust", "50"),
//!         TechInput::new("SQL", "10"),
//!     ],
//! };
//!
//! let output = validate(&input).expect("submission is valid");
//! assert_eq!(output.name, "João Silva");
//! assert_eq!(output.techs[0].knowledge, 50);
//! ```

pub mod preview;
pub mod rules;
pub mod submission;
pub mod ui;
pub mod validate;

pub use submission::{KnowledgeValue, SubmissionInput, SubmissionOutput, TechEntry, TechInput};
pub use validate::{validate, FieldError, FieldErrors};
