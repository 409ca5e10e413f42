//! Schema validation for movie request bodies.
//!
//! Validation runs in three stages: shape checks on the raw JSON
//! ([`evaluator`]), typed decoding with serde, then constraint checks with
//! the `validator` derive on [`NewMovie`] / [`MoviePatch`]. Each stage only
//! runs when the previous one passed, and any failure yields the full list
//! of issues found by that stage.

pub mod evaluator;
pub mod rules;

use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors};

pub use evaluator::Mode;
pub use rules::FieldViolation;

use crate::error::CoreError;
use crate::movie::{MoviePatch, NewMovie};
use rules::MOVIE_FIELDS;

/// A body that failed validation, with one entry per problem found.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("movie failed validation with {} issue(s)", .issues.len())]
pub struct SchemaError {
    pub issues: Vec<FieldViolation>,
}

impl From<SchemaError> for CoreError {
    fn from(err: SchemaError) -> Self {
        CoreError::Validation(err.issues)
    }
}

/// Validate a create body: every required field present and in range.
pub fn validate_new_movie(body: &Value) -> Result<NewMovie, SchemaError> {
    validate_as(body, Mode::Full)
}

/// Validate an update body: any subset of fields, each checked like on create.
pub fn validate_movie_patch(body: &Value) -> Result<MoviePatch, SchemaError> {
    validate_as(body, Mode::Partial)
}

fn validate_as<T>(body: &Value, mode: Mode) -> Result<T, SchemaError>
where
    T: DeserializeOwned + Validate,
{
    let object = evaluator::check_shape(MOVIE_FIELDS, body, mode)
        .map_err(|issues| SchemaError { issues })?;

    let candidate: T = serde_json::from_value(Value::Object(object.clone())).map_err(|e| {
        SchemaError {
            issues: vec![FieldViolation::new("", "invalid_type", e.to_string())],
        }
    })?;

    candidate.validate().map_err(|errors| SchemaError {
        issues: constraint_violations(&errors),
    })?;

    Ok(candidate)
}

/// Flatten `validator` errors into violations, in movie field order.
fn constraint_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let by_field = errors.field_errors();
    MOVIE_FIELDS
        .iter()
        .filter_map(|rule| by_field.get(rule.name).map(|list| (rule.name, list)))
        .flat_map(|(field, list)| list.iter().map(move |err| to_violation(field, err)))
        .collect()
}

fn to_violation(field: &str, err: &ValidationError) -> FieldViolation {
    let message = err
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("Invalid value for {field}"));

    let violation = FieldViolation::new(field, &err.code, message);
    match expected_constraint(err) {
        Some(expected) => violation.expecting(expected),
        None => violation,
    }
}

fn expected_constraint(err: &ValidationError) -> Option<String> {
    if err.code == "invalid_url" {
        return Some("URL".to_string());
    }
    // `length` and `range` both report their bounds as min/max params.
    let bound = |key: &str| err.params.get(key).map(|v| v.to_string());
    match (bound("min"), bound("max")) {
        (Some(min), Some(max)) => Some(format!("between {min} and {max}")),
        (Some(min), None) => Some(format!(">= {min}")),
        (None, Some(max)) => Some(format!("<= {max}")),
        (None, None) => None,
    }
}
