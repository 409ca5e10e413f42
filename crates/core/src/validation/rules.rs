//! Field rules and violation types for the movie schema.

use std::borrow::Cow;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use validator::ValidationError;

/// Earliest accepted release year.
pub const MIN_YEAR: i32 = 1900;

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Dotted path of the offending field, e.g. `title` or `genre.2`.
    /// Empty when the body as a whole is at fault.
    pub field: String,
    /// Machine-readable rule name (`required`, `invalid_type`, `too_small`, ...).
    pub code: String,
    pub message: String,
    /// The violated constraint, e.g. `>= 1` or `string`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, code: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: code.to_string(),
            message: message.into(),
            expected: None,
        }
    }

    pub fn expecting(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }
}

/// JSON type a field must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Whole number that fits in an `i32`.
    Integer,
    Number,
    /// Array whose elements are genre names.
    GenreList,
}

impl FieldKind {
    pub fn describe(self) -> &'static str {
        match self {
            FieldKind::Text => "string",
            FieldKind::Integer => "integer",
            FieldKind::Number => "number",
            FieldKind::GenreList => "array",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Required on create. Every field is optional in a patch.
    pub required: bool,
}

/// The movie shape, in the order issues are reported.
pub const MOVIE_FIELDS: &[FieldRule] = &[
    FieldRule {
        name: "title",
        kind: FieldKind::Text,
        required: true,
    },
    FieldRule {
        name: "year",
        kind: FieldKind::Integer,
        required: true,
    },
    FieldRule {
        name: "director",
        kind: FieldKind::Text,
        required: true,
    },
    FieldRule {
        name: "duration",
        kind: FieldKind::Integer,
        required: true,
    },
    FieldRule {
        name: "rate",
        kind: FieldKind::Number,
        required: false,
    },
    FieldRule {
        name: "poster",
        kind: FieldKind::Text,
        required: true,
    },
    FieldRule {
        name: "genre",
        kind: FieldKind::GenreList,
        required: true,
    },
];

/// Latest accepted release year: next calendar year (UTC).
pub fn max_year() -> i32 {
    chrono::Utc::now().year() + 1
}

/// Custom `validator` rule bounding `year` to `MIN_YEAR..=max_year()`.
pub fn validate_release_year(year: i32) -> Result<(), ValidationError> {
    let max = max_year();
    if (MIN_YEAR..=max).contains(&year) {
        return Ok(());
    }
    let mut err = ValidationError::new("out_of_range").with_message(Cow::Owned(format!(
        "Year must be between {MIN_YEAR} and {max}"
    )));
    err.add_param(Cow::Borrowed("min"), &MIN_YEAR);
    err.add_param(Cow::Borrowed("max"), &max);
    err.add_param(Cow::Borrowed("value"), &year);
    Err(err)
}
