//! In-memory record store for movies.
//!
//! [`MovieStore`] owns the records; handlers go through [`repositories::MovieRepo`].
//! The store is seeded once at startup from a JSON dataset and lives for the
//! lifetime of the process.

pub mod dataset;
pub mod repositories;
pub mod store;

pub use store::MovieStore;

use movies_core::validation::FieldViolation;

/// Errors raised while building a store from a dataset.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset is not a JSON array of movies: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dataset record {index} has a missing or non-canonical id")]
    InvalidId { index: usize },

    #[error("dataset record {index} is invalid: {} issue(s), first: {}", .issues.len(), first_issue(.issues))]
    InvalidRecord {
        index: usize,
        issues: Vec<FieldViolation>,
    },

    #[error("dataset record {index} reuses id {id}")]
    DuplicateId { index: usize, id: String },
}

fn first_issue(issues: &[FieldViolation]) -> String {
    issues
        .first()
        .map(|i| format!("{} ({})", i.field, i.message))
        .unwrap_or_default()
}
