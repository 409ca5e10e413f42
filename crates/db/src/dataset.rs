//! Seed dataset parsing.
//!
//! A dataset is a JSON array of full movie records including their `id`.
//! Every record goes through the same validation as a create request, so
//! the store never holds a record the API would have refused.

use std::collections::HashSet;

use movies_core::movie::Movie;
use movies_core::types::parse_movie_id;
use movies_core::validation::validate_new_movie;
use serde_json::Value;

use crate::DbError;

/// The dataset shipped with the service.
pub const BUNDLED: &str = include_str!("../data/movies.json");

/// Parse a dataset into records, preserving their order.
pub fn parse(text: &str) -> Result<Vec<Movie>, DbError> {
    let records: Vec<Value> = serde_json::from_str(text)?;
    let mut seen = HashSet::with_capacity(records.len());
    let mut movies = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let id = record
            .get("id")
            .and_then(Value::as_str)
            .and_then(parse_movie_id)
            .ok_or(DbError::InvalidId { index })?;

        if !seen.insert(id) {
            return Err(DbError::DuplicateId {
                index,
                id: id.to_string(),
            });
        }

        let input = validate_new_movie(record).map_err(|err| DbError::InvalidRecord {
            index,
            issues: err.issues,
        })?;
        movies.push(Movie::from_new(id, input));
    }

    tracing::debug!(count = movies.len(), "Parsed movie dataset");
    Ok(movies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn bundled_dataset_is_valid() {
        let movies = parse(BUNDLED).unwrap();
        assert!(movies.len() >= 5);
    }

    #[test]
    fn rejects_records_without_ids() {
        let text = r#"[{"title": "No id"}]"#;
        assert_matches!(parse(text), Err(DbError::InvalidId { index: 0 }));
    }

    #[test]
    fn rejects_invalid_records() {
        let text = r#"[{"id": "c906673b-3948-4402-ac7f-73ac3a9e3105", "title": ""}]"#;
        assert_matches!(parse(text), Err(DbError::InvalidRecord { index: 0, .. }));
    }

    #[test]
    fn rejects_non_array_documents() {
        assert_matches!(parse(r#"{"movies": []}"#), Err(DbError::Json(_)));
    }
}
