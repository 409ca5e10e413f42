use std::path::Path;

use movies_core::movie::Movie;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{dataset, DbError};

/// Ordered, process-wide collection of movie records.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across handlers. Records keep insertion order. Each mutation
/// takes the write lock once, so an index found under that lock is still
/// valid when it is used.
#[derive(Debug)]
pub struct MovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl MovieStore {
    /// Wrap an already-validated set of records.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(movies),
        }
    }

    /// Parse and validate a JSON dataset.
    pub fn from_json(text: &str) -> Result<Self, DbError> {
        dataset::parse(text).map(Self::from_movies)
    }

    /// Load the dataset compiled into the binary.
    pub fn bundled() -> Result<Self, DbError> {
        Self::from_json(dataset::BUNDLED)
    }

    /// Load a dataset file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DbError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DbError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Vec<Movie>> {
        self.movies.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Vec<Movie>> {
        self.movies.write().await
    }
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::from_movies(Vec::new())
    }
}
