//! Repository for movie records.

use movies_core::movie::{Movie, MoviePatch, NewMovie};
use movies_core::types::{new_movie_id, MovieId};

use crate::MovieStore;

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// List movies in insertion order.
    ///
    /// With `genre`, keeps only movies that have a genre equal to it,
    /// ignoring case. An unknown genre yields an empty list.
    pub async fn list(store: &MovieStore, genre: Option<&str>) -> Vec<Movie> {
        let movies = store.read().await;
        match genre {
            Some(name) => movies.iter().filter(|m| m.has_genre(name)).cloned().collect(),
            None => movies.clone(),
        }
    }

    /// Find a movie by id.
    pub async fn find_by_id(store: &MovieStore, id: MovieId) -> Option<Movie> {
        store.read().await.iter().find(|m| m.id == id).cloned()
    }

    /// Append a new movie with a freshly generated id, returning it.
    pub async fn create(store: &MovieStore, input: NewMovie) -> Movie {
        let mut movies = store.write().await;
        let mut id = new_movie_id();
        while movies.iter().any(|m| m.id == id) {
            id = new_movie_id();
        }
        let movie = Movie::from_new(id, input);
        movies.push(movie.clone());
        movie
    }

    /// Merge `patch` onto the movie with `id`, replacing it in place.
    ///
    /// Returns `None` if no movie with the given `id` exists.
    pub async fn update(store: &MovieStore, id: MovieId, patch: MoviePatch) -> Option<Movie> {
        let mut movies = store.write().await;
        let index = movies.iter().position(|m| m.id == id)?;
        let mut updated = movies[index].clone();
        updated.apply(patch);
        movies[index] = updated.clone();
        Some(updated)
    }

    /// Remove the movie with `id`. Returns `true` if a row was removed.
    ///
    /// Later records keep their ids and relative order.
    pub async fn delete(store: &MovieStore, id: MovieId) -> bool {
        let mut movies = store.write().await;
        match movies.iter().position(|m| m.id == id) {
            Some(index) => {
                movies.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of movies currently stored.
    pub async fn count(store: &MovieStore) -> usize {
        store.read().await.len()
    }
}
