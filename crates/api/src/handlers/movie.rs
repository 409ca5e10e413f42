//! Handlers for the `/movies` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use movies_core::error::CoreError;
use movies_core::movie::Movie;
use movies_core::types::{parse_movie_id, MovieId};
use movies_core::validation::{validate_movie_patch, validate_new_movie};
use movies_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::query::GenreFilter;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /movies?genre=
///
/// List all movies, or those with a genre equal to `genre` ignoring case.
pub async fn list(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<Movie>> {
    let filter = GenreFilter::from_pairs(pairs);
    Json(MovieRepo::list(&state.store, filter.genre()).await)
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Movie>> {
    let movie_id = known_id(&id)?;
    let movie = MovieRepo::find_by_id(&state.store, movie_id)
        .await
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(movie))
}

/// POST /movies
///
/// Validation failures answer 422 with the list of issues.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let input = validate_new_movie(&body).map_err(AppError::unprocessable)?;
    let movie = MovieRepo::create(&state.store, input).await;
    tracing::info!(movie_id = %movie.id, title = %movie.title, "Movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

/// PATCH /movies/{id}
///
/// The body is validated before the id is looked up, so an invalid body
/// answers 400 even for an unknown id. An empty body returns the movie
/// unchanged.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<Movie>> {
    let patch = validate_movie_patch(&body).map_err(CoreError::from)?;
    let movie_id = known_id(&id)?;

    if patch.is_empty() {
        let movie = MovieRepo::find_by_id(&state.store, movie_id)
            .await
            .ok_or_else(|| not_found(&id))?;
        return Ok(Json(movie));
    }

    let movie = MovieRepo::update(&state.store, movie_id, patch)
        .await
        .ok_or_else(|| not_found(&id))?;
    tracing::info!(movie_id = %movie.id, "Movie updated");
    Ok(Json(movie))
}

/// DELETE /movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let movie_id = known_id(&id)?;
    if !MovieRepo::delete(&state.store, movie_id).await {
        return Err(not_found(&id));
    }
    tracing::info!(movie_id = %movie_id, "Movie deleted");
    Ok(Json(MessageResponse {
        message: "Movie deleted",
    }))
}

/// An id that is not a canonical UUID cannot name a stored movie.
fn known_id(raw: &str) -> AppResult<MovieId> {
    parse_movie_id(raw).ok_or_else(|| not_found(raw))
}

fn not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Movie",
        id: id.to_string(),
    })
}
