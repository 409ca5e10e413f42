#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use movies_core::genre::Genre;
use movies_core::movie::Movie;
use movies_db::MovieStore;
use serde_json::Value;
use tower::ServiceExt;

use movies_api::config::ServerConfig;
use movies_api::router::build_app_router;
use movies_api::state::AppState;

pub const SHAWSHANK_ID: &str = "dcdd0fad-a94c-4810-8acc-5f108d3b18c3";
pub const DARK_KNIGHT_ID: &str = "c8a7d63f-3b04-44d3-9d95-8782fd7dcfaf";
pub const SUPERBAD_ID: &str = "4f3c2b1a-8d7e-4c6b-9a5f-1e2d3c4b5a69";

/// Allowed origin used by tests.
pub const ALLOWED_ORIGIN: &str = "https://movies.com";

/// Build a test `ServerConfig` with the default allow-list and no dataset file.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..ServerConfig::default()
    }
}

fn movie(id: &str, title: &str, year: i32, genre: Vec<Genre>) -> Movie {
    Movie {
        id: id.parse().unwrap(),
        title: title.to_string(),
        year,
        director: "Fixture Director".to_string(),
        duration: 120,
        poster: format!("https://posters.example.com/{id}.jpg"),
        genre,
        rate: 8.0,
    }
}

/// Three movies: two tagged Drama, one Comedy.
pub fn fixture_movies() -> Vec<Movie> {
    vec![
        movie(SHAWSHANK_ID, "The Shawshank Redemption", 1994, vec![Genre::Drama]),
        movie(
            DARK_KNIGHT_ID,
            "The Dark Knight",
            2008,
            vec![Genre::Action, Genre::Crime, Genre::Drama],
        ),
        movie(SUPERBAD_ID, "Superbad", 2007, vec![Genre::Comedy]),
    ]
}

/// Build the full application router over the fixture movies.
///
/// Uses the same [`build_app_router`] as `main.rs` so integration tests
/// exercise the production middleware stack (Origin gate, CORS, request ID,
/// timeout, tracing, panic recovery). Clones share one store.
pub fn build_test_app() -> Router {
    build_test_app_with(MovieStore::from_movies(fixture_movies()))
}

pub fn build_test_app_with(store: MovieStore) -> Router {
    build_app_router(AppState::new(store, test_config()))
}

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: &Router, uri: &str, body: Value) -> Response {
    send_json(app, Method::PATCH, uri, body).await
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Send a raw body string, for malformed or empty payloads.
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// A create body that passes validation.
pub fn valid_movie_body() -> Value {
    serde_json::json!({
        "title": "Parasite",
        "year": 2019,
        "director": "Bong Joon-ho",
        "duration": 132,
        "poster": "https://posters.example.com/parasite.jpg",
        "genre": ["Comedy", "Drama", "Thriller"],
        "rate": 8.5
    })
}
