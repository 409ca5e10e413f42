//! Origin allow-list gate.
//!
//! `CorsLayer` only decides which headers to emit; a request from a
//! disallowed origin would still reach the handlers. This middleware sits
//! outside the CORS layer and refuses such requests outright, pre-flights
//! included, with an empty `403 Forbidden`. Requests without an `Origin`
//! header (same-origin or non-browser clients) pass through.

use axum::extract::{Request, State};
use axum::http::header::ORIGIN;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

pub async fn reject_unlisted_origin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(origin) = request.headers().get(ORIGIN) else {
        return next.run(request).await;
    };

    let allowed = origin
        .to_str()
        .map(|o| state.config.allows_origin(o))
        .unwrap_or(false);

    if allowed {
        return next.run(request).await;
    }

    tracing::warn!(
        origin = ?origin,
        method = %request.method(),
        uri = %request.uri(),
        "Rejected request from origin outside the allow-list"
    );
    StatusCode::FORBIDDEN.into_response()
}
