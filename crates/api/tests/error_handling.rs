//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code, error code, and message. They do NOT need an HTTP server --
//! they call `IntoResponse` directly on `AppError` values.

use axum::response::IntoResponse;
use http_body_util::BodyExt;
use movies_api::error::AppError;
use movies_core::error::CoreError;
use movies_core::validation::FieldViolation;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn title_required() -> FieldViolation {
    FieldViolation::new("title", "required", "title is required").expecting("string")
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with NOT_FOUND code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Movie",
        id: "abc".to_string(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Movie with id abc not found");
    assert!(json.get("issues").is_none());
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400 with the issue list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400_with_issues() {
    let err = AppError::Core(CoreError::Validation(vec![title_required()]));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["issues"][0]["field"], "title");
    assert_eq!(json["issues"][0]["code"], "required");
    assert_eq!(json["issues"][0]["expected"], "string");
}

// ---------------------------------------------------------------------------
// Test: AppError::Unprocessable maps to 422 with the issue list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unprocessable_error_returns_422_with_issues() {
    let err = AppError::Unprocessable(vec![title_required()]);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["issues"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: AppError::InvalidJson maps to 400 with INVALID_JSON code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_json_error_returns_400() {
    let err = AppError::InvalidJson("EOF while parsing".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_JSON");
    assert_eq!(json["error"], "Invalid JSON body: EOF while parsing");
}

// ---------------------------------------------------------------------------
// Test: AppError::InternalError maps to 500 and sanitizes the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("index out of bounds in store".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
