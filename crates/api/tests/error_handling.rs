//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no HTTP server
//! is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use serde_json::json;
use tattoo_api::error::AppError;
use tattoo_core::error::CoreError;
use tattoo_core::payload::{FixedValueSpec, PayloadError, TypeMismatch, ValueKind};

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: PayloadError::FieldMissing maps to 400 with FIELD_MISSING code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn field_missing_returns_400_with_missing_list() {
    let err = AppError::from(PayloadError::FieldMissing {
        missing: vec!["price".into()],
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "FIELD_MISSING");
    assert_eq!(json["error"], r#"missing keys: ["price"]"#);
    assert_eq!(json["details"]["missing"], json!(["price"]));
}

// ---------------------------------------------------------------------------
// Test: PayloadError::InvalidValueTypes maps to 400 with INVALID_VALUE_TYPES
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_value_types_returns_400_with_mismatches() {
    let err = AppError::from(PayloadError::InvalidValueTypes {
        mismatches: vec![TypeMismatch {
            field: "price".into(),
            expected: ValueKind::Float,
            actual: Some(ValueKind::Text),
        }],
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_VALUE_TYPES");
    assert_eq!(
        json["details"]["error"],
        "Invalid type, `price` type should be float but was text"
    );
    assert_eq!(json["details"]["mismatches"][0]["field"], "price");
}

// ---------------------------------------------------------------------------
// Test: PayloadError::InvalidFixedValue maps to 400 with BAD_REQUEST code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_fixed_value_returns_400_with_options() {
    let mut received = serde_json::Map::new();
    received.insert("status".into(), json!("Done"));
    let err = AppError::from(PayloadError::InvalidFixedValue {
        valid_options: FixedValueSpec::new().field("status", vec![json!("Success")]),
        received_options: received,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(
        json["details"]["msg"]["valid_options"]["status"],
        json!(["Success"])
    );
    assert_eq!(json["details"]["msg"]["received_options"]["status"], "Done");
}

// ---------------------------------------------------------------------------
// Test: AppError::BadRequest maps to 400 with BAD_REQUEST code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
    assert!(json.get("details").is_none());
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400 with VALIDATION_ERROR code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("fields must not be empty".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "fields must not be empty");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Unauthorized maps to 401 with UNAUTHORIZED code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unauthorized_error_returns_401() {
    let err = AppError::Core(CoreError::Unauthorized("no token provided".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "no token provided");
}

// ---------------------------------------------------------------------------
// Test: AppError::InternalError maps to 500 and sanitizes the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("secret database credentials leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(
        !json.to_string().contains("secret"),
        "Internal error response must not leak sensitive details"
    );
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Test: sqlx errors map to 500 and are sanitized
// ---------------------------------------------------------------------------

#[tokio::test]
async fn database_error_returns_500_and_sanitizes() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
