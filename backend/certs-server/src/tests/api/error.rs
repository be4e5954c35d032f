use crate::ApiError;

use certs_core::CoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Certificate abc not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Certificate abc not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("Email is required", "email");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_forbidden_returns_403() {
    let response = ApiError::forbidden("Unknown owner x").into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let error = ApiError::BadRequest {
        message: "Failed to parse the request body as JSON".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[test]
fn test_core_not_found_converts_to_not_found() {
    let api_error: ApiError = CoreError::not_found("Certificate", "abc").into();

    assert!(matches!(api_error, ApiError::NotFound { .. }));
    assert!(api_error.to_string().contains("Certificate abc not found"));
}

#[test]
fn test_core_already_exists_converts_to_conflict() {
    let api_error: ApiError = CoreError::already_exists("User", "abc").into();

    assert!(matches!(api_error, ApiError::Conflict { .. }));
}

#[test]
fn test_core_invalid_state_converts_to_conflict() {
    let api_error: ApiError = CoreError::invalid_state("no transfer").into();

    assert!(matches!(api_error, ApiError::Conflict { .. }));
}

#[test]
fn test_core_validation_converts_to_validation() {
    let api_error: ApiError = CoreError::validation("title must not be blank").into();

    match api_error {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(message, "title must not be blank");
            assert!(field.is_none());
        }
        other => panic!("Expected Validation, got {other:?}"),
    }
}

#[test]
fn test_invalid_transfer_status_converts_to_validation_on_status_field() {
    let core_error = "accepted"
        .parse::<certs_core::TransferStatus>()
        .unwrap_err();
    let api_error: ApiError = core_error.into();

    match api_error {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("status")),
        other => panic!("Expected Validation, got {other:?}"),
    }
}
