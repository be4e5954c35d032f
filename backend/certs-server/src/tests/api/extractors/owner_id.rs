use crate::{AppState, OWNER_ID_HEADER, OwnerId};

use certs_core::User;
use certs_store::UserDirectory;

use axum::{body::Body, extract::FromRequestParts, http::Request};

async fn create_test_state() -> (AppState, User) {
    let state = AppState::new(UserDirectory::new());
    let mut user = User::new("owner@example.com", "Owner");
    state
        .users
        .create_user(&mut user)
        .await
        .expect("Failed to create test user");
    (state, user)
}

#[tokio::test]
async fn test_extractor_with_registered_owner() {
    let (state, user) = create_test_state().await;
    let request = Request::builder()
        .header(OWNER_ID_HEADER, user.id.as_str())
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = OwnerId::from_request_parts(&mut parts, &state).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().0, user.id);
}

#[tokio::test]
async fn test_extractor_trims_header_value() {
    let (state, user) = create_test_state().await;
    let request = Request::builder()
        .header(OWNER_ID_HEADER, format!("  {}  ", user.id))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = OwnerId::from_request_parts(&mut parts, &state).await;

    assert_eq!(result.unwrap().0, user.id);
}

#[tokio::test]
async fn test_extractor_rejects_missing_header() {
    let (state, _user) = create_test_state().await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = OwnerId::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(crate::ApiError::Forbidden { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_unknown_owner() {
    let (state, _user) = create_test_state().await;
    let request = Request::builder()
        .header(OWNER_ID_HEADER, "00000000000000000000000000000000")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = OwnerId::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(crate::ApiError::Forbidden { .. })));
}
