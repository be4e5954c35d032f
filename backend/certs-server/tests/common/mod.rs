#![allow(dead_code)]

//! Test infrastructure for certs-server API tests

use certs_config::CorsConfig;
use certs_core::{Certificate, User};
use certs_server::{AppState, OWNER_ID_HEADER, build_router};
use certs_store::UserDirectory;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::Utc;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Fresh, empty stores
pub fn create_test_app_state() -> AppState {
    AppState::new(UserDirectory::new())
}

pub fn create_test_router(state: &AppState) -> Router {
    build_router(state.clone(), &CorsConfig::default())
}

/// Register a user directly in the directory
pub async fn create_test_user(state: &AppState, email: &str, name: &str) -> User {
    let mut user = User::new(email, name);
    state
        .users
        .create_user(&mut user)
        .await
        .expect("Failed to create test user");
    user
}

/// Create a certificate directly in the registry
pub async fn create_test_certificate(state: &AppState, title: &str, owner_id: &str) -> Certificate {
    let mut certificate = Certificate::new(title, owner_id, 2019, Utc::now());
    certificate.note = "Test note".to_string();
    state
        .certificates
        .create_certificate(&mut certificate)
        .await
        .expect("Failed to create test certificate");
    certificate
}

/// Send one request through a fresh router and decode the JSON reply
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    owner_id: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(owner_id) = owner_id {
        builder = builder.header(OWNER_ID_HEADER, owner_id);
    }

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = create_test_router(state).oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}
