//! User REST API handlers

use crate::{
    ApiResult, AppState, CertificateDto, CertificateListResponse, CreateUserRequest, UserDto,
    UserListResponse, UserResponse,
};

use certs_core::User;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

/// GET /users/
pub async fn list_users(State(state): State<AppState>) -> Json<UserListResponse> {
    let users = state.users.list_users().await;

    Json(UserListResponse {
        users: users.into_iter().map(UserDto::from).collect(),
    })
}

/// POST /users/
///
/// Register a user. The id is derived from the email, so a second
/// registration with the same email is a conflict.
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let Json(req) = payload?;

    let mut user = User::new(req.email.trim(), req.name.trim());
    user.validate()?;

    state.users.create_user(&mut user).await?;
    log::info!("Created user {} ({})", user.id, user.email);

    Ok((StatusCode::CREATED, Json(UserResponse { user: user.into() })))
}

/// GET /users/:id/certificates/
///
/// Certificates owned by a user. Unknown ids simply own nothing.
pub async fn list_user_certificates(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<CertificateListResponse> {
    let certificates = state.certificates.get_certificates_by_owner_id(&id).await;

    Json(CertificateListResponse {
        certificates: certificates.into_iter().map(CertificateDto::from).collect(),
    })
}
