//! Transfer REST API handlers
//!
//! A transfer is started by the owner and accepted afterwards. Accepting
//! hands the certificate to the user registered under the transfer email,
//! registering that user first if needed.

use crate::{
    ApiError, ApiResult, AppState, CertificateResponse, CreateTransferRequest, OwnerId,
    api::certificates::certificates::ensure_owner,
};

use certs_core::Transfer;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

/// POST /certificates/:id/transfers/
///
/// Start (or restart) a transfer. Any earlier transfer is overwritten.
pub async fn create_transfer(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<String>,
    payload: Result<Json<CreateTransferRequest>, JsonRejection>,
) -> ApiResult<Json<CertificateResponse>> {
    let Json(req) = payload?;

    let email = req.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::validation(
            format!("'{}' is not a valid recipient email", req.email),
            "email",
        ));
    }

    ensure_owner(&state, &id, &owner_id).await?;

    state
        .certificates
        .create_transfer(&id, Transfer::pending(email))
        .await?;
    log::info!(
        "Transfer of certificate {} to {} initiated by {}",
        id,
        email,
        owner_id
    );

    let certificate = state.certificates.get_certificate_by_id(&id).await?;
    Ok(Json(CertificateResponse {
        certificate: certificate.into(),
    }))
}

/// PUT /certificates/:id/transfers/
///
/// Accept the pending transfer. Any authenticated caller may accept.
pub async fn accept_transfer(
    State(state): State<AppState>,
    OwnerId(caller_id): OwnerId,
    Path(id): Path<String>,
) -> ApiResult<Json<CertificateResponse>> {
    let certificate = state.certificates.accept_transfer(&id).await?;
    log::info!(
        "Transfer of certificate {} accepted by {}, new owner {}",
        id,
        caller_id,
        certificate.owner_id
    );

    Ok(Json(CertificateResponse {
        certificate: certificate.into(),
    }))
}
