//! Certificate REST API handlers
//!
//! Every handler here runs behind the `OwnerId` extractor. The caller's id is
//! bound to new certificates and checked against the stored owner before any
//! mutation.

use crate::{
    ApiError, ApiResult, AppState, CertificateResponse, CreateCertificateRequest, DeleteResponse,
    OwnerId, UpdateCertificateRequest,
};

use certs_core::Certificate;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::Utc;

/// Fail unless `owner_id` owns certificate `id` (404 when it does not exist)
pub(crate) async fn ensure_owner(state: &AppState, id: &str, owner_id: &str) -> ApiResult<()> {
    if state.certificates.check_ownership(id, owner_id).await? {
        return Ok(());
    }

    log::warn!(
        "Owner mismatch: {} attempted to modify certificate {}",
        owner_id,
        id
    );
    Err(ApiError::forbidden(format!(
        "Certificate {} is not owned by {}",
        id, owner_id
    )))
}

/// POST /certificates/
pub async fn create_certificate(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
    payload: Result<Json<CreateCertificateRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CertificateResponse>)> {
    let Json(req) = payload?;

    let mut certificate = Certificate::new(req.title.trim(), owner_id, req.year, Utc::now());
    certificate.note = req.note;
    certificate.validate()?;

    state.certificates.create_certificate(&mut certificate).await?;
    log::info!(
        "Created certificate {} for owner {}",
        certificate.id,
        certificate.owner_id
    );

    Ok((
        StatusCode::CREATED,
        Json(CertificateResponse {
            certificate: certificate.into(),
        }),
    ))
}

/// GET /certificates/:id/
pub async fn get_certificate(
    State(state): State<AppState>,
    OwnerId(_owner_id): OwnerId,
    Path(id): Path<String>,
) -> ApiResult<Json<CertificateResponse>> {
    let certificate = state.certificates.get_certificate_by_id(&id).await?;

    Ok(Json(CertificateResponse {
        certificate: certificate.into(),
    }))
}

/// PUT /certificates/:id/
///
/// Replace a certificate. The body must carry the path id and the caller as
/// owner, and the caller must own the stored record.
pub async fn update_certificate(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<String>,
    payload: Result<Json<UpdateCertificateRequest>, JsonRejection>,
) -> ApiResult<Json<CertificateResponse>> {
    let Json(req) = payload?;

    if req.id != id {
        log::warn!(
            "Certificate id mismatch on update: path {}, body {}",
            id,
            req.id
        );
        return Err(ApiError::validation(
            format!("Body id {} does not match path id {}", req.id, id),
            "id",
        ));
    }

    if req.owner_id != owner_id {
        log::warn!(
            "Owner mismatch on update of {}: caller {}, body {}",
            id,
            owner_id,
            req.owner_id
        );
        return Err(ApiError::forbidden(format!(
            "ownerId {} does not match caller {}",
            req.owner_id, owner_id
        )));
    }

    ensure_owner(&state, &id, &owner_id).await?;

    let mut certificate = Certificate::from(req);
    certificate.title = certificate.title.trim().to_string();
    certificate.validate()?;
    state
        .certificates
        .update_certificate(certificate.clone())
        .await?;

    Ok(Json(CertificateResponse {
        certificate: certificate.into(),
    }))
}

/// DELETE /certificates/:id/
pub async fn delete_certificate(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    ensure_owner(&state, &id, &owner_id).await?;

    state.certificates.delete_certificate(&id).await;
    log::info!("Deleted certificate {} for owner {}", id, owner_id);

    Ok(Json(DeleteResponse { deleted_id: id }))
}
