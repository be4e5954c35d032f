use crate::TransferDto;

use certs_core::Certificate;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Full replacement of a certificate.
///
/// Updates overwrite the whole record: `note` and `transfer` fall back to
/// empty values when omitted rather than keeping what was stored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCertificateRequest {
    /// Must match the id in the path
    pub id: String,

    pub title: String,

    pub created_at: DateTime<Utc>,

    /// Must match the caller
    pub owner_id: String,

    pub year: i32,

    #[serde(default)]
    pub note: String,

    #[serde(default)]
    pub transfer: TransferDto,
}

impl From<UpdateCertificateRequest> for Certificate {
    fn from(req: UpdateCertificateRequest) -> Self {
        Self {
            id: req.id,
            title: req.title,
            created_at: req.created_at,
            owner_id: req.owner_id,
            year: req.year,
            note: req.note,
            transfer: req.transfer.into(),
        }
    }
}
