use crate::TransferDto;

use certs_core::Certificate;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Certificate DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateDto {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub owner_id: String,
    pub year: i32,
    pub note: String,
    pub transfer: TransferDto,
}

impl From<Certificate> for CertificateDto {
    fn from(c: Certificate) -> Self {
        Self {
            id: c.id,
            title: c.title,
            created_at: c.created_at,
            owner_id: c.owner_id,
            year: c.year,
            note: c.note,
            transfer: c.transfer.into(),
        }
    }
}
