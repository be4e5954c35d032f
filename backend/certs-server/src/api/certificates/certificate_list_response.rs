use crate::CertificateDto;
use serde::Serialize;

/// List of certificates response
#[derive(Debug, Serialize)]
pub struct CertificateListResponse {
    pub certificates: Vec<CertificateDto>,
}
