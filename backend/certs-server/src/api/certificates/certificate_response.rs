use crate::CertificateDto;
use serde::Serialize;

/// Single certificate response
#[derive(Debug, Serialize)]
pub struct CertificateResponse {
    pub certificate: CertificateDto,
}
