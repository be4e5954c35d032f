use serde::Deserialize;

/// Owner and creation time come from the request context, not the body
#[derive(Debug, Deserialize)]
pub struct CreateCertificateRequest {
    pub title: String,

    pub year: i32,

    #[serde(default)]
    pub note: String,
}
