use serde::Deserialize;

/// Any status in the body is ignored; new transfers always start pending
#[derive(Debug, Deserialize)]
pub struct CreateTransferRequest {
    /// Recipient email
    pub email: String,
}
