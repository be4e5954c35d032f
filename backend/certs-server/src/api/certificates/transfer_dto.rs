use certs_core::{Transfer, TransferStatus};

use serde::{Deserialize, Serialize};

/// Transfer as embedded in certificate JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferDto {
    pub email: String,
    /// "none" or "pending"
    pub status: TransferStatus,
}

impl From<Transfer> for TransferDto {
    fn from(t: Transfer) -> Self {
        Self {
            email: t.email,
            status: t.status,
        }
    }
}

impl From<TransferDto> for Transfer {
    fn from(t: TransferDto) -> Self {
        Self {
            email: t.email,
            status: t.status,
        }
    }
}
