use crate::{CoreError, Result as CoreErrorResult, TransferStatus};

use serde::{Deserialize, Serialize};

/// Ownership hand-over recorded on a certificate.
///
/// A certificate carries at most one transfer. Starting a new one replaces
/// whatever was there, pending or not.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transfer {
    /// Recipient email; empty once the transfer has been accepted
    pub email: String,
    pub status: TransferStatus,
}

impl Transfer {
    /// A transfer waiting for `email` to accept it
    pub fn pending(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            status: TransferStatus::Pending,
        }
    }

    /// The cleared state left behind after acceptance
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.status == TransferStatus::Pending
    }

    /// A pending transfer must name a recipient address
    pub fn validate(&self) -> CoreErrorResult<()> {
        if !self.is_pending() {
            return Ok(());
        }

        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(CoreError::validation(format!(
                "transfer email '{}' is not a valid address",
                self.email
            )));
        }
        Ok(())
    }
}
