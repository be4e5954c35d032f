//! Certificate entity - a record that a user owns a titled item.

use crate::{CoreError, Result as CoreErrorResult, Transfer};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A certificate of ownership.
///
/// The id is derived from the title, so two certificates with the same title
/// cannot coexist regardless of who owns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: String,
    pub title: String,
    /// Stamped by the caller before the certificate is registered
    pub created_at: DateTime<Utc>,
    /// Id of the owning user; not checked against the user directory
    pub owner_id: String,
    pub year: i32,
    pub note: String,
    pub transfer: Transfer,
}

impl Certificate {
    /// Build an unregistered certificate with an empty note and no transfer
    pub fn new(
        title: impl Into<String>,
        owner_id: impl Into<String>,
        year: i32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            created_at,
            owner_id: owner_id.into(),
            year,
            note: String::new(),
            transfer: Transfer::none(),
        }
    }

    pub fn is_owned_by(&self, owner_id: &str) -> bool {
        self.owner_id == owner_id
    }

    pub fn has_pending_transfer(&self) -> bool {
        self.transfer.is_pending()
    }

    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::validation("title is required"));
        }
        if self.owner_id.is_empty() {
            return Err(CoreError::validation("owner is required"));
        }
        self.transfer.validate()
    }
}
