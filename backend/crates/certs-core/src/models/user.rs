//! User entity - the owner side of a certificate.

use crate::{CoreError, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};

/// A registered user.
///
/// `id` is empty until the user directory stores the record, at which point it
/// becomes the identifier derived from `email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl User {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            email: email.into(),
            name: name.into(),
        }
    }

    /// Placeholder account for a transfer recipient nobody registered yet.
    /// The email doubles as the display name.
    pub fn from_email(email: &str) -> Self {
        Self::new(email, email)
    }

    /// Reject users that could not have come from a well-formed request
    pub fn validate(&self) -> CoreErrorResult<()> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(CoreError::validation("email is required"));
        }
        if !email.contains('@') {
            return Err(CoreError::validation(format!(
                "email '{}' is not a valid address",
                self.email
            )));
        }
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("name is required"));
        }
        Ok(())
    }
}
