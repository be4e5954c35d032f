use certs_core::{CoreError, Result as CoreErrorResult, User, derive_id};

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

const ENTITY: &str = "User";

/// In-memory user store keyed by the id derived from each user's email.
///
/// Cloning is cheap and every clone shares the same underlying maps.
#[derive(Default)]
pub struct UserDirectory {
    inner: Arc<RwLock<DirectoryInner>>,
}

#[derive(Default)]
struct DirectoryInner {
    users: HashMap<String, User>,
    /// email -> user id
    email_index: HashMap<String, String>,
}

impl DirectoryInner {
    fn insert(&mut self, user: &mut User) -> CoreErrorResult<()> {
        let id = derive_id(&user.email);
        if self.users.contains_key(&id) {
            return Err(CoreError::already_exists(ENTITY, id));
        }

        user.id = id.clone();
        self.email_index.insert(user.email.clone(), id.clone());
        self.users.insert(id, user.clone());

        Ok(())
    }

    fn find_by_email(&self, email: &str) -> Option<&User> {
        self.email_index
            .get(email)
            .and_then(|id| self.users.get(id))
    }
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new user and write the derived id back into `user`.
    ///
    /// Fails with `AlreadyExists` when a user with the same email is stored.
    pub async fn create_user(&self, user: &mut User) -> CoreErrorResult<()> {
        let mut inner = self.inner.write().await;
        inner.insert(user)
    }

    pub async fn get_user_by_id(&self, id: &str) -> CoreErrorResult<User> {
        let inner = self.inner.read().await;
        inner
            .users
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::not_found(ENTITY, id))
    }

    pub async fn get_user_by_email(&self, email: &str) -> CoreErrorResult<User> {
        let inner = self.inner.read().await;
        inner
            .find_by_email(email)
            .cloned()
            .ok_or_else(|| CoreError::not_found(ENTITY, email))
    }

    /// All users in no particular order
    pub async fn list_users(&self) -> Vec<User> {
        let inner = self.inner.read().await;
        inner.users.values().cloned().collect()
    }

    /// Return the user registered under `email`, registering a placeholder
    /// (name = email) when there is none.
    ///
    /// Lookup and insertion happen under one write lock, so two callers racing
    /// on the same unknown email end up with the same single user.
    pub async fn resolve_or_create_by_email(&self, email: &str) -> CoreErrorResult<User> {
        let mut inner = self.inner.write().await;

        if let Some(existing) = inner.find_by_email(email) {
            return Ok(existing.clone());
        }

        let mut user = User::from_email(email);
        inner.insert(&mut user)?;
        Ok(user)
    }

    pub async fn count(&self) -> usize {
        let inner = self.inner.read().await;
        inner.users.len()
    }
}

impl Clone for UserDirectory {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
