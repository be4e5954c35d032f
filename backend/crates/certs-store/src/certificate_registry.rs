use crate::UserDirectory;

use certs_core::{Certificate, CoreError, Result as CoreErrorResult, Transfer, derive_id};

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

const ENTITY: &str = "Certificate";

/// In-memory certificate store and transfer state machine.
///
/// Holds a handle to the user directory it resolves transfer recipients
/// against. Lock order is always registry then directory.
pub struct CertificateRegistry {
    inner: Arc<RwLock<RegistryInner>>,
    users: UserDirectory,
}

#[derive(Default)]
struct RegistryInner {
    /// All certificates by id
    certificates: HashMap<String, Certificate>,
}

impl CertificateRegistry {
    pub fn new(users: UserDirectory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(RegistryInner::default())),
            users,
        }
    }

    /// Register a certificate under the id derived from its title and write
    /// that id back into `cert`.
    ///
    /// Two certificates with the same title collide: the second one fails
    /// with `AlreadyExists`, whoever owns it.
    pub async fn create_certificate(&self, cert: &mut Certificate) -> CoreErrorResult<()> {
        let id = derive_id(&cert.title);
        let mut inner = self.inner.write().await;

        if inner.certificates.contains_key(&id) {
            return Err(CoreError::already_exists(ENTITY, id));
        }

        cert.id = id.clone();
        inner.certificates.insert(id, cert.clone());

        Ok(())
    }

    /// Replace the stored record wholesale. Nothing is merged, so the caller
    /// must send every field it wants to keep.
    pub async fn update_certificate(&self, cert: Certificate) -> CoreErrorResult<()> {
        let mut inner = self.inner.write().await;

        match inner.certificates.get_mut(&cert.id) {
            Some(stored) => {
                *stored = cert;
                Ok(())
            }
            None => Err(CoreError::not_found(ENTITY, cert.id)),
        }
    }

    /// Remove a certificate if present. Unknown ids are ignored.
    pub async fn delete_certificate(&self, id: &str) {
        let mut inner = self.inner.write().await;
        inner.certificates.remove(id);
    }

    /// Every certificate owned by `owner_id`, in no particular order.
    ///
    /// There is no owner index; this walks the whole collection.
    pub async fn get_certificates_by_owner_id(&self, owner_id: &str) -> Vec<Certificate> {
        let inner = self.inner.read().await;
        inner
            .certificates
            .values()
            .filter(|cert| cert.is_owned_by(owner_id))
            .cloned()
            .collect()
    }

    pub async fn get_certificate_by_id(&self, id: &str) -> CoreErrorResult<Certificate> {
        let inner = self.inner.read().await;
        inner
            .certificates
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::not_found(ENTITY, id))
    }

    /// Whether `owner_id` owns the certificate.
    ///
    /// Only a missing certificate is an error; a foreign owner is `Ok(false)`.
    pub async fn check_ownership(&self, cert_id: &str, owner_id: &str) -> CoreErrorResult<bool> {
        let inner = self.inner.read().await;
        inner
            .certificates
            .get(cert_id)
            .map(|cert| cert.is_owned_by(owner_id))
            .ok_or_else(|| CoreError::not_found(ENTITY, cert_id))
    }

    /// Overwrite the certificate's transfer with `transfer`, whatever state
    /// the previous one was in.
    pub async fn create_transfer(&self, cert_id: &str, transfer: Transfer) -> CoreErrorResult<()> {
        let mut inner = self.inner.write().await;
        let cert = inner
            .certificates
            .get_mut(cert_id)
            .ok_or_else(|| CoreError::not_found(ENTITY, cert_id))?;

        cert.transfer = transfer;
        Ok(())
    }

    /// Complete a pending transfer.
    ///
    /// The recipient is looked up by the transfer email and registered on the
    /// spot if unknown. Ownership then moves to the recipient and the transfer
    /// is cleared. The registry write lock is held throughout, so concurrent
    /// acceptances never interleave between the recipient lookup and the
    /// ownership change.
    ///
    /// A recipient created here stays registered even if the ownership update
    /// never happens (e.g. the task panics in between); nothing rolls it back.
    pub async fn accept_transfer(&self, cert_id: &str) -> CoreErrorResult<Certificate> {
        let mut inner = self.inner.write().await;
        let cert = inner
            .certificates
            .get_mut(cert_id)
            .ok_or_else(|| CoreError::not_found(ENTITY, cert_id))?;

        if !cert.has_pending_transfer() {
            return Err(CoreError::invalid_state(format!(
                "no transfer has been initiated for certificate {cert_id}"
            )));
        }

        let recipient = self
            .users
            .resolve_or_create_by_email(&cert.transfer.email)
            .await?;

        cert.owner_id = recipient.id;
        cert.transfer = Transfer::none();

        Ok(cert.clone())
    }

    pub async fn count(&self) -> usize {
        let inner = self.inner.read().await;
        inner.certificates.len()
    }
}

impl Clone for CertificateRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            users: self.users.clone(),
        }
    }
}
