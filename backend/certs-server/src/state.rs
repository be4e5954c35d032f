use certs_store::{CertificateRegistry, UserDirectory};

/// Shared application state for the HTTP handlers.
///
/// Both stores are handles; cloning the state shares the same data.
#[derive(Clone)]
pub struct AppState {
    pub users: UserDirectory,
    pub certificates: CertificateRegistry,
}

impl AppState {
    /// Wire a registry to the given directory
    pub fn new(users: UserDirectory) -> Self {
        let certificates = CertificateRegistry::new(users.clone());
        Self {
            users,
            certificates,
        }
    }
}
