#![allow(dead_code)]

//! Fixtures shared by the store tests

use certs_core::{Certificate, User};
use certs_store::{CertificateRegistry, UserDirectory};

use chrono::Utc;

/// A fresh directory and a registry wired to it
pub fn create_test_stores() -> (UserDirectory, CertificateRegistry) {
    let users = UserDirectory::new();
    let certificates = CertificateRegistry::new(users.clone());
    (users, certificates)
}

/// Creates an unregistered test User
pub fn create_test_user() -> User {
    User::new("test.user@example.com", "Test User")
}

/// Creates an unregistered test Certificate with sensible defaults
pub fn create_test_certificate(title: &str, owner_id: &str) -> Certificate {
    let mut cert = Certificate::new(title, owner_id, 2019, Utc::now());
    cert.note = "Test note".to_string();
    cert
}
