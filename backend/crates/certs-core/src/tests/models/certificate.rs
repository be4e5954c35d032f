use crate::{Certificate, CoreError, Transfer};

use chrono::Utc;

#[test]
fn test_certificate_new() {
    let now = Utc::now();
    let cert = Certificate::new("Blah", "ab12", 2020, now);

    assert!(cert.id.is_empty());
    assert_eq!(cert.title, "Blah");
    assert_eq!(cert.owner_id, "ab12");
    assert_eq!(cert.year, 2020);
    assert_eq!(cert.created_at, now);
    assert!(cert.note.is_empty());
    assert_eq!(cert.transfer, Transfer::none());
}

#[test]
fn test_certificate_is_owned_by() {
    let cert = Certificate::new("Blah", "ab12", 2020, Utc::now());

    assert!(cert.is_owned_by("ab12"));
    assert!(!cert.is_owned_by("abcddef"));
}

#[test]
fn test_certificate_has_pending_transfer() {
    let mut cert = Certificate::new("Blah", "ab12", 2020, Utc::now());
    assert!(!cert.has_pending_transfer());

    cert.transfer = Transfer::pending("bob@table.com");
    assert!(cert.has_pending_transfer());
}

#[test]
fn test_certificate_validate_rejects_blank_title() {
    let cert = Certificate::new(" ", "ab12", 2020, Utc::now());
    assert!(matches!(cert.validate(), Err(CoreError::Validation { .. })));
}

#[test]
fn test_certificate_validate_rejects_missing_owner() {
    let cert = Certificate::new("Blah", "", 2020, Utc::now());
    assert!(matches!(cert.validate(), Err(CoreError::Validation { .. })));
}

#[test]
fn test_certificate_validate_rejects_pending_transfer_without_email() {
    let mut cert = Certificate::new("Blah", "ab12", 2020, Utc::now());
    cert.transfer = Transfer::pending("");
    assert!(matches!(cert.validate(), Err(CoreError::Validation { .. })));
}
