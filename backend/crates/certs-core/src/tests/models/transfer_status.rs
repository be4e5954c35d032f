use crate::{CoreError, TransferStatus};

use std::str::FromStr;

#[test]
fn test_transfer_status_as_str() {
    assert_eq!(TransferStatus::None.as_str(), "none");
    assert_eq!(TransferStatus::Pending.as_str(), "pending");
}

#[test]
fn test_transfer_status_from_str() {
    assert_eq!(
        TransferStatus::from_str("none").unwrap(),
        TransferStatus::None
    );
    assert_eq!(
        TransferStatus::from_str("pending").unwrap(),
        TransferStatus::Pending
    );
}

#[test]
fn test_transfer_status_from_str_rejects_unknown() {
    match TransferStatus::from_str("accepted") {
        Err(CoreError::InvalidTransferStatus { value, .. }) => assert_eq!(value, "accepted"),
        other => panic!("Expected InvalidTransferStatus, got {:?}", other),
    }
}

#[test]
fn test_transfer_status_default() {
    assert_eq!(TransferStatus::default(), TransferStatus::None);
}

#[test]
fn test_transfer_status_serde_uses_snake_case() {
    let json = serde_json::to_string(&TransferStatus::Pending).unwrap();
    assert_eq!(json, "\"pending\"");
}
