use crate::{CoreError, Transfer, TransferStatus};

#[test]
fn test_transfer_pending() {
    let transfer = Transfer::pending("bob@table.com");

    assert_eq!(transfer.email, "bob@table.com");
    assert_eq!(transfer.status, TransferStatus::Pending);
    assert!(transfer.is_pending());
}

#[test]
fn test_transfer_none_is_cleared() {
    let transfer = Transfer::none();

    assert!(transfer.email.is_empty());
    assert_eq!(transfer.status, TransferStatus::None);
    assert!(!transfer.is_pending());
    assert_eq!(transfer, Transfer::default());
}

#[test]
fn test_transfer_validate_accepts_cleared_transfer() {
    assert!(Transfer::none().validate().is_ok());
}

#[test]
fn test_transfer_validate_accepts_pending_with_address() {
    assert!(Transfer::pending("bob@table.com").validate().is_ok());
}

#[test]
fn test_transfer_validate_rejects_pending_without_address() {
    for email in ["", "   ", "bob"] {
        let result = Transfer::pending(email).validate();
        assert!(
            matches!(result, Err(CoreError::Validation { .. })),
            "pending transfer to {email:?} should be rejected"
        );
    }
}
