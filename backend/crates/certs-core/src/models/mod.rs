pub mod certificate;
pub mod transfer;
pub mod transfer_status;
pub mod user;
