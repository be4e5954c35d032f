pub mod error;
pub mod identifier;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use identifier::{ID_LENGTH, derive_id};
pub use models::certificate::Certificate;
pub use models::transfer::Transfer;
pub use models::transfer_status::TransferStatus;
pub use models::user::User;
