pub mod create_transfer_request;
#[allow(clippy::module_inception)]
pub mod transfers;
