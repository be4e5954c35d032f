pub mod certificate_dto;
pub mod certificate_list_response;
pub mod certificate_response;
#[allow(clippy::module_inception)]
pub mod certificates;
pub mod create_certificate_request;
pub mod transfer_dto;
pub mod update_certificate_request;
