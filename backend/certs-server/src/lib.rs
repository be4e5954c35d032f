pub mod access_log;
pub mod api;
pub mod cors;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    certificates::{
        certificate_dto::CertificateDto,
        certificate_list_response::CertificateListResponse,
        certificate_response::CertificateResponse,
        certificates::{
            create_certificate, delete_certificate, get_certificate, update_certificate,
        },
        create_certificate_request::CreateCertificateRequest,
        transfer_dto::TransferDto,
        update_certificate_request::UpdateCertificateRequest,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::owner_id::{OWNER_ID_HEADER, OwnerId},
    transfers::{
        create_transfer_request::CreateTransferRequest,
        transfers::{accept_transfer, create_transfer},
    },
    users::{
        create_user_request::CreateUserRequest,
        user_dto::UserDto,
        user_list_response::UserListResponse,
        user_response::UserResponse,
        users::{create_user, list_user_certificates, list_users},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
