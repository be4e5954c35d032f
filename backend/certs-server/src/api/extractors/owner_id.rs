//! Axum extractor for the acting certificate owner

use crate::{ApiError, AppState};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Header carrying the caller's user id
pub const OWNER_ID_HEADER: &str = "X-Owner-ID";

/// Id of the authenticated caller.
///
/// The `X-Owner-ID` header must name a user registered in the directory;
/// anything else is rejected with 403. There is no credential check beyond
/// that lookup.
pub struct OwnerId(pub String);

impl FromRequestParts<AppState> for OwnerId {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let owner_id = parts
                .headers
                .get(OWNER_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ApiError::forbidden(format!("Missing {} header", OWNER_ID_HEADER)))?;

            log::debug!("Verifying {} user {}", OWNER_ID_HEADER, owner_id);

            match state.users.get_user_by_id(owner_id).await {
                Ok(user) => Ok(OwnerId(user.id)),
                Err(_) => Err(ApiError::forbidden(format!("Unknown owner {}", owner_id))),
            }
        }
    }
}
