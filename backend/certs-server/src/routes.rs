use crate::{
    AppState, accept_transfer, access_log::access_log, cors::cors_layer, create_certificate,
    create_transfer, create_user, delete_certificate, get_certificate, health,
    list_user_certificates, list_users, update_certificate,
};

use certs_config::CorsConfig;

use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        // Users
        .route("/users/", get(list_users).post(create_user))
        .route("/users/{id}/certificates/", get(list_user_certificates))
        // Certificates
        .route("/certificates/", post(create_certificate))
        .route(
            "/certificates/{id}/",
            get(get_certificate)
                .put(update_certificate)
                .delete(delete_certificate),
        )
        // Transfers
        .route(
            "/certificates/{id}/transfers/",
            post(create_transfer).put(accept_transfer),
        )
        .with_state(state)
        .layer(middleware::from_fn(access_log))
        .layer(cors_layer(cors))
}
