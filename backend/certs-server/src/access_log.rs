use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Log every request as `METHOD URI`, then its status once handled
pub async fn access_log(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    log::info!("{} {}", method, uri);

    let started = Instant::now();
    let response = next.run(request).await;

    log::debug!(
        "{} {} -> {} in {}",
        method,
        uri,
        response.status(),
        humantime::format_duration(started.elapsed())
    );

    response
}
