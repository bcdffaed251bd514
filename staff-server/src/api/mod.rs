//! API routes
//!
//! - [`health`] - liveness and database checks
//! - [`employees`] - employee CRUD under `/api/employees`

pub mod employees;
pub mod health;

use std::path::Path;

use axum::{Router, extract::DefaultBodyLimit, middleware};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::core::ServerState;

/// Largest accepted JSON body
const MAX_BODY_BYTES: usize = 100 * 1024;

async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the full application router with middleware
///
/// With a static directory configured, unknown paths are served from it and
/// fall back to its `index.html`.
pub fn build_app(state: ServerState) -> Router {
    let static_dir = state.config.static_dir.clone();

    let mut app = Router::<ServerState>::new()
        .merge(health::router())
        .merge(employees::router())
        .with_state(state);

    if let Some(dir) = static_dir {
        let index = Path::new(&dir).join("index.html");
        tracing::info!(dir = %dir, "Serving static front-end");
        app = app.fallback_service(ServeDir::new(&dir).fallback(ServeFile::new(index)));
    }

    app.layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(log_request))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
        )
}
