pub mod api;
pub mod config;
pub mod error;
pub mod frontend;
pub mod models;
pub mod services;

use crate::api::AppState;
use crate::config::Config;
use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// API routes under `/api`, with the embedded frontend as the catch-all.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api::api_routes().with_state(state))
        // Frontend SPA - catch-all route (must be last)
        .fallback(frontend::serve_frontend)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// The full application: [`router`] plus the CORS policy from `config`.
pub fn app(state: Arc<AppState>, config: &Config) -> Router {
    router(state).layer(cors_layer(config))
}

fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
