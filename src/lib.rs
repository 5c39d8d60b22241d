pub mod clock;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
pub mod view;

pub const STATIC_HASH: &str = env!("STATIC_HASH");

use axum::http::{header, HeaderValue};
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::error::AppError;
use crate::store::EntryStore;

#[derive(Clone)]
pub struct AppState {
    pub store: EntryStore,
}

async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> AppError {
    AppError::NotFound
}

/// Build the full Axum application router.
///
/// Caller is responsible for opening the store (and running migrations on its
/// pool) beforehand, and for closing it once the server has stopped.
pub fn build_app(store: EntryStore) -> Router {
    let state = AppState { store };

    Router::new()
        .route("/health", get(health))
        .merge(routes::entries::router())
        .merge(routes::export::router())
        .nest_service(
            "/static",
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::overriding(
                    header::CACHE_CONTROL,
                    HeaderValue::from_static("public, max-age=86400"),
                ))
                .service(ServeDir::new("static")),
        )
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
