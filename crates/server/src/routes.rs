use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::{catalog::CatalogService, users::UserDirectory};

pub mod auth;
pub mod products;
pub mod upload;

/// Shared handler state: the two services plus where uploads land.
#[derive(Clone)]
pub struct ServerState {
    pub users: Arc<UserDirectory>,
    pub catalog: Arc<CatalogService>,
    pub images_dir: PathBuf,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: API routes, static image serving,
/// CORS, and request tracing.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let images = ServeDir::new(state.images_dir.clone());

    Router::new()
        .route("/health", get(health))
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/products", get(products::list_products).post(products::create_product))
        .route("/api/upload-image", post(upload::upload_image))
        .nest_service("/images", images)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
