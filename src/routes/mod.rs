//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The card API lives under `/api`. Every other path falls through to the
//! static asset directory, which serves the board page at `/`.

pub mod cards;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{delete, get};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let assets = ServeDir::new(static_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/api/cards", get(cards::list_cards).post(cards::create_card))
        .route("/api/cards/{id}", delete(cards::delete_card))
        .route("/healthz", get(healthz))
        .fallback_service(assets)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
