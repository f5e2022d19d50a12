//! Accounts API routes.

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/accounts/create", post(handlers::create_account))
        .route("/api/v1/accounts/fetch", get(handlers::fetch_account))
        .route("/api/v1/accounts/update", put(handlers::update_account))
        .route("/api/v1/accounts/delete", delete(handlers::delete_account))
        .route("/api/v1/accounts/build-info", get(handlers::build_info))
        .route("/api/v1/accounts/env-info", get(handlers::env_info))
        .route(
            "/api/v1/accounts/contact-info",
            get(handlers::contact_info),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
