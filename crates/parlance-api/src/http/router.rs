//! Axum router configuration with middleware.
//!
//! All transcript routes are under `/api/`. Middleware: CORS, tracing.

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(liveness))
        .route(
            "/api/messages",
            get(handlers::messages::list_messages)
                .post(handlers::messages::post_message)
                .delete(handlers::messages::reset_messages),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / - Plain-text liveness check.
async fn liveness() -> &'static str {
    "Parlance chat relay is running!"
}
