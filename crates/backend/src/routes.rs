use axum::{routing::get, Router};

use crate::handlers;

/// Route table for the whole service.
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/getapplications", get(handlers::applications::list))
        .route(
            "/getapplications/csv",
            get(handlers::applications::export_csv),
        )
}
