//! Admin API Module
//!
//! Platform-wide counts and rollups, plus feature-request review.
//! Every route requires the admin role.

mod handler;

use axum::{
    Router, middleware,
    routing::{get, put},
};

use crate::auth::require_admin;
use crate::core::ServerState;

/// Admin router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/admin", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/product-count", get(handler::product_count))
        .route("/user-count", get(handler::user_count))
        .route("/vendor-count", get(handler::vendor_count))
        .route("/stats-summary", get(handler::stats_summary))
        .route("/feature-requests", get(handler::feature_requests))
        .route("/feature-requests/{id}", put(handler::decide_feature_request))
        .layer(middleware::from_fn(require_admin))
}
