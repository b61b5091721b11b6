//! Vendor Statistics API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Vendor stats router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/vendor-stats", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::my_stats))
}
