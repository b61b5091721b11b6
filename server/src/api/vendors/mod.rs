//! Vendor API Module
//!
//! Vendor self-service: profile and own-catalog access.

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

/// Vendor router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/vendor", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/profile-info", get(handler::profile_info))
        .route("/my-products", get(handler::my_products))
        .route("/update", put(handler::update_profile))
}
