//! Order API Module
//!
//! Order placement for buyers, order listings per role, and status
//! transitions by the owning vendor.

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/place", post(handler::place))
        .route("/user-orders", get(handler::user_orders))
        .route("/vendor-orders", get(handler::vendor_orders))
        .route("/update-status/{order_id}", put(handler::update_status))
}
