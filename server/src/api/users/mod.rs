//! User API Module

mod handler;

use axum::{Router, routing::put};

use crate::core::ServerState;

/// User router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/user", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/edit-info", put(handler::edit_info))
}
