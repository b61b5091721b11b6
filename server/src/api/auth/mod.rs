//! Authentication API Module
//!
//! Signup and login for buyer and vendor accounts. All routes here are
//! public; everything else requires a token these endpoints issue.

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// Auth router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/auth", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/signup/user", post(handler::signup_user))
        .route("/login/user", post(handler::login_user))
        .route("/signup/vendor", post(handler::signup_vendor))
        .route("/login/vendor", post(handler::login_vendor))
}
