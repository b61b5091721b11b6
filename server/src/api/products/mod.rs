//! Product API Module
//!
//! Catalog browsing for all roles, catalog management for the owning
//! vendor, and the vendor side of the feature-request flow.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Product router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/product", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list_paginated))
        .route("/all", get(handler::list_all))
        // Public: served without a token
        .route("/featured/featured-products", get(handler::list_featured))
        .route("/search/{key}", get(handler::search))
        .route("/add", post(handler::add))
        .route("/request-feature/{id}", post(handler::request_feature))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
