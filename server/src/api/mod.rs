//! HTTP API modules
//!
//! One module per resource; each exposes a `router()` merged into the
//! application in `core::server::build_app`.

pub mod admin;
pub mod auth;
pub mod health;
pub mod orders;
pub mod products;
pub mod users;
pub mod vendor_stats;
pub mod vendors;
