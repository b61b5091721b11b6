//! Core server infrastructure
//!
//! - [`Config`] - environment-driven server configuration
//! - [`ServerState`] - shared application state (db handle, jwt service)
//! - [`Server`] - HTTP server startup and shutdown

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::{build_app, build_router, Server};
pub use state::ServerState;
