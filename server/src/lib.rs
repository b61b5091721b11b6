//! PlantHaven Marketplace Server
//!
//! REST backend for the PlantHaven plant marketplace: user and vendor
//! authentication, product catalog, orders, per-vendor statistics
//! aggregates, and admin rollups.
//!
//! # Module Structure
//!
//! ```text
//! server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # JWT authentication, roles
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # embedded SurrealDB storage
//! └── utils/         # logging, errors, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService, Role};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - structured tracing events for auth failures
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
