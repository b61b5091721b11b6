//! Shared types for the PlantHaven marketplace
//!
//! Common types used by the server crate and API consumers: the unified
//! error system, the API response envelope, and the client-facing request
//! and response DTOs.

pub mod client;
pub mod error;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
