//! Utility module - shared helpers and types
//!
//! - [`AppError`] / [`ApiResponse`] - unified error types (from shared::error)
//! - logging and request validation helpers

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::{ApiResponse, AppError, ErrorCategory, ErrorCode};
pub use result::AppResult;
pub use validation::validate_payload;
