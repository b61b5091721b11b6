//! Unified error handling
//!
//! The server uses the structured error system from `shared::error`:
//! [`AppError`] carries an [`ErrorCode`], a human-readable message, and
//! optional details, and converts into an HTTP response with the right
//! status code via its `IntoResponse` implementation.

pub use shared::error::{ApiResponse, AppError, ErrorCategory, ErrorCode};
