//! Unified error codes for the PlantHaven backend
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Order errors
//! - 5xxx: Vendor statistics errors
//! - 6xxx: Product errors
//! - 8xxx: Account errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Account is suspended
    AccountSuspended = 1005,
    /// Email is already registered
    EmailExists = 1006,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,
    /// Admin role required
    AdminRequired = 2003,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Insufficient stock for the requested quantity
    InsufficientStock = 4002,
    /// Invalid order status value
    InvalidOrderStatus = 4003,
    /// Caller is not the vendor of this order
    NotOrderVendor = 4004,

    // ==================== 5xxx: Vendor Statistics ====================
    /// No statistics document exists for this vendor yet
    StatsNotFound = 5001,

    // ==================== 6xxx: Product ====================
    /// Product not found
    ProductNotFound = 6001,
    /// A feature request is already pending for this product
    FeatureRequestPending = 6002,
    /// Product is already featured
    ProductAlreadyFeatured = 6003,
    /// Caller is not the vendor of this product
    NotProductVendor = 6004,

    // ==================== 8xxx: Account ====================
    /// User not found
    UserNotFound = 8001,
    /// Vendor not found
    VendorNotFound = 8002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "OK",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",

            Self::NotAuthenticated => "Authentication required",
            Self::InvalidCredentials => "Invalid email or password",
            Self::TokenExpired => "Token expired",
            Self::TokenInvalid => "Invalid token",
            Self::AccountSuspended => "Account has been suspended",
            Self::EmailExists => "Email already exists",

            Self::PermissionDenied => "Permission denied",
            Self::RoleRequired => "Required role missing",
            Self::AdminRequired => "Admin role required",

            Self::OrderNotFound => "Order not found",
            Self::InsufficientStock => "Insufficient stock available",
            Self::InvalidOrderStatus => "Invalid order status",
            Self::NotOrderVendor => "Unauthorized to update this order",

            Self::StatsNotFound => "Statistics not found",

            Self::ProductNotFound => "Product not found",
            Self::FeatureRequestPending => "Feature request already pending",
            Self::ProductAlreadyFeatured => "Product is already featured",
            Self::NotProductVendor => "Unauthorized to modify this product",

            Self::UserNotFound => "User not found",
            Self::VendorNotFound => "Vendor not found",

            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,

            1001 => Self::NotAuthenticated,
            1002 => Self::InvalidCredentials,
            1003 => Self::TokenExpired,
            1004 => Self::TokenInvalid,
            1005 => Self::AccountSuspended,
            1006 => Self::EmailExists,

            2001 => Self::PermissionDenied,
            2002 => Self::RoleRequired,
            2003 => Self::AdminRequired,

            4001 => Self::OrderNotFound,
            4002 => Self::InsufficientStock,
            4003 => Self::InvalidOrderStatus,
            4004 => Self::NotOrderVendor,

            5001 => Self::StatsNotFound,

            6001 => Self::ProductNotFound,
            6002 => Self::FeatureRequestPending,
            6003 => Self::ProductAlreadyFeatured,
            6004 => Self::NotProductVendor,

            8001 => Self::UserNotFound,
            8002 => Self::VendorNotFound,

            9001 => Self::InternalError,
            9002 => Self::DatabaseError,
            9003 => Self::ConfigError,

            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::InvalidCredentials,
            ErrorCode::InsufficientStock,
            ErrorCode::ProductNotFound,
            ErrorCode::DatabaseError,
        ];
        for code in codes {
            let value: u16 = code.into();
            assert_eq!(ErrorCode::try_from(value).unwrap(), code);
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert!(ErrorCode::try_from(7777).is_err());
    }
}
