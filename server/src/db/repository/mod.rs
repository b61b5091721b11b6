//! Repository Module
//!
//! CRUD and transactional operations over the SurrealDB tables.

// Accounts
pub mod user;
pub mod vendor;

// Catalog
pub mod product;

// Orders
pub mod order;
pub mod vendor_stats;

// Re-exports
pub use order::OrderRepository;
pub use product::ProductRepository;
pub use user::UserRepository;
pub use vendor::VendorRepository;
pub use vendor_stats::VendorStatsRepository;

use shared::{AppError, ErrorCode};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Insufficient stock available")]
    InsufficientStock,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Forbidden(msg) => {
                AppError::with_message(ErrorCode::PermissionDenied, msg)
            }
            RepoError::InsufficientStock => AppError::new(ErrorCode::InsufficientStock),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: "table:key" everywhere
// =============================================================================
//
// surrealdb::RecordId handles all IDs:
//   - parse: let id: RecordId = "product:abc".parse()?;
//   - build: let id = RecordId::from_table_key("product", "abc");
//   - table: id.table()
//   - bare key: id.key().to_string()
//   - CRUD: db.select(id) / db.delete(id) take RecordId directly

/// Strip an optional "table:" prefix, returning the bare record key
pub(crate) fn record_key(id: &str) -> &str {
    match id.split_once(':') {
        Some((_, key)) => key,
        None => id,
    }
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_key() {
        assert_eq!(record_key("product:abc"), "abc");
        assert_eq!(record_key("abc"), "abc");
    }

    #[test]
    fn test_repo_error_maps_to_app_error() {
        let err: AppError = RepoError::InsufficientStock.into();
        assert_eq!(err.code, ErrorCode::InsufficientStock);

        let err: AppError = RepoError::NotFound("order".into()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
