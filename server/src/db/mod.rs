//! Database layer
//!
//! Embedded SurrealDB storage for the marketplace: connection setup,
//! schema indexes, data models, and per-table repositories.

pub mod models;
pub mod repository;
pub mod seed;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::AppError;

const NAMESPACE: &str = "planthaven";
const DATABASE: &str = "marketplace";

/// Embedded database service
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk database
    pub async fn new(path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {}", e)))?;

        Self::setup(db).await
    }

    /// Open an in-memory database (tests)
    pub async fn new_in_memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {}", e)))?;

        Self::setup(db).await
    }

    async fn setup(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {}", e)))?;

        define_indexes(&db).await?;

        tracing::info!("Database ready ({}/{})", NAMESPACE, DATABASE);
        Ok(Self { db })
    }
}

/// Define unique indexes; account emails must be unique per table
async fn define_indexes(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query(
        r#"
        DEFINE INDEX IF NOT EXISTS user_email ON TABLE user FIELDS email UNIQUE;
        DEFINE INDEX IF NOT EXISTS vendor_email ON TABLE vendor FIELDS email UNIQUE;
        "#,
    )
    .await
    .map_err(|e| AppError::database(format!("Failed to define indexes: {}", e)))?;

    Ok(())
}
