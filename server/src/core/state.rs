use std::sync::Arc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::AppError;
use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;

/// Shared application state
///
/// Holds the handles every request handler needs. Cloning is cheap:
/// the database connection and the JWT service are both shared
/// references internally.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | Server configuration (immutable) |
/// | db | Surreal<Db> | Embedded database |
/// | jwt_service | Arc<JwtService> | Token generation and validation |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT authentication service
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Initialize the full application state from configuration
    ///
    /// Opens the on-disk database, defines schema indexes, and seeds the
    /// admin account when `ADMIN_EMAIL` / `ADMIN_PASSWORD` are configured.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_service = DbService::new(&config.database_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {}", e)))?;

        let state = Self::with_db(config.clone(), db_service.db);

        if let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) {
            crate::db::seed::ensure_admin(&state.db, email, password).await?;
        }

        Ok(state)
    }

    /// Build state around an already-open database connection
    ///
    /// Used by tests with an in-memory database
    pub fn with_db(config: Config, db: Surreal<Db>) -> Self {
        let jwt_service = JwtService::with_config(config.jwt.clone());

        Self {
            config,
            db,
            jwt_service: Arc::new(jwt_service),
        }
    }

    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
