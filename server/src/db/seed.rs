//! Startup seeding
//!
//! Creates the admin account from `ADMIN_EMAIL` / `ADMIN_PASSWORD` when it
//! does not exist yet. Admins live in the `user` table with role `admin`.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::AppError;
use crate::auth::Role;
use crate::db::models::User;
use crate::db::repository::UserRepository;

/// Ensure the configured admin account exists
pub async fn ensure_admin(db: &Surreal<Db>, email: &str, password: &str) -> Result<(), AppError> {
    let repo = UserRepository::new(db.clone());

    if repo.find_by_email(email).await?.is_some() {
        return Ok(());
    }

    let hash_pass = User::hash_password(password)
        .map_err(|e| AppError::internal(format!("Failed to hash admin password: {}", e)))?;

    let admin = User {
        id: None,
        name: "Administrator".to_string(),
        email: email.to_string(),
        hash_pass,
        role: Role::Admin,
        profile_pic: None,
    };

    repo.create(admin).await?;
    tracing::info!("Seeded admin account: {}", email);

    Ok(())
}
