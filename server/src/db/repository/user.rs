//! User Repository

use super::{BaseRepository, RepoError, RepoResult, record_key};
use crate::db::models::{User, UserUpdate};
use serde::Deserialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

#[derive(Debug, Deserialize)]
struct CountRow {
    count: i64,
}

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find user by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        let user: Option<User> = self
            .base
            .db()
            .select(RecordId::from_table_key("user", record_key(id)))
            .await?;
        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Create a new user
    pub async fn create(&self, user: User) -> RepoResult<User> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Email '{}' already exists",
                user.email
            )));
        }

        let created: Option<User> = self.base.db().create("user").content(user).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }

    /// Partially update a user profile
    pub async fn update(&self, id: &str, data: UserUpdate) -> RepoResult<User> {
        if let Some(ref new_email) = data.email {
            if let Some(existing) = self.find_by_email(new_email).await? {
                let same = existing
                    .id
                    .as_ref()
                    .map(|eid| eid.key().to_string() == record_key(id))
                    .unwrap_or(false);
                if !same {
                    return Err(RepoError::Duplicate(format!(
                        "Email '{}' already exists",
                        new_email
                    )));
                }
            }
        }

        let updated: Option<User> = self
            .base
            .db()
            .update(RecordId::from_table_key("user", record_key(id)))
            .merge(data)
            .await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("User {} not found", id)))
    }

    /// Total user count
    pub async fn count(&self) -> RepoResult<i64> {
        let rows: Vec<CountRow> = self
            .base
            .db()
            .query("SELECT count() FROM user GROUP ALL")
            .await?
            .take(0)?;
        Ok(rows.first().map(|r| r.count).unwrap_or(0))
    }
}
