//! Vendor Repository

use super::{BaseRepository, RepoError, RepoResult, record_key};
use crate::db::models::{Vendor, VendorUpdate};
use serde::Deserialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

#[derive(Debug, Deserialize)]
struct CountRow {
    count: i64,
}

#[derive(Clone)]
pub struct VendorRepository {
    base: BaseRepository,
}

impl VendorRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find vendor by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Vendor>> {
        let vendor: Option<Vendor> = self
            .base
            .db()
            .select(RecordId::from_table_key("vendor", record_key(id)))
            .await?;
        Ok(vendor)
    }

    /// Find vendor by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Vendor>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM vendor WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let vendors: Vec<Vendor> = result.take(0)?;
        Ok(vendors.into_iter().next())
    }

    /// Create a new vendor
    pub async fn create(&self, vendor: Vendor) -> RepoResult<Vendor> {
        if self.find_by_email(&vendor.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Email '{}' already exists",
                vendor.email
            )));
        }

        let created: Option<Vendor> = self.base.db().create("vendor").content(vendor).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create vendor".to_string()))
    }

    /// Partially update a vendor profile
    pub async fn update(&self, id: &str, data: VendorUpdate) -> RepoResult<Vendor> {
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

        let updated: Option<Vendor> = self
            .base
            .db()
            .update(RecordId::from_table_key("vendor", record_key(id)))
            .merge(data)
            .await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Vendor {} not found", id)))
    }

    /// Total vendor count
    pub async fn count(&self) -> RepoResult<i64> {
        let rows: Vec<CountRow> = self
            .base
            .db()
            .query("SELECT count() FROM vendor GROUP ALL")
            .await?
            .take(0)?;
        Ok(rows.first().map(|r| r.count).unwrap_or(0))
    }
}
