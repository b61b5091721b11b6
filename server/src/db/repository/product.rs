//! Product Repository

use super::{BaseRepository, RepoError, RepoResult, record_key};
use crate::db::models::{FeatureRequestStatus, Product, ProductCreate, ProductUpdate};
use serde::Deserialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

#[derive(Debug, Deserialize)]
struct CountRow {
    count: i64,
}

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All products, unordered
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self.base.db().select("product").await?;
        Ok(products)
    }

    /// One page of the catalog
    pub async fn find_paginated(&self, page: u64, limit: u64) -> RepoResult<Vec<Product>> {
        let start = (page.saturating_sub(1)) * limit;
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM product LIMIT $limit START $start")
            .bind(("limit", limit))
            .bind(("start", start))
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Total product count
    pub async fn count(&self) -> RepoResult<i64> {
        let rows: Vec<CountRow> = self
            .base
            .db()
            .query("SELECT count() FROM product GROUP ALL")
            .await?
            .take(0)?;
        Ok(rows.first().map(|r| r.count).unwrap_or(0))
    }

    /// Find product by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let product: Option<Product> = self
            .base
            .db()
            .select(RecordId::from_table_key("product", record_key(id)))
            .await?;
        Ok(product)
    }

    /// Products flagged as featured (public storefront)
    pub async fn find_featured(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM product WHERE is_featured = true")
            .await?
            .take(0)?;
        Ok(products)
    }

    /// All products owned by a vendor
    pub async fn find_by_vendor(&self, vendor: RecordId) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM product WHERE vendor = $vendor")
            .bind(("vendor", vendor))
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Case-insensitive search over name, description, and keywords
    pub async fn search(&self, key: &str, page: u64, limit: u64) -> RepoResult<(Vec<Product>, i64)> {
        let needle = key.to_lowercase();
        let start = (page.saturating_sub(1)) * limit;

        let mut response = self
            .base
            .db()
            .query(
                r#"
                SELECT * FROM product WHERE
                    string::lowercase(name) CONTAINS $key
                    OR string::lowercase(description) CONTAINS $key
                    OR string::lowercase(array::join(keywords, ' ')) CONTAINS $key
                LIMIT $limit START $start;
                SELECT count() FROM product WHERE
                    string::lowercase(name) CONTAINS $key
                    OR string::lowercase(description) CONTAINS $key
                    OR string::lowercase(array::join(keywords, ' ')) CONTAINS $key
                GROUP ALL;
                "#,
            )
            .bind(("key", needle))
            .bind(("limit", limit))
            .bind(("start", start))
            .await?;

        let products: Vec<Product> = response.take(0)?;
        let counts: Vec<CountRow> = response.take(1)?;
        let total = counts.first().map(|r| r.count).unwrap_or(0);

        Ok((products, total))
    }

    /// Create a product owned by the given vendor
    ///
    /// New products are never featured; the request status starts at None.
    pub async fn create(&self, vendor: RecordId, data: ProductCreate) -> RepoResult<Product> {
        let product = Product {
            id: None,
            vendor,
            name: data.name,
            description: data.description,
            price: data.price,
            quantity: data.quantity,
            formula: data.formula.unwrap_or_else(|| "NaN".to_string()),
            product_type: data.product_type,
            is_featured: false,
            featured_request: FeatureRequestStatus::None,
            keywords: data.keywords,
            image: data.image,
        };

        let created: Option<Product> = self.base.db().create("product").content(product).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// Partially update a product; absent fields keep their value
    pub async fn update(&self, id: &str, data: ProductUpdate) -> RepoResult<Product> {
        let updated: Option<Product> = self
            .base
            .db()
            .update(RecordId::from_table_key("product", record_key(id)))
            .merge(data)
            .await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    /// Delete a product
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let deleted: Option<Product> = self
            .base
            .db()
            .delete(RecordId::from_table_key("product", record_key(id)))
            .await?;
        Ok(deleted.is_some())
    }

    /// Move a product through the feature-request lifecycle
    ///
    /// `is_featured` changes only when the decision implies it (approval
    /// features the product, rejection un-features it).
    pub async fn set_feature_request(
        &self,
        id: &str,
        status: FeatureRequestStatus,
        is_featured: Option<bool>,
    ) -> RepoResult<Product> {
        let thing = RecordId::from_table_key("product", record_key(id));
        let mut response = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    featured_request = $status,
                    is_featured = IF $has_featured THEN $is_featured ELSE is_featured END
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("status", status))
            .bind(("has_featured", is_featured.is_some()))
            .bind(("is_featured", is_featured))
            .await?;

        response
            .take::<Option<Product>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    /// Products with an undecided feature request
    pub async fn find_feature_requests(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query(
                "SELECT * FROM product WHERE featured_request = 'Pending' OR featured_request = 'Waiting'",
            )
            .await?
            .take(0)?;
        Ok(products)
    }
}
