//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{FeatureRequestStatus, ProductCreate, ProductInfo, ProductUpdate};
use crate::db::repository::ProductRepository;
use crate::utils::{AppError, AppResult, validate_payload};
use shared::ErrorCode;

/// Pagination query, defaulting to the first page of ten
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    10
}

#[derive(Debug, Serialize)]
pub struct Pagination {
    pub total: i64,
    pub page: u64,
    pub pages: u64,
}

#[derive(Debug, Serialize)]
pub struct ProductPage {
    pub products: Vec<ProductInfo>,
    pub pagination: Pagination,
}

fn page_count(total: i64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    (total as u64).div_ceil(limit)
}

/// GET /product - one page of the catalog
pub async fn list_paginated(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<ProductPage>> {
    let repo = ProductRepository::new(state.db.clone());

    let page = query.page.max(1);
    let limit = query.limit.max(1);

    let products = repo.find_paginated(page, limit).await?;
    let total = repo.count().await?;

    Ok(Json(ProductPage {
        products: products.into_iter().map(ProductInfo::from).collect(),
        pagination: Pagination {
            total,
            page,
            pages: page_count(total, limit),
        },
    }))
}

/// GET /product/all - the whole catalog
pub async fn list_all(
    State(state): State<ServerState>,
    _user: CurrentUser,
) -> AppResult<Json<Vec<ProductInfo>>> {
    let repo = ProductRepository::new(state.db.clone());
    let products = repo.find_all().await?;
    Ok(Json(products.into_iter().map(ProductInfo::from).collect()))
}

/// GET /product/{id} - single product
pub async fn get_by_id(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<ProductInfo>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound))?;
    Ok(Json(product.into()))
}

/// GET /product/featured/featured-products - public storefront listing
pub async fn list_featured(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<ProductInfo>>> {
    let repo = ProductRepository::new(state.db.clone());
    let products = repo.find_featured().await?;
    Ok(Json(products.into_iter().map(ProductInfo::from).collect()))
}

/// GET /product/search/{key} - case-insensitive keyword search
pub async fn search(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Path(key): Path<String>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<ProductPage>> {
    let repo = ProductRepository::new(state.db.clone());

    let page = query.page.max(1);
    let limit = query.limit.max(1);

    let (products, total) = repo.search(&key, page, limit).await?;

    Ok(Json(ProductPage {
        products: products.into_iter().map(ProductInfo::from).collect(),
        pagination: Pagination {
            total,
            page,
            pages: page_count(total, limit),
        },
    }))
}

/// POST /product/add - create a product (vendor only)
///
/// The owning vendor is the caller; a vendor id in the body is ignored.
pub async fn add(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<ProductInfo>> {
    if !user.is_vendor() {
        return Err(AppError::forbidden("Only vendors can add products"));
    }
    validate_payload(&payload)?;

    let repo = ProductRepository::new(state.db.clone());
    let product = repo.create(user.record_id(), payload).await?;

    tracing::info!(vendor_id = %user.id, "Product added");
    Ok(Json(product.into()))
}

/// PUT /product/{id} - update a product (owning vendor only)
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<ProductInfo>> {
    if !user.is_vendor() {
        return Err(AppError::forbidden("Only vendors can update products"));
    }
    validate_payload(&payload)?;

    let repo = ProductRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound))?;

    if existing.vendor != user.record_id() {
        return Err(AppError::new(ErrorCode::NotProductVendor));
    }

    let product = repo.update(&id, payload).await?;
    Ok(Json(product.into()))
}

/// DELETE /product/{id} - remove a product (owning vendor only)
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if !user.is_vendor() {
        return Err(AppError::forbidden("Only vendors can delete products"));
    }

    let repo = ProductRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound))?;

    if existing.vendor != user.record_id() {
        return Err(AppError::new(ErrorCode::NotProductVendor));
    }

    let deleted = repo.delete(&id).await?;
    tracing::info!(vendor_id = %user.id, product_id = %id, "Product deleted");
    Ok(Json(deleted))
}

/// POST /product/request-feature/{id} - ask for the product to be featured
///
/// Rejected requests may be re-submitted; pending and approved ones may not.
pub async fn request_feature(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<ProductInfo>> {
    let repo = ProductRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound))?;

    if existing.vendor != user.record_id() {
        return Err(AppError::new(ErrorCode::NotProductVendor));
    }

    match existing.featured_request {
        FeatureRequestStatus::Pending | FeatureRequestStatus::Waiting => {
            return Err(AppError::new(ErrorCode::FeatureRequestPending));
        }
        FeatureRequestStatus::Approved => {
            return Err(AppError::new(ErrorCode::ProductAlreadyFeatured));
        }
        FeatureRequestStatus::None | FeatureRequestStatus::Rejected => {}
    }

    let product = repo
        .set_feature_request(&id, FeatureRequestStatus::Pending, None)
        .await?;

    tracing::info!(vendor_id = %user.id, product_id = %id, "Feature request submitted");
    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 0), 0);
    }
}
