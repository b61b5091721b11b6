//! Vendor API Handlers

use axum::{Json, extract::State};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{ProductInfo, VendorInfo, VendorUpdate};
use crate::db::repository::{ProductRepository, VendorRepository};
use crate::utils::{AppError, AppResult};
use shared::ErrorCode;

/// GET /vendor/profile-info - caller's own vendor profile
pub async fn profile_info(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<VendorInfo>> {
    if !user.is_vendor() {
        return Err(AppError::forbidden(
            "Only vendors can access vendor information",
        ));
    }

    let repo = VendorRepository::new(state.db.clone());
    let vendor = repo
        .find_by_id(&user.id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::VendorNotFound))?;

    Ok(Json(vendor.into()))
}

/// GET /vendor/my-products - the caller's catalog
pub async fn my_products(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<ProductInfo>>> {
    if !user.is_vendor() {
        return Err(AppError::forbidden("Only vendors can access this route"));
    }

    let repo = ProductRepository::new(state.db.clone());
    let products = repo.find_by_vendor(user.record_id()).await?;
    Ok(Json(products.into_iter().map(ProductInfo::from).collect()))
}

/// PUT /vendor/update - update the caller's vendor profile
///
/// Only company name, address, email, and contact may change.
pub async fn update_profile(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<VendorUpdate>,
) -> AppResult<Json<VendorInfo>> {
    if !user.is_vendor() {
        return Err(AppError::forbidden("Only vendors can update profile"));
    }

    let repo = VendorRepository::new(state.db.clone());
    let vendor = repo.update(&user.id, payload).await?;

    tracing::info!(vendor_id = %user.id, "Vendor profile updated");
    Ok(Json(vendor.into()))
}
