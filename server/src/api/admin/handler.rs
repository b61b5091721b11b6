//! Admin API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::{FeatureRequestStatus, ProductInfo, StatsSummary};
use crate::db::repository::{
    ProductRepository, UserRepository, VendorRepository, VendorStatsRepository,
};
use crate::utils::{AppError, AppResult};
use shared::ErrorCode;

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: i64,
}

/// GET /admin/product-count
pub async fn product_count(State(state): State<ServerState>) -> AppResult<Json<CountResponse>> {
    let repo = ProductRepository::new(state.db.clone());
    let count = repo.count().await?;
    Ok(Json(CountResponse { count }))
}

/// GET /admin/user-count
pub async fn user_count(State(state): State<ServerState>) -> AppResult<Json<CountResponse>> {
    let repo = UserRepository::new(state.db.clone());
    let count = repo.count().await?;
    Ok(Json(CountResponse { count }))
}

/// GET /admin/vendor-count
pub async fn vendor_count(State(state): State<ServerState>) -> AppResult<Json<CountResponse>> {
    let repo = VendorRepository::new(state.db.clone());
    let count = repo.count().await?;
    Ok(Json(CountResponse { count }))
}

/// GET /admin/stats-summary - rollup across every vendor's aggregates
pub async fn stats_summary(State(state): State<ServerState>) -> AppResult<Json<StatsSummary>> {
    let repo = VendorStatsRepository::new(state.db.clone());
    let summary = repo.summary().await?;
    Ok(Json(summary))
}

/// GET /admin/feature-requests - products awaiting a decision
pub async fn feature_requests(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<ProductInfo>>> {
    let repo = ProductRepository::new(state.db.clone());
    let products = repo.find_feature_requests().await?;
    Ok(Json(products.into_iter().map(ProductInfo::from).collect()))
}

/// Feature-request decision payload
#[derive(Debug, Deserialize)]
pub struct FeatureDecisionRequest {
    /// "Approved", "Rejected", or "Waiting"
    pub status: String,
}

/// PUT /admin/feature-requests/{id} - decide a pending feature request
///
/// Approval features the product; rejection un-features it; waiting
/// defers the decision while keeping the request visible.
pub async fn decide_feature_request(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<FeatureDecisionRequest>,
) -> AppResult<Json<ProductInfo>> {
    let (status, is_featured) = match payload.status.as_str() {
        "Approved" => (FeatureRequestStatus::Approved, Some(true)),
        "Rejected" => (FeatureRequestStatus::Rejected, Some(false)),
        "Waiting" => (FeatureRequestStatus::Waiting, None),
        other => {
            return Err(AppError::validation(format!(
                "Invalid decision: {}",
                other
            )));
        }
    };

    let repo = ProductRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound))?;

    if matches!(
        existing.featured_request,
        FeatureRequestStatus::None | FeatureRequestStatus::Rejected
    ) {
        return Err(AppError::validation("Product has no open feature request"));
    }

    let product = repo.set_feature_request(&id, status, is_featured).await?;

    tracing::info!(product_id = %id, decision = %payload.status, "Feature request decided");
    Ok(Json(product.into()))
}
