//! Vendor Statistics Handlers

use axum::{Json, extract::State};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::VendorStatsInfo;
use crate::db::repository::VendorStatsRepository;
use crate::utils::{AppError, AppResult};
use shared::ErrorCode;

/// GET /vendor-stats - the caller's own aggregates (vendor only)
///
/// 404 until the first order touches this vendor.
pub async fn my_stats(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<VendorStatsInfo>> {
    if !user.is_vendor() {
        return Err(AppError::forbidden("Unauthorized"));
    }

    let repo = VendorStatsRepository::new(state.db.clone());
    let stats = repo
        .find_by_vendor(user.key())
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::StatsNotFound))?;

    Ok(Json(stats.into()))
}
