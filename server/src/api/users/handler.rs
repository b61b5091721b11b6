//! User API Handlers

use axum::{Json, extract::State};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{UserInfo, UserUpdate};
use crate::db::repository::{RepoError, UserRepository};
use crate::utils::{AppError, AppResult};
use shared::ErrorCode;

/// PUT /user/edit-info - update the caller's profile (user role only)
///
/// Only name, email, and profile picture may change.
pub async fn edit_info(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<UserUpdate>,
) -> AppResult<Json<UserInfo>> {
    if !user.is_user() {
        return Err(AppError::forbidden("Only users can update their profile"));
    }

    let repo = UserRepository::new(state.db.clone());
    let updated = repo.update(&user.id, payload).await.map_err(|e| match e {
        RepoError::NotFound(_) => AppError::new(ErrorCode::UserNotFound),
        other => other.into(),
    })?;

    tracing::info!(user_id = %user.id, "User profile updated");
    Ok(Json(updated.into()))
}
