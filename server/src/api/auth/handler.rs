//! Authentication Handlers
//!
//! Signup and login for buyers and vendors. Both account types share the
//! same response shape; the token carries the role.

use std::time::Duration;

use axum::{Json, extract::State};

use crate::auth::Role;
use crate::core::ServerState;
use crate::db::models::{AccountStatus, User, Vendor};
use crate::db::repository::{RepoError, UserRepository, VendorRepository};
use crate::security_log;
use crate::utils::{AppError, AppResult, validate_payload};

use shared::client::{
    AccountInfo, LoginRequest, LoginResponse, UserSignupRequest, VendorSignupRequest,
};
use shared::ErrorCode;

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /auth/signup/user - create a buyer account and log it in
pub async fn signup_user(
    State(state): State<ServerState>,
    Json(req): Json<UserSignupRequest>,
) -> AppResult<Json<LoginResponse>> {
    validate_payload(&req)?;

    let repo = UserRepository::new(state.db.clone());

    let hash_pass = User::hash_password(&req.password)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))?;

    let user = User {
        id: None,
        name: req.name,
        email: req.email,
        hash_pass,
        role: Role::User,
        profile_pic: None,
    };

    let created = repo.create(user).await.map_err(|e| match e {
        RepoError::Duplicate(_) => AppError::new(ErrorCode::EmailExists),
        other => other.into(),
    })?;

    let id = created.id.as_ref().map(|t| t.to_string()).unwrap_or_default();
    tracing::info!(user_id = %id, "User account created");

    issue_token(&state, &id, &created.name, &created.email, Role::User)
}

/// POST /auth/login/user - buyer login
pub async fn login_user(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    validate_payload(&req)?;

    let repo = UserRepository::new(state.db.clone());
    let user = repo.find_by_email(&req.email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent account enumeration
    let user = match user {
        Some(u) => {
            let password_valid = u
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

            if !password_valid {
                security_log!("WARN", "login_failed", email = req.email.clone());
                return Err(AppError::invalid_credentials());
            }

            u
        }
        None => {
            security_log!("WARN", "login_failed", email = req.email.clone());
            return Err(AppError::invalid_credentials());
        }
    };

    let id = user.id.as_ref().map(|t| t.to_string()).unwrap_or_default();
    tracing::info!(user_id = %id, role = %user.role, "User logged in");

    issue_token(&state, &id, &user.name, &user.email, user.role)
}

/// POST /auth/signup/vendor - create a vendor account and log it in
pub async fn signup_vendor(
    State(state): State<ServerState>,
    Json(req): Json<VendorSignupRequest>,
) -> AppResult<Json<LoginResponse>> {
    validate_payload(&req)?;

    let repo = VendorRepository::new(state.db.clone());

    let hash_pass = Vendor::hash_password(&req.password)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))?;

    let vendor = Vendor {
        id: None,
        company_name: req.company_name,
        company_address: req.company_address,
        email: req.email,
        hash_pass,
        contact: req.contact,
        role: Role::Vendor,
        account_status: AccountStatus::Active,
    };

    let created = repo.create(vendor).await.map_err(|e| match e {
        RepoError::Duplicate(_) => AppError::new(ErrorCode::EmailExists),
        other => other.into(),
    })?;

    let id = created.id.as_ref().map(|t| t.to_string()).unwrap_or_default();
    tracing::info!(vendor_id = %id, "Vendor account created");

    issue_token(&state, &id, &created.company_name, &created.email, Role::Vendor)
}

/// POST /auth/login/vendor - vendor login
///
/// Suspended vendors can no longer log in.
pub async fn login_vendor(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    validate_payload(&req)?;

    let repo = VendorRepository::new(state.db.clone());
    let vendor = repo.find_by_email(&req.email).await?;

    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let vendor = match vendor {
        Some(v) => {
            let password_valid = v
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

            if !password_valid {
                security_log!("WARN", "login_failed", email = req.email.clone());
                return Err(AppError::invalid_credentials());
            }

            if !v.is_active() {
                security_log!("WARN", "login_suspended", email = req.email.clone());
                return Err(AppError::new(ErrorCode::AccountSuspended));
            }

            v
        }
        None => {
            security_log!("WARN", "login_failed", email = req.email.clone());
            return Err(AppError::invalid_credentials());
        }
    };

    let id = vendor.id.as_ref().map(|t| t.to_string()).unwrap_or_default();
    tracing::info!(vendor_id = %id, "Vendor logged in");

    issue_token(&state, &id, &vendor.company_name, &vendor.email, Role::Vendor)
}

fn issue_token(
    state: &ServerState,
    id: &str,
    name: &str,
    email: &str,
    role: Role,
) -> AppResult<Json<LoginResponse>> {
    let token = state
        .get_jwt_service()
        .generate_token(id, name, email, role)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    Ok(Json(LoginResponse {
        token,
        account: AccountInfo {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
        },
    }))
}
