//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{OrderInfo, OrderPlace, OrderStatus, UpdateStatusRequest};
use crate::db::repository::{OrderRepository, RepoError};
use crate::utils::{AppError, AppResult, validate_payload};
use shared::ErrorCode;

/// POST /orders/place - place an order (user role only)
///
/// Stock check, stock decrement, order creation, and the vendor
/// aggregate bump happen in one transaction; a failed placement leaves
/// no trace.
pub async fn place(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<OrderPlace>,
) -> AppResult<Json<OrderInfo>> {
    if !user.is_user() {
        return Err(AppError::forbidden("Only users can place orders"));
    }
    validate_payload(&payload)?;

    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .place(
            user.key(),
            &payload.product,
            payload.quantity,
            payload.address,
            payload.city,
            payload.contact_info,
            payload.postal_code,
            payload.payment_method,
        )
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => AppError::new(ErrorCode::ProductNotFound),
            other => other.into(),
        })?;

    tracing::info!(
        buyer_id = %user.id,
        order_id = %order.id.as_ref().map(|t| t.to_string()).unwrap_or_default(),
        total = order.total_amount,
        "Order placed"
    );

    Ok(Json(order.into()))
}

/// GET /orders/user-orders - caller's purchase history (user role only)
pub async fn user_orders(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<OrderInfo>>> {
    if !user.is_user() {
        return Err(AppError::forbidden("Unauthorized"));
    }

    let repo = OrderRepository::new(state.db.clone());
    let orders = repo.find_by_buyer(user.record_id()).await?;
    Ok(Json(orders.into_iter().map(OrderInfo::from).collect()))
}

/// GET /orders/vendor-orders - orders received by the caller (vendor only)
pub async fn vendor_orders(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<OrderInfo>>> {
    if !user.is_vendor() {
        return Err(AppError::forbidden("Unauthorized"));
    }

    let repo = OrderRepository::new(state.db.clone());
    let orders = repo.find_by_vendor(user.record_id()).await?;
    Ok(Json(orders.into_iter().map(OrderInfo::from).collect()))
}

/// PUT /orders/update-status/{order_id} - transition an order's status
///
/// Only the vendor the order belongs to may move it. Aggregate deltas
/// are applied in the same transaction as the status write.
pub async fn update_status(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(order_id): Path<String>,
    Json(payload): Json<UpdateStatusRequest>,
) -> AppResult<Json<OrderInfo>> {
    if !user.is_vendor() {
        return Err(AppError::forbidden(
            "Only vendors can update order status",
        ));
    }

    let status: OrderStatus = payload
        .status
        .parse()
        .map_err(|_| AppError::new(ErrorCode::InvalidOrderStatus))?;

    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .update_status(&order_id, user.record_id(), status)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => AppError::new(ErrorCode::OrderNotFound),
            RepoError::Forbidden(_) => AppError::new(ErrorCode::NotOrderVendor),
            other => other.into(),
        })?;

    tracing::info!(
        vendor_id = %user.id,
        order_id = %order_id,
        status = %status,
        "Order status updated"
    );

    Ok(Json(order.into()))
}
