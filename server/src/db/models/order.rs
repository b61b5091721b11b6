//! Order Model

use super::product::ProductId;
use super::serde_helpers;
use super::user::UserId;
use super::vendor::VendorId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use surrealdb::RecordId;
use validator::Validate;

/// Order ID type
pub type OrderId = RecordId;

/// Order fulfilment state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "Processing" => Ok(OrderStatus::Processing),
            "Shipped" => Ok(OrderStatus::Shipped),
            "Delivered" => Ok(OrderStatus::Delivered),
            "Cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(format!("invalid status: {}", other)),
        }
    }
}

/// A placed order. Written once at placement; afterwards only `status`
/// changes, and only by the owning vendor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<OrderId>,
    #[serde(with = "serde_helpers::record_id")]
    pub buyer: UserId,
    #[serde(with = "serde_helpers::record_id")]
    pub vendor: VendorId,
    #[serde(with = "serde_helpers::record_id")]
    pub product: ProductId,
    pub quantity: i64,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub address: String,
    pub city: String,
    pub contact_info: String,
    pub postal_code: String,
    pub payment_method: String,
    pub created_at: i64,
}

/// Order response shape with ids rendered as "table:key" strings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderInfo {
    pub id: String,
    pub buyer: String,
    pub vendor: String,
    pub product: String,
    pub quantity: i64,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub address: String,
    pub city: String,
    pub contact_info: String,
    pub postal_code: String,
    pub payment_method: String,
    pub created_at: i64,
}

impl From<Order> for OrderInfo {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.map(|id| id.to_string()).unwrap_or_default(),
            buyer: order.buyer.to_string(),
            vendor: order.vendor.to_string(),
            product: order.product.to_string(),
            quantity: order.quantity,
            total_amount: order.total_amount,
            status: order.status,
            address: order.address,
            city: order.city,
            contact_info: order.contact_info,
            postal_code: order.postal_code,
            payment_method: order.payment_method,
            created_at: order.created_at,
        }
    }
}

/// Place-order payload
///
/// The vendor and total amount are derived server-side from the product;
/// neither is accepted from the client.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OrderPlace {
    /// Product record key or "product:key"
    #[validate(length(min = 1))]
    pub product: String,
    #[validate(range(min = 1))]
    pub quantity: i64,
    #[validate(length(min = 1))]
    pub address: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub contact_info: String,
    #[validate(length(min = 1))]
    pub postal_code: String,
    #[validate(length(min = 1))]
    pub payment_method: String,
}

/// Update-status payload; status arrives as a plain string so an unknown
/// value can be rejected with a clear error
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}
