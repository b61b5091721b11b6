//! Vendor Statistics Model
//!
//! One row per vendor, keyed by the vendor's record key so lookups and
//! upserts hit the same record without a query.

use super::serde_helpers;
use super::vendor::VendorId;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Per-vendor order aggregates, maintained atomically with the order
/// mutations they mirror
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorStats {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub vendor: VendorId,
    #[serde(default)]
    pub total_orders: i64,
    #[serde(default)]
    pub completed_orders: i64,
    #[serde(default)]
    pub pending_orders: i64,
    #[serde(default)]
    pub total_sales_amount: f64,
}

/// Vendor stats response shape with the vendor link rendered as a string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorStatsInfo {
    pub vendor: String,
    pub total_orders: i64,
    pub completed_orders: i64,
    pub pending_orders: i64,
    pub total_sales_amount: f64,
}

impl From<VendorStats> for VendorStatsInfo {
    fn from(stats: VendorStats) -> Self {
        Self {
            vendor: stats.vendor.to_string(),
            total_orders: stats.total_orders,
            completed_orders: stats.completed_orders,
            pending_orders: stats.pending_orders,
            total_sales_amount: stats.total_sales_amount,
        }
    }
}

/// Platform-wide rollup across all vendor stats rows
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsSummary {
    #[serde(default)]
    pub total_sales: f64,
    #[serde(default)]
    pub total_orders: i64,
    #[serde(default)]
    pub total_pending_orders: i64,
}
