//! Vendor Statistics Repository
//!
//! Aggregates are written by the order transactions; this repository
//! only reads them.

use super::{BaseRepository, RepoResult, record_key};
use crate::db::models::{StatsSummary, VendorStats};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

#[derive(Clone)]
pub struct VendorStatsRepository {
    base: BaseRepository,
}

impl VendorStatsRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Aggregates for one vendor; None if no order has touched them yet
    ///
    /// The stats record key equals the vendor record key, so this is a
    /// direct lookup.
    pub async fn find_by_vendor(&self, vendor_id: &str) -> RepoResult<Option<VendorStats>> {
        let stats: Option<VendorStats> = self
            .base
            .db()
            .select(RecordId::from_table_key("vendor_stats", record_key(vendor_id)))
            .await?;
        Ok(stats)
    }

    /// Platform-wide rollup; all zeros when no stats exist
    pub async fn summary(&self) -> RepoResult<StatsSummary> {
        let rows: Vec<StatsSummary> = self
            .base
            .db()
            .query(
                r#"SELECT
                    math::sum(total_sales_amount) AS total_sales,
                    math::sum(total_orders) AS total_orders,
                    math::sum(pending_orders) AS total_pending_orders
                FROM vendor_stats GROUP ALL"#,
            )
            .await?
            .take(0)?;
        Ok(rows.into_iter().next().unwrap_or_default())
    }
}
