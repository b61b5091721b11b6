//! Data models matching the SurrealDB schema

pub mod order;
pub mod product;
pub mod serde_helpers;
pub mod user;
pub mod vendor;
pub mod vendor_stats;

pub use order::{Order, OrderId, OrderInfo, OrderPlace, OrderStatus, UpdateStatusRequest};
pub use product::{
    FeatureRequestStatus, Product, ProductCreate, ProductId, ProductInfo, ProductUpdate,
};
pub use user::{User, UserId, UserInfo, UserUpdate};
pub use vendor::{AccountStatus, Vendor, VendorId, VendorInfo, VendorUpdate};
pub use vendor_stats::{StatsSummary, VendorStats, VendorStatsInfo};
