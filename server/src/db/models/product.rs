//! Product Model

use super::serde_helpers;
use super::vendor::VendorId;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

/// Product ID type
pub type ProductId = RecordId;

/// Feature-request lifecycle
///
/// A vendor asks for a product to be featured; an admin approves or
/// rejects it. `Waiting` keeps a request visible after an admin has
/// seen it but not decided yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureRequestStatus {
    None,
    Pending,
    Approved,
    Waiting,
    Rejected,
}

impl Default for FeatureRequestStatus {
    fn default() -> Self {
        Self::None
    }
}

/// Catalog item. `quantity` is the available stock and is decremented
/// only by successful order placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<ProductId>,
    #[serde(with = "serde_helpers::record_id")]
    pub vendor: VendorId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
    /// Care formula; "NaN" when the product has none
    #[serde(default = "default_formula")]
    pub formula: String,
    #[serde(rename = "type")]
    pub product_type: String,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_featured: bool,
    #[serde(default)]
    pub featured_request: FeatureRequestStatus,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

fn default_formula() -> String {
    "NaN".to_string()
}

/// Product response shape with ids rendered as "table:key" strings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInfo {
    pub id: String,
    pub vendor: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
    pub formula: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub is_featured: bool,
    pub featured_request: FeatureRequestStatus,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<Product> for ProductInfo {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.map(|id| id.to_string()).unwrap_or_default(),
            vendor: product.vendor.to_string(),
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
            formula: product.formula,
            product_type: product.product_type,
            is_featured: product.is_featured,
            featured_request: product.featured_request,
            keywords: product.keywords,
            image: product.image,
        }
    }
}

/// Create product payload (vendor comes from the caller, never the body)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductCreate {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    pub quantity: i64,
    pub formula: Option<String>,
    #[serde(rename = "type")]
    pub product_type: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub image: Option<String>,
}

/// Update product payload; absent fields keep their current value
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[validate(range(min = 0))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
