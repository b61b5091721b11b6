//! Order Repository
//!
//! Order placement and status transitions run as single database
//! transactions so the order row, the product stock, and the vendor
//! aggregates never drift apart.

use super::{BaseRepository, RepoError, RepoResult, record_key};
use crate::db::models::{Order, OrderStatus};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use uuid::Uuid;

/// Transaction abort markers, surfaced via THROW and matched on the
/// error message
const ERR_PRODUCT_NOT_FOUND: &str = "PRODUCT_NOT_FOUND";
const ERR_INSUFFICIENT_STOCK: &str = "INSUFFICIENT_STOCK";
const ERR_ORDER_NOT_FOUND: &str = "ORDER_NOT_FOUND";
const ERR_NOT_ORDER_VENDOR: &str = "NOT_ORDER_VENDOR";

const PLACE_ORDER_QUERY: &str = r#"
BEGIN TRANSACTION;
LET $product = type::thing('product', $product_id);
LET $p = (SELECT * FROM ONLY $product);
IF $p == NONE { THROW 'PRODUCT_NOT_FOUND' };
IF $p.quantity < $quantity { THROW 'INSUFFICIENT_STOCK' };
LET $total = $p.price * $quantity;
UPDATE $product SET quantity -= $quantity;
CREATE type::thing('orders', $order_id) CONTENT {
    buyer: type::thing('user', $buyer_id),
    vendor: $p.vendor,
    product: $product,
    quantity: $quantity,
    total_amount: $total,
    status: 'Pending',
    address: $address,
    city: $city,
    contact_info: $contact_info,
    postal_code: $postal_code,
    payment_method: $payment_method,
    created_at: time::unix(time::now())
};
UPSERT type::thing('vendor_stats', record::id($p.vendor)) SET
    vendor = $p.vendor,
    total_orders += 1,
    pending_orders += 1,
    completed_orders += 0,
    total_sales_amount += $total;
COMMIT TRANSACTION;
"#;

const UPDATE_STATUS_QUERY: &str = r#"
BEGIN TRANSACTION;
LET $order = type::thing('orders', $order_id);
LET $o = (SELECT * FROM ONLY $order);
IF $o == NONE { THROW 'ORDER_NOT_FOUND' };
IF $o.vendor != $vendor { THROW 'NOT_ORDER_VENDOR' };
LET $prev = $o.status;
UPDATE $order SET status = $status;
UPDATE type::thing('vendor_stats', record::id($o.vendor)) SET
    pending_orders += (IF $prev == 'Pending' AND $status != 'Pending' { -1 } ELSE { 0 }),
    completed_orders += (IF $prev != 'Delivered' AND $status == 'Delivered' { 1 } ELSE { 0 });
COMMIT TRANSACTION;
"#;

/// Map transaction abort errors back to typed errors
///
/// A THROW aborts the whole transaction; every other statement then
/// reports a generic "failed transaction" error and only the throwing
/// statement carries the marker, so all statement errors are scanned.
fn check_transaction(mut response: surrealdb::Response) -> RepoResult<()> {
    let errors = response.take_errors();
    if errors.is_empty() {
        return Ok(());
    }
    for err in errors.values() {
        let msg = err.to_string();
        if msg.contains(ERR_PRODUCT_NOT_FOUND) {
            return Err(RepoError::NotFound("Product not found".to_string()));
        }
        if msg.contains(ERR_INSUFFICIENT_STOCK) {
            return Err(RepoError::InsufficientStock);
        }
        if msg.contains(ERR_ORDER_NOT_FOUND) {
            return Err(RepoError::NotFound("Order not found".to_string()));
        }
        if msg.contains(ERR_NOT_ORDER_VENDOR) {
            return Err(RepoError::Forbidden(
                "Unauthorized to update this order".to_string(),
            ));
        }
    }
    let mut failures: Vec<(usize, surrealdb::Error)> = errors.into_iter().collect();
    failures.sort_by_key(|(index, _)| *index);
    let message = failures
        .into_iter()
        .map(|(_, err)| err.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    Err(RepoError::Database(message))
}

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Place an order
    ///
    /// Atomically checks stock, decrements it, creates the order, and
    /// bumps the owning vendor's aggregates. The vendor and the total
    /// come from the stored product, never the caller.
    #[allow(clippy::too_many_arguments)]
    pub async fn place(
        &self,
        buyer_key: &str,
        product_id: &str,
        quantity: i64,
        address: String,
        city: String,
        contact_info: String,
        postal_code: String,
        payment_method: String,
    ) -> RepoResult<Order> {
        let order_key = Uuid::new_v4().simple().to_string();

        let response = self
            .base
            .db()
            .query(PLACE_ORDER_QUERY)
            .bind(("order_id", order_key.clone()))
            .bind(("buyer_id", record_key(buyer_key).to_string()))
            .bind(("product_id", record_key(product_id).to_string()))
            .bind(("quantity", quantity))
            .bind(("address", address))
            .bind(("city", city))
            .bind(("contact_info", contact_info))
            .bind(("postal_code", postal_code))
            .bind(("payment_method", payment_method))
            .await?;

        check_transaction(response)?;

        let order: Option<Order> = self
            .base
            .db()
            .select(RecordId::from_table_key("orders", order_key))
            .await?;
        order.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Update an order's status on behalf of its vendor
    ///
    /// Aggregate deltas are computed inside the same transaction:
    /// leaving Pending decrements pending_orders, first arrival at
    /// Delivered increments completed_orders.
    pub async fn update_status(
        &self,
        order_id: &str,
        vendor: RecordId,
        status: OrderStatus,
    ) -> RepoResult<Order> {
        let order_key = record_key(order_id).to_string();

        let response = self
            .base
            .db()
            .query(UPDATE_STATUS_QUERY)
            .bind(("order_id", order_key.clone()))
            .bind(("vendor", vendor))
            .bind(("status", status.as_str()))
            .await?;

        check_transaction(response)?;

        let order: Option<Order> = self
            .base
            .db()
            .select(RecordId::from_table_key("orders", order_key))
            .await?;
        order.ok_or_else(|| RepoError::NotFound("Order not found".to_string()))
    }

    /// Find an order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let order: Option<Order> = self
            .base
            .db()
            .select(RecordId::from_table_key("orders", record_key(id)))
            .await?;
        Ok(order)
    }

    /// All orders placed by a buyer, newest first
    pub async fn find_by_buyer(&self, buyer: RecordId) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM orders WHERE buyer = $buyer ORDER BY created_at DESC")
            .bind(("buyer", buyer))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// All orders received by a vendor, newest first
    pub async fn find_by_vendor(&self, vendor: RecordId) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM orders WHERE vendor = $vendor ORDER BY created_at DESC")
            .bind(("vendor", vendor))
            .await?
            .take(0)?;
        Ok(orders)
    }
}
