//! HTTP API tests
//!
//! Drives the full router (auth middleware included) against an
//! in-memory database using `tower::ServiceExt::oneshot`.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use planthaven_server::core::build_router;
use planthaven_server::db::DbService;
use planthaven_server::{Config, ServerState};

async fn test_app() -> Router {
    let service = DbService::new_in_memory()
        .await
        .expect("in-memory db should open");
    let state = ServerState::with_db(Config::with_overrides("unused", 0), service.db);
    build_router(state)
}

async fn test_app_with_admin() -> Router {
    let service = DbService::new_in_memory()
        .await
        .expect("in-memory db should open");
    planthaven_server::db::seed::ensure_admin(&service.db, "admin@planthaven.test", "adminpass")
        .await
        .expect("admin seed should succeed");
    let state = ServerState::with_db(Config::with_overrides("unused", 0), service.db);
    build_router(state)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

async fn signup_user(app: &Router, name: &str, email: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/auth/signup/user",
        None,
        Some(json!({"name": name, "email": email, "password": "secret"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "user signup failed: {}", body);
    body["token"].as_str().unwrap().to_string()
}

async fn signup_vendor(app: &Router, company: &str, email: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/auth/signup/vendor",
        None,
        Some(json!({
            "company_name": company,
            "company_address": "12 Garden Road",
            "email": email,
            "password": "secret",
            "contact": "03001234567"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "vendor signup failed: {}", body);
    body["token"].as_str().unwrap().to_string()
}

async fn add_product(app: &Router, vendor_token: &str, name: &str, price: f64, qty: i64) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/product/add",
        Some(vendor_token),
        Some(json!({
            "name": name,
            "description": "test plant",
            "price": price,
            "quantity": qty,
            "type": "houseplant",
            "keywords": ["green"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "add product failed: {}", body);
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_is_public() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn protected_routes_require_token() {
    let app = test_app().await;

    for (method, uri) in [
        ("GET", "/product"),
        ("GET", "/product/all"),
        ("GET", "/orders/user-orders"),
        ("GET", "/vendor/profile-info"),
        ("GET", "/vendor-stats"),
        ("GET", "/admin/stats-summary"),
        ("PUT", "/user/edit-info"),
    ] {
        let (status, _) = send(&app, method, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", method, uri);
    }
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let app = test_app().await;
    let (status, _) = send(&app, "GET", "/product/all", Some("not-a-jwt"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn featured_products_are_public() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/product/featured/featured-products", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn signup_then_login_roundtrip() {
    let app = test_app().await;
    signup_user(&app, "Plant Fan", "fan@example.test").await;

    let (status, body) = send(
        &app,
        "POST",
        "/auth/login/user",
        None,
        Some(json!({"email": "fan@example.test", "password": "secret"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["account"]["role"], "user");

    let (status, _) = send(
        &app,
        "POST",
        "/auth/login/user",
        None,
        Some(json!({"email": "fan@example.test", "password": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn duplicate_email_is_conflict() {
    let app = test_app().await;
    signup_user(&app, "Plant Fan", "dup@example.test").await;

    let (status, _) = send(
        &app,
        "POST",
        "/auth/signup/user",
        None,
        Some(json!({"name": "Other Fan", "email": "dup@example.test", "password": "secret"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn signup_rejects_invalid_payloads() {
    let app = test_app().await;

    // Name too short
    let (status, _) = send(
        &app,
        "POST",
        "/auth/signup/user",
        None,
        Some(json!({"name": "ab", "email": "x@example.test", "password": "secret"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Vendor contact not matching the 03XXXXXXXXX pattern
    let (status, _) = send(
        &app,
        "POST",
        "/auth/signup/vendor",
        None,
        Some(json!({
            "company_name": "GreenLeaf",
            "company_address": "12 Garden Road",
            "email": "v@example.test",
            "password": "secret",
            "contact": "13001234567"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn users_cannot_manage_products() {
    let app = test_app().await;
    let user_token = signup_user(&app, "Plant Fan", "fan@example.test").await;

    let (status, _) = send(
        &app,
        "POST",
        "/product/add",
        Some(&user_token),
        Some(json!({
            "name": "Sneaky Fern",
            "description": "should not exist",
            "price": 1.0,
            "quantity": 1,
            "type": "fern"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn vendors_cannot_touch_foreign_products() {
    let app = test_app().await;
    let vendor_a = signup_vendor(&app, "GreenLeaf", "a@example.test").await;
    let vendor_b = signup_vendor(&app, "Cactus Corner", "b@example.test").await;

    let product_id = add_product(&app, &vendor_a, "Monstera", 250.0, 10).await;

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/product/{}", product_id),
        Some(&vendor_b),
        Some(json!({"price": 1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/product/{}", product_id),
        Some(&vendor_b),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn order_flow_end_to_end() {
    let app = test_app().await;
    let vendor_token = signup_vendor(&app, "GreenLeaf", "sales@example.test").await;
    let user_token = signup_user(&app, "Plant Fan", "fan@example.test").await;

    let product_id = add_product(&app, &vendor_token, "Monstera", 250.0, 10).await;

    // Vendors may not place orders
    let order_body = json!({
        "product": product_id,
        "quantity": 2,
        "address": "42 Fern Street",
        "city": "Lahore",
        "contact_info": "03001112223",
        "postal_code": "54000",
        "payment_method": "COD"
    });
    let (status, _) = send(&app, "POST", "/orders/place", Some(&vendor_token), Some(order_body.clone())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Buyer places the order; total computed server-side
    let (status, order) = send(&app, "POST", "/orders/place", Some(&user_token), Some(order_body)).await;
    assert_eq!(status, StatusCode::OK, "place failed: {}", order);
    assert_eq!(order["status"], "Pending");
    assert!((order["total_amount"].as_f64().unwrap() - 500.0).abs() < 1e-9);
    let order_id = order["id"].as_str().unwrap().to_string();

    // Stock decremented
    let (status, product) = send(
        &app,
        "GET",
        &format!("/product/{}", product_id),
        Some(&user_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["quantity"], 8);

    // Vendor sees the order and its aggregates
    let (status, orders) = send(&app, "GET", "/orders/vendor-orders", Some(&vendor_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orders.as_array().unwrap().len(), 1);

    let (status, stats) = send(&app, "GET", "/vendor-stats", Some(&vendor_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_orders"], 1);
    assert_eq!(stats["pending_orders"], 1);

    // Buyer cannot update status
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/orders/update-status/{}", order_id),
        Some(&user_token),
        Some(json!({"status": "Delivered"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Unknown status is rejected
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/orders/update-status/{}", order_id),
        Some(&vendor_token),
        Some(json!({"status": "Refunded"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Vendor delivers
    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/orders/update-status/{}", order_id),
        Some(&vendor_token),
        Some(json!({"status": "Delivered"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "Delivered");

    let (_, stats) = send(&app, "GET", "/vendor-stats", Some(&vendor_token), None).await;
    assert_eq!(stats["pending_orders"], 0);
    assert_eq!(stats["completed_orders"], 1);

    // Buyer's history shows the delivered order
    let (status, orders) = send(&app, "GET", "/orders/user-orders", Some(&user_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orders[0]["status"], "Delivered");
}

#[tokio::test]
async fn insufficient_stock_is_client_error() {
    let app = test_app().await;
    let vendor_token = signup_vendor(&app, "GreenLeaf", "sales@example.test").await;
    let user_token = signup_user(&app, "Plant Fan", "fan@example.test").await;
    let product_id = add_product(&app, &vendor_token, "Monstera", 250.0, 1).await;

    let (status, body) = send(
        &app,
        "POST",
        "/orders/place",
        Some(&user_token),
        Some(json!({
            "product": product_id,
            "quantity": 5,
            "address": "42 Fern Street",
            "city": "Lahore",
            "contact_info": "03001112223",
            "postal_code": "54000",
            "payment_method": "COD"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4002);

    // Stock unchanged after the failed attempt
    let (_, product) = send(
        &app,
        "GET",
        &format!("/product/{}", product_id),
        Some(&user_token),
        None,
    )
    .await;
    assert_eq!(product["quantity"], 1);
}

#[tokio::test]
async fn order_failures_carry_typed_codes() {
    let app = test_app().await;
    let vendor_token = signup_vendor(&app, "GreenLeaf", "sales@example.test").await;
    let intruder_token = signup_vendor(&app, "Cactus Corner", "other@example.test").await;
    let user_token = signup_user(&app, "Plant Fan", "fan@example.test").await;
    let product_id = add_product(&app, &vendor_token, "Monstera", 250.0, 10).await;

    let order_body = |product: &str, quantity: i64| {
        json!({
            "product": product,
            "quantity": quantity,
            "address": "42 Fern Street",
            "city": "Lahore",
            "contact_info": "03001112223",
            "postal_code": "54000",
            "payment_method": "COD"
        })
    };

    // Unknown product
    let (status, body) = send(
        &app,
        "POST",
        "/orders/place",
        Some(&user_token),
        Some(order_body("doesnotexist", 1)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6001);

    // Not enough stock
    let (status, body) = send(
        &app,
        "POST",
        "/orders/place",
        Some(&user_token),
        Some(order_body(&product_id, 99)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4002);

    // Another vendor cannot move this order
    let (status, order) = send(
        &app,
        "POST",
        "/orders/place",
        Some(&user_token),
        Some(order_body(&product_id, 1)),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "place failed: {}", order);
    let order_id = order["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/orders/update-status/{}", order_id),
        Some(&intruder_token),
        Some(json!({"status": "Shipped"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 4004);

    // Unknown order
    let (status, body) = send(
        &app,
        "PUT",
        "/orders/update-status/nosuchorder",
        Some(&vendor_token),
        Some(json!({"status": "Shipped"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);
}

#[tokio::test]
async fn admin_routes_enforce_role() {
    let app = test_app_with_admin().await;
    let user_token = signup_user(&app, "Plant Fan", "fan@example.test").await;

    let (status, _) = send(&app, "GET", "/admin/stats-summary", Some(&user_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        &app,
        "POST",
        "/auth/login/user",
        None,
        Some(json!({"email": "admin@planthaven.test", "password": "adminpass"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["account"]["role"], "admin");
    let admin_token = body["token"].as_str().unwrap().to_string();

    let (status, summary) = send(&app, "GET", "/admin/stats-summary", Some(&admin_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["total_orders"], 0);

    let (status, count) = send(&app, "GET", "/admin/user-count", Some(&admin_token), None).await;
    assert_eq!(status, StatusCode::OK);
    // Admin itself lives in the user table
    assert_eq!(count["count"], 2);
}

#[tokio::test]
async fn feature_request_flow() {
    let app = test_app_with_admin().await;
    let vendor_token = signup_vendor(&app, "GreenLeaf", "sales@example.test").await;
    let product_id = add_product(&app, &vendor_token, "Monstera", 250.0, 10).await;

    let (_, body) = send(
        &app,
        "POST",
        "/auth/login/user",
        None,
        Some(json!({"email": "admin@planthaven.test", "password": "adminpass"})),
    )
    .await;
    let admin_token = body["token"].as_str().unwrap().to_string();

    // Vendor submits the request
    let (status, product) = send(
        &app,
        "POST",
        &format!("/product/request-feature/{}", product_id),
        Some(&vendor_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["featured_request"], "Pending");

    // Re-submitting while pending is rejected
    let (status, _) = send(
        &app,
        "POST",
        &format!("/product/request-feature/{}", product_id),
        Some(&vendor_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Admin sees it in the queue
    let (status, queue) = send(&app, "GET", "/admin/feature-requests", Some(&admin_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(queue.as_array().unwrap().len(), 1);

    // Approval features the product
    let (status, approved) = send(
        &app,
        "PUT",
        &format!("/admin/feature-requests/{}", product_id),
        Some(&admin_token),
        Some(json!({"status": "Approved"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["is_featured"], true);
    assert_eq!(approved["featured_request"], "Approved");

    // The public storefront now lists it
    let (status, featured) = send(&app, "GET", "/product/featured/featured-products", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(featured.as_array().unwrap().len(), 1);

    // Further requests are rejected while approved
    let (status, _) = send(
        &app,
        "POST",
        &format!("/product/request-feature/{}", product_id),
        Some(&vendor_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_and_pagination() {
    let app = test_app().await;
    let vendor_token = signup_vendor(&app, "GreenLeaf", "sales@example.test").await;
    let user_token = signup_user(&app, "Plant Fan", "fan@example.test").await;

    for i in 0..12 {
        add_product(&app, &vendor_token, &format!("Fern {}", i), 10.0, 5).await;
    }
    add_product(&app, &vendor_token, "Monstera", 250.0, 5).await;

    // Default page size is 10
    let (status, page) = send(&app, "GET", "/product", Some(&user_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["products"].as_array().unwrap().len(), 10);
    assert_eq!(page["pagination"]["total"], 13);
    assert_eq!(page["pagination"]["pages"], 2);

    let (_, page2) = send(&app, "GET", "/product?page=2", Some(&user_token), None).await;
    assert_eq!(page2["products"].as_array().unwrap().len(), 3);

    // Case-insensitive search on name
    let (status, results) = send(&app, "GET", "/product/search/monstera", Some(&user_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(results["products"].as_array().unwrap().len(), 1);
    assert_eq!(results["pagination"]["total"], 1);

    let (_, none) = send(&app, "GET", "/product/search/orchid", Some(&user_token), None).await;
    assert!(none["products"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn profile_updates_are_scoped() {
    let app = test_app().await;
    let vendor_token = signup_vendor(&app, "GreenLeaf", "sales@example.test").await;
    let user_token = signup_user(&app, "Plant Fan", "fan@example.test").await;

    // User edits own profile
    let (status, updated) = send(
        &app,
        "PUT",
        "/user/edit-info",
        Some(&user_token),
        Some(json!({"name": "Fern Enthusiast"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Fern Enthusiast");
    // Password hash never leaks
    assert!(updated.get("hash_pass").is_none());

    // Vendor profile route rejects users
    let (status, _) = send(&app, "GET", "/vendor/profile-info", Some(&user_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Vendor updates own profile
    let (status, profile) = send(
        &app,
        "PUT",
        "/vendor/update",
        Some(&vendor_token),
        Some(json!({"company_address": "99 New Garden Road"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["company_address"], "99 New Garden Road");

    let (status, my_products) = send(&app, "GET", "/vendor/my-products", Some(&vendor_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(my_products.as_array().unwrap().is_empty());
}
