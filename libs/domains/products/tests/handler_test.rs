//! Handler tests for the products domain
//!
//! Drive the router in-process with `oneshot` against the in-memory
//! repository: status codes, JSON bodies and error shapes.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    handlers::router(ProductService::new(InMemoryProductRepository::new()))
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create(app: &Router, body: Value) -> Product {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

fn drill() -> Value {
    json!({
        "name": "Cordless Drill",
        "description": "18V with two batteries",
        "price": 129.99,
        "stock": 12,
        "category": "tools"
    })
}

#[tokio::test]
async fn test_create_returns_201_with_generated_id() {
    let app = app();
    let product = create(&app, drill()).await;

    assert!(product.id > 0);
    assert_eq!(product.name, "Cordless Drill");
    assert_eq!(product.price, 129.99);
    assert_eq!(product.stock, 12);
    assert_eq!(product.category, "tools");
}

#[tokio::test]
async fn test_create_defaults_stock_and_ignores_body_id() {
    let app = app();
    let product = create(
        &app,
        json!({"id": 500, "name": "Hammer", "price": 15.5, "category": "tools"}),
    )
    .await;

    assert_ne!(product.id, 500);
    assert_eq!(product.stock, 0);
    assert_eq!(product.description, None);
}

#[tokio::test]
async fn test_create_invalid_returns_field_map() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/",
            json!({"name": "ab", "price": 0, "stock": -1, "category": "tools"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["name"], "Name must be between 3 and 100 characters");
    assert_eq!(body["price"], "Price must be greater than 0");
    assert_eq!(body["stock"], "Stock cannot be negative");
}

#[tokio::test]
async fn test_create_missing_required_fields() {
    let response = app()
        .oneshot(json_request("POST", "/", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert!(body.get("name").is_some());
    assert_eq!(body["price"], "Price is required");
    assert_eq!(body["category"], "Category is required");
}

#[tokio::test]
async fn test_create_null_fields_return_field_map() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/",
            json!({"name": null, "price": null, "category": null}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["name"], "Name is required");
    assert_eq!(body["price"], "Price is required");
    assert_eq!(body["category"], "Category is required");
    assert!(body.get("status").is_none());
}

#[tokio::test]
async fn test_create_malformed_json_is_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_list_returns_all_in_id_order() {
    let app = app();
    let first = create(&app, drill()).await;
    let second = create(
        &app,
        json!({"name": "Garden Hose", "price": 25.0, "category": "garden"}),
    )
    .await;

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products, vec![first, second]);
}

#[tokio::test]
async fn test_get_existing_and_missing() {
    let app = app();
    let created = create(&app, drill()).await;

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Product = json_body(response.into_body()).await;
    assert_eq!(fetched, created);

    let response = app.oneshot(empty_request("GET", "/9999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["status"], 404);
    assert_eq!(body["message"], "Product not found with id: 9999");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_get_non_numeric_id_is_400() {
    let response = app()
        .oneshot(empty_request("GET", "/abc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_overwrites_all_fields_and_keeps_id() {
    let app = app();
    let created = create(&app, drill()).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/{}", created.id),
            json!({"id": 77, "name": "Impact Driver", "price": 149.0, "category": "power-tools"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: Product = json_body(response.into_body()).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Impact Driver");
    assert_eq!(updated.description, None);
    assert_eq!(updated.stock, 0);
    assert_eq!(updated.category, "power-tools");

    let response = app
        .oneshot(empty_request("GET", &format!("/{}", created.id)))
        .await
        .unwrap();
    let fetched: Product = json_body(response.into_body()).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_missing_is_404() {
    let response = app()
        .oneshot(json_request("PUT", "/404", drill()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_invalid_is_400() {
    let app = app();
    let created = create(&app, drill()).await;

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/{}", created.id),
            json!({"name": "Drill", "price": -3, "category": "tools"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let app = app();
    let created = create(&app, drill()).await;
    let uri = format!("/{}", created.id);

    let response = app.clone().oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(empty_request("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_category_is_exact_and_case_sensitive() {
    let app = app();
    create(&app, drill()).await;
    create(&app, json!({"name": "Saw", "price": 30.0, "category": "Tools"})).await;
    create(&app, json!({"name": "Toolbox", "price": 45.0, "category": "tools-storage"})).await;

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/category/tools"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Cordless Drill");

    let response = app
        .oneshot(empty_request("GET", "/category/kitchen"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_price_range_is_inclusive() {
    let app = app();
    for (name, price) in [("Low", 99.99), ("Min", 100.0), ("Mid", 150.0), ("Max", 200.0), ("High", 200.01)] {
        create(&app, json!({"name": name, "price": price, "category": "misc"})).await;
    }

    let response = app
        .oneshot(empty_request("GET", "/price-range?min=100&max=200"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let names: Vec<String> = json_body::<Vec<Product>>(response.into_body())
        .await
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Min", "Mid", "Max"]);
}

#[tokio::test]
async fn test_price_range_requires_both_bounds() {
    let response = app()
        .oneshot(empty_request("GET", "/price-range?min=100"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_inverted_price_range_is_empty() {
    let app = app();
    create(&app, drill()).await;

    let response = app
        .oneshot(empty_request("GET", "/price-range?min=500&max=1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Product> = json_body(response.into_body()).await;
    assert!(products.is_empty());
}
