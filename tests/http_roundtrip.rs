//! HTTP-level tests for the records API router.
//!
//! Drives the axum router directly, without binding a socket: status codes,
//! the Location header on create, error bodies, and the wire shape of
//! outbound employee records.

use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use backoffice::http_server::HttpServer;

// ── Helpers ─────────────────────────────────────────────────────

fn app() -> Router {
    HttpServer::new().router()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// ── Health ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_health() {
    let (status, _, body) = send(app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

// ── Customers ───────────────────────────────────────────────────

#[tokio::test]
async fn test_customer_create_read_duplicate_flow() {
    let app = app();

    let (status, headers, body) = send(
        app.clone(),
        post(
            "/api/customers",
            json!({"customerId": "ALFKI", "companyName": "Alfreds Futterkiste"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        headers.get(header::LOCATION).unwrap(),
        "/api/customers/ALFKI"
    );
    assert_eq!(body["customerId"], "ALFKI");

    let (status, _, body) = send(app.clone(), get("/api/customers/ALFKI")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["companyName"], "Alfreds Futterkiste");

    let (status, _, body) = send(
        app.clone(),
        post("/api/customers", json!({"customerId": "ALFKI"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "DUPLICATE_KEY");

    let (status, _, body) = send(app, get("/api/customers")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_customer_create_requires_identifier() {
    let (status, _, body) = send(
        app(),
        post("/api/customers", json!({"companyName": "No Id Ltd"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
}

// ── Products ────────────────────────────────────────────────────

#[tokio::test]
async fn test_product_replace_and_delete_flow() {
    let app = app();

    let (status, _, created) = send(
        app.clone(),
        post("/api/products", json!({"productName": "Chai", "unitPrice": 18.0})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["productId"].as_i64().unwrap();
    assert_eq!(created["rowVersion"], 1);

    // Full-record replace with the token from the read.
    let (status, _, _) = send(
        app.clone(),
        put(
            &format!("/api/products/{id}"),
            json!({"productId": id, "productName": "Chai Gold", "rowVersion": 1}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // A second writer still holding the version-1 read must not win.
    let (status, _, body) = send(
        app.clone(),
        put(
            &format!("/api/products/{id}"),
            json!({"productId": id, "productName": "Chai Classic", "rowVersion": 1}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONCURRENCY_CONFLICT");

    let (status, _, body) = send(app.clone(), get(&format!("/api/products/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["productName"], "Chai Gold");

    let (status, _, _) = send(app.clone(), delete(&format!("/api/products/{id}"))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _, body) = send(app, get(&format!("/api/products/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_product_replace_identifier_mismatch() {
    let app = app();

    send(
        app.clone(),
        post("/api/products", json!({"productName": "Chai"})),
    )
    .await;

    let (status, _, body) = send(
        app,
        put("/api/products/1", json!({"productId": 2, "productName": "Chai"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "IDENTIFIER_MISMATCH");
}

#[tokio::test]
async fn test_product_id_must_be_an_integer() {
    let (status, _, body) = send(app(), get("/api/products/chai")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_product_filter_by_name() {
    let app = app();

    for name in ["Chai", "Chang", "Aniseed Syrup"] {
        send(
            app.clone(),
            post("/api/products", json!({"productName": name})),
        )
        .await;
    }

    let (status, _, body) = send(app.clone(), get("/api/products/byname?name=CHA")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    // Missing and empty needles are invalid input, not an empty list.
    let (status, _, body) = send(app.clone(), get("/api/products/byname")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");

    let (status, _, _) = send(app, get("/api/products/byname?name=")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ── Employees ───────────────────────────────────────────────────

#[tokio::test]
async fn test_employee_wire_shape_hides_manager_chain() {
    let app = app();

    let (status, _, body) = send(
        app.clone(),
        post(
            "/api/employees",
            json!({"lastName": "Smith", "firstName": "Anna", "title": "Sales Manager", "reportsTo": 3}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["reportsTo"].is_null());
    assert!(body.get("photo").is_none());

    let id = body["employeeId"].as_i64().unwrap();
    let (status, _, body) = send(app.clone(), get(&format!("/api/employees/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["reportsTo"].is_null());

    let (status, _, body) = send(app, get("/api/employees/bytitle?title=manager")).await;
    assert_eq!(status, StatusCode::OK);
    let matches = body.as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert!(matches[0]["reportsTo"].is_null());
}
