use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use cart_service::config::CartConfig;
use cart_service::lifecycle::CartSystem;
use cart_service::web;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceExt;

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("Request failed");
    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("Failed to collect body")
        .to_bytes();
    let json = serde_json::from_slice(&body).expect("Failed to parse JSON");
    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    post(uri, body.to_string())
}

#[tokio::test]
async fn test_ping() {
    let system = CartSystem::start(&CartConfig::default());
    let router = web::router(system.cart_client.clone());

    let (status, json) = send(&router, get("/ping")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!("Pong"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_get_cart_uses_wire_names() {
    let system = CartSystem::start(&CartConfig::default());
    let router = web::router(system.cart_client.clone());

    let (status, json) = send(&router, get("/cart")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().map(Vec::len), Some(5));
    assert_eq!(
        json[0],
        json!({
            "id": 0,
            "prod": { "id": 1, "desc": "Bike", "pricePerItem": 499 },
            "quantity": 1
        })
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_quantities() {
    let system = CartSystem::start(&CartConfig::default());
    let router = web::router(system.cart_client.clone());

    let (status, json) = send(
        &router,
        post_json(
            "/cart/quantities",
            json!([{ "id": 0, "quantity": 4 }, { "id": 1, "quantity": 0 }]),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().map(Vec::len), Some(4));
    assert_eq!(json[0]["quantity"], 4);
    assert_eq!(json[1]["id"], 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_unknown_item_is_bad_request() {
    let system = CartSystem::start(&CartConfig::default());
    let router = web::router(system.cart_client.clone());

    let (status, json) = send(
        &router,
        post_json("/cart/quantities", json!([{ "id": 17, "quantity": 2 }])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({ "error": "Shopping cart item with ID 17 not found" }));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_apply_coupon() {
    let system = CartSystem::start(&CartConfig::default());
    let router = web::router(system.cart_client.clone());

    let (status, json) = send(
        &router,
        post_json("/cart/applyCoupon", json!({ "coupon": "ABC-1234" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["prod"]["pricePerItem"], 449);

    let (status, json) = send(
        &router,
        post_json("/cart/applyCoupon", json!({ "coupon": "AB-1234" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({ "error": "Coupon AB-1234 is not valid" }));

    let (_, cart) = send(&router, get("/cart")).await;
    assert_eq!(cart[0]["prod"]["pricePerItem"], 449);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reset() {
    let system = CartSystem::start(&CartConfig::default());
    let router = web::router(system.cart_client.clone());

    send(
        &router,
        post_json("/cart/quantities", json!([{ "id": 2, "quantity": 0 }])),
    )
    .await;
    let (status, json) = send(&router, post("/cart/reset", Body::empty())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().map(Vec::len), Some(5));
    assert_eq!(json[2]["quantity"], 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let system = CartSystem::start(&CartConfig::default());
    let router = web::router(system.cart_client.clone());

    let (status, json) = send(&router, post("/cart/quantities", "{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());

    let (status, json) = send(
        &router,
        post_json("/cart/quantities", json!([{ "id": 0, "quantity": -1 }])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());

    let (status, _) = send(&router, post_json("/cart/applyCoupon", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_body_is_read_as_json_whatever_the_content_type() {
    let system = CartSystem::start(&CartConfig::default());
    let router = web::router(system.cart_client.clone());

    let form_encoded = Request::builder()
        .method("POST")
        .uri("/cart/applyCoupon")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(r#"{"coupon":"ABC-1234"}"#))
        .unwrap();
    let (status, json) = send(&router, form_encoded).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["prod"]["pricePerItem"], 449);

    let untyped = Request::builder()
        .method("POST")
        .uri("/cart/quantities")
        .body(Body::from(r#"[{"id":0,"quantity":3}]"#))
        .unwrap();
    let (status, json) = send(&router, untyped).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["quantity"], 3);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_negative_id_is_unknown_item() {
    let system = CartSystem::start(&CartConfig::default());
    let router = web::router(system.cart_client.clone());

    let (status, json) = send(
        &router,
        post_json(
            "/cart/quantities",
            json!([{ "id": 0, "quantity": 6 }, { "id": -1, "quantity": 2 }]),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({ "error": "Shopping cart item with ID -1 not found" }));

    let (_, cart) = send(&router, get("/cart")).await;
    assert_eq!(cart[0]["quantity"], 6);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_stopped_cart_is_unavailable() {
    let system = CartSystem::start(&CartConfig::default());
    let router = web::router(system.cart_client.clone());
    system.shutdown().await.unwrap();

    let (status, json) = send(&router, get("/cart")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_serve_stops_on_shutdown_signal() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let result = web::serve_with_shutdown(listener, &CartConfig::default(), async {}).await;
    assert!(result.is_ok());
}
