//! Integration tests for the envelope-level API client.
//!
//! These tests run the client against a local mock server and verify URL
//! construction, headers, request bodies, envelope unwrapping, and error
//! classification.

use serde_json::json;
use shop_backend::{ApiClient, ApiConfig, ApiError, BaseUrl, OrderItemInput};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the given mock server.
fn client_for(server: &MockServer) -> ApiClient {
    let config = ApiConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build();
    ApiClient::new(&config)
}

fn ok_envelope(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "success": true,
        "message": "",
        "data": data
    }))
}

// ============================================================================
// List Operations
// ============================================================================

#[tokio::test]
async fn test_list_users_returns_exact_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{"id": 1, "username": "a", "email": "a@x.com"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let users = client_for(&server).list_users().await.unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, 1);
    assert_eq!(users[0].username, "a");
    assert_eq!(users[0].email, "a@x.com");
    assert_eq!(
        serde_json::to_value(&users).unwrap(),
        json!([{"id": 1, "username": "a", "email": "a@x.com"}])
    );
}

#[tokio::test]
async fn test_list_products() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ok_envelope(json!([
            {"id": 1, "name": "Pen", "description": "Blue ink", "price": 1.25, "stock": 100},
            {"id": 2, "name": "Pad", "description": "A5", "price": 3.0, "stock": 0}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let products = client_for(&server).list_products().await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name, "Pen");
    assert!((products[0].price - 1.25).abs() < f64::EPSILON);
    assert_eq!(products[1].stock, 0);
}

#[tokio::test]
async fn test_list_orders() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .respond_with(ok_envelope(json!([{
            "id": 10,
            "user_id": 1,
            "status": "pending",
            "items": [{"product_id": 2, "quantity": 3, "price": 9.99}],
            "created_at": "2024-05-01T08:00:00Z"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let orders = client_for(&server).list_orders().await.unwrap();

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].status, "pending");
    assert_eq!(orders[0].items[0].quantity, 3);
    assert!(orders[0].created_at.is_some());
}

#[tokio::test]
async fn test_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .respond_with(ok_envelope(json!([])))
        .mount(&server)
        .await;

    let orders = client_for(&server).list_orders().await.unwrap();
    assert!(orders.is_empty());
}

#[tokio::test]
async fn test_list_tolerates_timestamps_in_other_formats() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ok_envelope(json!([
            {"id": 1, "username": "a", "email": "a@x.com", "created_at": "2024-03-01 12:30:00"},
            {"id": 2, "username": "b", "email": "b@x.com", "created_at": 1_709_296_200},
            {"id": 3, "username": "c", "email": "c@x.com", "created_at": "yesterday"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let users = client_for(&server).list_users().await.unwrap();

    assert_eq!(users.len(), 3);
    assert_eq!(users[0].created_at, users[1].created_at);
    assert_eq!(
        users[0].created_at.unwrap().to_rfc3339(),
        "2024-03-01T12:30:00+00:00"
    );
    assert!(users[2].created_at.is_none());
    assert_eq!(users[2].username, "c");
}

// ============================================================================
// Create Operations
// ============================================================================

#[tokio::test]
async fn test_create_user_sends_body_and_returns_user() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"username": "ada", "email": "ada@example.com"})))
        .respond_with(ok_envelope(
            json!({"id": 5, "username": "ada", "email": "ada@example.com"}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let user = client_for(&server)
        .create_user("ada", "ada@example.com")
        .await
        .unwrap();

    assert_eq!(user.id, 5);
    assert_eq!(user.username, "ada");
}

#[tokio::test]
async fn test_create_product_sends_body_and_returns_product() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/products"))
        .and(body_json(json!({
            "name": "Mug",
            "description": "Ceramic",
            "price": 7.5,
            "stock": 20
        })))
        .respond_with(ok_envelope(json!({
            "id": 3,
            "name": "Mug",
            "description": "Ceramic",
            "price": 7.5,
            "stock": 20
        })))
        .expect(1)
        .mount(&server)
        .await;

    let product = client_for(&server)
        .create_product("Mug", "Ceramic", 7.5, 20)
        .await
        .unwrap();

    assert_eq!(product.id, 3);
    assert_eq!(product.stock, 20);
}

#[tokio::test]
async fn test_create_order_omits_absent_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .and(body_json(json!({
            "user_id": 1,
            "items": [{"product_id": 2, "quantity": 3, "price": 9.99}]
        })))
        .respond_with(ok_envelope(json!({
            "id": 77,
            "user_id": 1,
            "status": "pending",
            "items": [{"product_id": 2, "quantity": 3, "price": 9.99}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let items = [OrderItemInput {
        product_id: 2,
        quantity: 3,
        price: 9.99,
    }];
    let order = client_for(&server)
        .create_order(1, &items, None)
        .await
        .unwrap();

    assert_eq!(order.id, 77);
    assert_eq!(order.status, "pending");
    assert_eq!(order.items.len(), 1);

    let requests = server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(sent.get("status").is_none());
}

#[tokio::test]
async fn test_create_order_with_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .and(body_json(json!({"user_id": 4, "items": [], "status": "paid"})))
        .respond_with(ok_envelope(
            json!({"id": 8, "user_id": 4, "status": "paid", "items": []}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let order = client_for(&server)
        .create_order(4, &[], Some("paid"))
        .await
        .unwrap();

    assert_eq!(order.status, "paid");
}

// ============================================================================
// Error Classification
// ============================================================================

#[tokio::test]
async fn test_404_is_transport_error_for_every_operation() {
    let server = MockServer::start().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let items = [OrderItemInput {
        product_id: 1,
        quantity: 1,
        price: 1.0,
    }];

    let errors = vec![
        client.list_users().await.unwrap_err(),
        client.list_products().await.unwrap_err(),
        client.list_orders().await.unwrap_err(),
        client.create_user("u", "u@x.com").await.unwrap_err(),
        client.create_product("p", "d", 1.0, 1).await.unwrap_err(),
        client.create_order(1, &items, None).await.unwrap_err(),
    ];

    for error in errors {
        assert!(error.is_transport(), "unexpected error: {error}");
        assert_eq!(error.status_code(), Some(404));
        assert!(error.to_string().contains("404"));
    }
}

#[tokio::test]
async fn test_non_2xx_is_transport_error_even_with_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": true,
            "data": []
        })))
        .mount(&server)
        .await;

    let error = client_for(&server).list_users().await.unwrap_err();

    match error {
        ApiError::Transport(e) => {
            assert_eq!(e.code, 500);
            assert_eq!(e.status_text, "Internal Server Error");
        }
        other => panic!("Expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_standard_status_keeps_a_readable_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(599))
        .mount(&server)
        .await;

    let error = client_for(&server).list_products().await.unwrap_err();

    assert_eq!(error.status_code(), Some(599));
    assert_eq!(
        error.to_string(),
        "API transport error: HTTP status 599 Unknown Status"
    );
}

#[tokio::test]
async fn test_null_message_on_failure_is_empty_application_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": null,
            "data": null
        })))
        .mount(&server)
        .await;

    let error = client_for(&server).list_orders().await.unwrap_err();

    assert!(matches!(error, ApiError::Application { ref message } if message.is_empty()));
}

#[tokio::test]
async fn test_success_false_is_application_error_for_every_operation() {
    let server = MockServer::start().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "not found"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let errors = vec![
        client.list_users().await.unwrap_err(),
        client.list_products().await.unwrap_err(),
        client.list_orders().await.unwrap_err(),
        client.create_user("u", "u@x.com").await.unwrap_err(),
        client.create_product("p", "d", 1.0, 1).await.unwrap_err(),
        client.create_order(1, &[], Some("new")).await.unwrap_err(),
    ];

    for error in errors {
        assert!(error.is_application(), "unexpected error: {error}");
        assert!(error.to_string().contains("not found"));
    }
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let error = client_for(&server).list_products().await.unwrap_err();
    assert!(matches!(error, ApiError::Deserialization(_)));
}

#[tokio::test]
async fn test_mismatched_payload_is_deserialization_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ok_envelope(json!({"not": "a list"})))
        .mount(&server)
        .await;

    let error = client_for(&server).list_users().await.unwrap_err();
    assert!(matches!(error, ApiError::Deserialization(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = ApiConfig::builder()
        .base_url(BaseUrl::new(format!("http://127.0.0.1:{port}")).unwrap())
        .build();
    let client = ApiClient::new(&config);

    let error = client.list_users().await.unwrap_err();
    assert!(matches!(error, ApiError::Network(_)));
}

#[tokio::test]
async fn test_empty_base_url_cannot_reach_relative_path() {
    let client = ApiClient::new(&ApiConfig::builder().build());

    assert!(client.base_url().is_empty());
    let error = client.list_users().await.unwrap_err();
    assert!(matches!(error, ApiError::Network(_)));
}

// ============================================================================
// URL Construction
// ============================================================================

#[tokio::test]
async fn test_trailing_slashes_on_base_do_not_double_up() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ok_envelope(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = ApiConfig::builder()
        .base_url(BaseUrl::new(format!("{}///", server.uri())).unwrap())
        .build();
    let client = ApiClient::new(&config);

    let users = client.list_users().await.unwrap();
    assert!(users.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.path(), "/api/users");
}

#[tokio::test]
async fn test_generic_get_normalizes_missing_leading_slash() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ok_envelope(json!({"status": "up"})))
        .expect(1)
        .mount(&server)
        .await;

    let value: serde_json::Value = client_for(&server).get("api/health").await.unwrap();
    assert_eq!(value, json!({"status": "up"}));
}

#[tokio::test]
async fn test_generic_post_sends_body_verbatim() {
    let server = MockServer::start().await;

    let body = json!({"anything": [1, "two", null], "nested": {"ok": true}});

    Mock::given(method("POST"))
        .and(path("/api/custom"))
        .and(body_json(body.clone()))
        .respond_with(ok_envelope(json!(42)))
        .expect(1)
        .mount(&server)
        .await;

    let answer: u32 = client_for(&server).post("/api/custom", &body).await.unwrap();
    assert_eq!(answer, 42);
}

#[tokio::test]
async fn test_concurrent_calls_on_shared_client() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ok_envelope(json!([])))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ok_envelope(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let (a, b, c) = tokio::join!(
        client.list_users(),
        client.list_products(),
        client.list_users()
    );

    assert!(a.unwrap().is_empty());
    assert!(b.unwrap().is_empty());
    assert!(c.unwrap().is_empty());
}
