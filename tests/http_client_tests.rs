//! Integration tests for the HTTP client configuration.
//!
//! These tests verify client construction, default header behavior, and
//! session-store sharing without touching the network.

use std::sync::Arc;

use jewelshop_api::clients::{DataType, HttpClient, HttpMethod, HttpRequest};
use jewelshop_api::{BaseUrl, SessionStore, StoreConfig};

/// Creates a test client against the given base URL.
fn create_test_client(base_url: &str) -> HttpClient {
    let config = StoreConfig::builder()
        .base_url(BaseUrl::new(base_url).unwrap())
        .build()
        .unwrap();
    HttpClient::new(&config, Arc::new(SessionStore::new()))
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_client_construction_normalizes_base_url() {
    let client = create_test_client("http://localhost:8000/");
    assert_eq!(client.base_url().as_ref(), "http://localhost:8000");
}

#[test]
fn test_default_headers_are_json_flavored() {
    let client = create_test_client("http://localhost:8000");

    assert_eq!(
        client.default_headers().get("Accept"),
        Some(&"application/json".to_string())
    );

    let user_agent = client.default_headers().get("User-Agent").unwrap();
    assert!(user_agent.contains("JewelShop API Library v"));
    assert!(user_agent.contains("Rust"));
}

#[test]
fn test_user_agent_prefix_is_prepended() {
    let config = StoreConfig::builder()
        .base_url(BaseUrl::new("http://localhost:8000").unwrap())
        .user_agent_prefix("Storefront/2.0")
        .build()
        .unwrap();
    let client = HttpClient::new(&config, Arc::new(SessionStore::new()));

    let user_agent = client.default_headers().get("User-Agent").unwrap();
    assert!(user_agent.starts_with("Storefront/2.0 | "));
}

#[test]
fn test_client_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
}

// ============================================================================
// Session Sharing Tests
// ============================================================================

#[test]
fn test_login_state_is_visible_across_clients_sharing_a_store() {
    let config = StoreConfig::builder()
        .base_url(BaseUrl::new("http://localhost:8000").unwrap())
        .build()
        .unwrap();
    let store = Arc::new(SessionStore::new());

    let storefront = HttpClient::new(&config, Arc::clone(&store));
    let background = HttpClient::new(&config, Arc::clone(&store));

    storefront.session_store().set_token("shared");
    assert!(background.session_store().has_session());

    background.session_store().clear();
    assert!(!storefront.session_store().has_session());
}

#[test]
fn test_independent_stores_hold_independent_sessions() {
    let client_a = create_test_client("http://localhost:8000");
    let client_b = create_test_client("http://localhost:8000");

    client_a.session_store().set_token("token-a");

    assert!(client_a.session_store().has_session());
    assert!(!client_b.session_store().has_session());
}

// ============================================================================
// Request Building Tests
// ============================================================================

#[test]
fn test_request_with_all_options() {
    let request = HttpRequest::builder(HttpMethod::Post, "/api/orders/checkout")
        .body(serde_json::json!({"shipping_address": "Riyadh"}))
        .body_type(DataType::Json)
        .query_param("dry_run", "true")
        .header("X-Request-Source", "integration-test")
        .build()
        .unwrap();

    assert_eq!(request.http_method, HttpMethod::Post);
    assert_eq!(request.path, "/api/orders/checkout");
    assert!(request.body.is_some());
    assert_eq!(request.body_type, Some(DataType::Json));
    assert!(request.query.as_ref().unwrap().contains_key("dry_run"));
    assert!(request
        .extra_headers
        .as_ref()
        .unwrap()
        .contains_key("X-Request-Source"));
    assert!(!request.anonymous);
}

#[test]
fn test_invalid_request_produces_correct_error() {
    use jewelshop_api::InvalidHttpRequestError;

    // Body without body_type should fail
    let result = HttpRequest::builder(HttpMethod::Post, "/api/cart/add")
        .body(serde_json::json!({"product_id": 1}))
        .build();

    assert!(matches!(
        result,
        Err(InvalidHttpRequestError::MissingBodyType)
    ));

    // Empty path should fail
    let result = HttpRequest::builder(HttpMethod::Get, "/").build();
    assert!(matches!(
        result,
        Err(InvalidHttpRequestError::InvalidPath { .. })
    ));
}
