mod common;

use auditbridge_client::domain::CreateBidRequest;
use auditbridge_client::{ClientError, ToastKind, Toaster};
use common::MockBackend;
use serde_json::json;

#[tokio::test]
async fn requests_carry_bearer_token_and_request_id() {
    let backend = MockBackend::start().await;
    backend.on("GET", "/health", 200, json!({ "status": "ok" }));

    let api = backend.client().with_token("session-token");
    api.health_check().await.unwrap();
    api.health_check().await.unwrap();

    let calls = backend.calls_to("GET", "/health");
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].authorization.as_deref(), Some("Bearer session-token"));

    let first = calls[0].request_id.clone().unwrap();
    let second = calls[1].request_id.clone().unwrap();
    assert!(uuid::Uuid::parse_str(&first).is_ok());
    assert_ne!(first, second);
}

#[tokio::test]
async fn anonymous_client_sends_no_authorization() {
    let backend = MockBackend::start().await;
    backend.on("GET", "/health", 200, json!({}));

    backend.client().health_check().await.unwrap();
    assert_eq!(backend.calls()[0].authorization, None);
}

#[tokio::test]
async fn error_statuses_map_to_client_errors() {
    let backend = MockBackend::start().await;
    backend.on("GET", "/bookings", 401, json!({}));
    backend.on("GET", "/bookings/bk-1", 403, json!({ "error": "Not your booking" }));
    backend.on("POST", "/expert/bid", 422, json!({ "code": "VALIDATION_ERROR", "message": "Price too low" }));

    let api = backend.client();

    let err = api.list_bookings().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized(_)));
    assert_eq!(err.user_message(), "Your session has expired. Please sign in again.");

    let err = api.get_booking("bk-1").await.unwrap_err();
    assert!(matches!(err, ClientError::Forbidden(_)));
    assert_eq!(err.user_message(), "Not your booking");

    let err = api.get_request("REQ-404").await.unwrap_err();
    assert_eq!(err.error_code(), "NOT_FOUND");

    let bid: CreateBidRequest = serde_json::from_value(json!({
        "requestId": "REQ-1",
        "price": 1.0,
        "proposedStart": "2099-05-21T10:00:00Z",
        "proposedEnd": "2099-05-21T12:00:00Z"
    }))
    .unwrap();
    let err = api.submit_bid(&bid).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(ref m) if m == "Price too low"));

    let toaster = Toaster::new();
    toaster.client_error(&err);
    assert_eq!(toaster.last().unwrap().kind, ToastKind::Error);
    assert_eq!(toaster.last().unwrap().message, "Price too low");
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let backend = MockBackend::start().await;
    backend.on("GET", "/bookings", 200, json!({ "unexpected": true }));

    let err = backend.client().list_bookings().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
    assert_eq!(err.error_code(), "DECODE_ERROR");
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let settings = auditbridge_client::Settings::for_base_url(&format!("http://{}", addr)).unwrap();
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    let api = auditbridge_client::ApiClient::with_http_client(http, &settings).unwrap();

    let err = api.list_bookings().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
    assert_eq!(err.user_message(), "Unable to reach the server. Check your connection.");
}

#[tokio::test]
async fn path_segments_are_percent_encoded() {
    let backend = MockBackend::start().await;

    let _ = backend.client().get_booking("bk 1").await;
    assert_eq!(backend.calls()[0].path, "/bookings/bk%201");
}
