//! In-process mock of the marketplace backend.
//!
//! Every request is recorded. Responses are looked up by method and path;
//! anything unregistered answers 404.

#![allow(dead_code)]

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use auditbridge_client::{ApiClient, Settings};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Debug, Clone)]
pub struct Call {
    pub method: String,
    pub path: String,
    pub body: Option<Value>,
    pub authorization: Option<String>,
    pub request_id: Option<String>,
}

#[derive(Default)]
struct MockState {
    routes: Mutex<HashMap<(String, String), (u16, Value)>>,
    calls: Mutex<Vec<Call>>,
}

pub struct MockBackend {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());

        let app = Router::new()
            .fallback(handle)
            .with_state(state.clone())
            .layer(TraceLayer::new_for_http());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// Register a JSON response for `method path`.
    pub fn on(&self, method: &str, path: &str, status: u16, body: Value) {
        self.state
            .routes
            .lock()
            .insert((method.to_uppercase(), path.to_string()), (status, body));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.calls.lock().clone()
    }

    pub fn calls_to(&self, method: &str, path: &str) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| c.method == method.to_uppercase() && c.path == path)
            .collect()
    }

    /// Client pointed at this backend, bypassing any system proxy.
    pub fn client(&self) -> ApiClient {
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        let settings = Settings::for_base_url(&self.base_url).unwrap();
        ApiClient::with_http_client(http, &settings).unwrap()
    }
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let path = uri.path().to_string();
    state.calls.lock().push(Call {
        method: method.to_string(),
        path: path.clone(),
        body: serde_json::from_slice(&body).ok(),
        authorization: header("authorization"),
        request_id: header("x-request-id"),
    });

    let route = state
        .routes
        .lock()
        .get(&(method.to_string(), path.clone()))
        .cloned();

    match route {
        Some((204, _)) => StatusCode::NO_CONTENT.into_response(),
        Some((status, body)) => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(body),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "code": "NOT_FOUND", "message": format!("No mock for {} {}", method, path) })),
        )
            .into_response(),
    }
}

pub fn booking(id: &str, status: &str, city: &str, category: &str, day: u32) -> Value {
    json!({
        "id": id,
        "requestId": format!("REQ-{}", id),
        "status": status,
        "category": category,
        "scheduledStart": format!("2026-05-{:02}T10:00:00Z", day),
        "scheduledEnd": format!("2026-05-{:02}T13:00:00Z", day),
        "organization": { "id": "org-1", "name": "Greenview Society" },
        "site": { "id": format!("site-{}", id), "name": format!("Block {}", id), "city": city },
        "expert": { "id": "exp-1", "name": "Asha Kulkarni" },
        "price": 18500.0
    })
}

pub fn bid(id: &str, status: &str, price: f64) -> Value {
    json!({
        "id": id,
        "requestId": "REQ-1",
        "request": { "id": "REQ-1", "title": "Fire safety audit" },
        "expert": { "id": format!("exp-{}", id), "name": format!("Expert {}", id) },
        "price": price,
        "proposedStart": "2026-05-20T10:00:00Z",
        "proposedEnd": "2026-05-20T16:00:00Z",
        "status": status
    })
}

pub fn open_request(id: &str) -> Value {
    json!({
        "id": id,
        "title": "Fire safety audit",
        "category": "FIRE_SAFETY",
        "status": "BIDDING_OPEN",
        "site": { "id": "site-1", "name": "Tower A", "city": "Pune" },
        "organization": { "id": "org-1", "name": "Greenview Society" },
        "preferredWindow": { "start": "2099-05-20T09:00:00Z", "end": "2099-05-24T18:00:00Z" },
        "bidCloseAt": "2099-05-15T00:00:00Z",
        "budget": 25000
    })
}
