//! In-process stand-in for the groshi server.
//!
//! Every request is recorded, and answered with the canned response
//! registered for its method and path (404 otherwise).
#![allow(dead_code)]

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Router,
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use groshi_client::Client;
use serde_json::{Value, json};

#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub raw_query: Option<String>,
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone, Default)]
struct MockState {
    requests: Arc<Mutex<Vec<Recorded>>>,
    routes: Arc<Mutex<HashMap<String, (u16, String)>>>,
    delay: Arc<Mutex<Option<Duration>>>,
}

pub struct MockServer {
    addr: SocketAddr,
    state: MockState,
}

impl MockServer {
    pub async fn start() -> Self {
        let state = MockState::default();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = Router::new().fallback(record).with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self, token: &str) -> Client {
        Client::new(&self.url(), token).unwrap()
    }

    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.respond_raw(method, path, status, &body.to_string());
    }

    pub fn respond_raw(&self, method: &str, path: &str, status: u16, body: &str) {
        self.state
            .routes
            .lock()
            .unwrap()
            .insert(format!("{method} {path}"), (status, body.to_string()));
    }

    pub fn delay(&self, delay: Duration) {
        *self.state.delay.lock().unwrap() = Some(delay);
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> Recorded {
        self.requests().pop().expect("no request received")
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    let recorded = Recorded {
        method: method.to_string(),
        path: uri.path().to_string(),
        raw_query: uri.query().map(str::to_string),
        query,
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    };
    let key = format!("{} {}", recorded.method, recorded.path);
    state.requests.lock().unwrap().push(recorded);

    let delay = *state.delay.lock().unwrap();
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let route = state.routes.lock().unwrap().get(&key).cloned();
    let (status, body) = route.unwrap_or_else(|| {
        (
            404,
            json!({ "error_message": "not found", "error_details": [] }).to_string(),
        )
    });

    (
        StatusCode::from_u16(status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

pub fn authorization_json(token: &str) -> Value {
    json!({ "token": token, "expires_at": "2030-01-01T00:00:00Z" })
}

pub fn transaction_json(id: &str, amount: i64) -> Value {
    json!({
        "uuid": id,
        "amount": amount,
        "currency": "EUR",
        "description": "",
        "timestamp": "2024-01-10T12:00:00Z",
        "created_at": "2024-01-10T12:00:01Z",
        "updated_at": "2024-01-10T12:00:02Z"
    })
}
