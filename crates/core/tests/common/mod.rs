//! In-process stand-in for the matriculas API.
//!
//! Routes are keyed by method and path relative to `/api/v1/`. Every request
//! is recorded so tests can assert on headers and payloads.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use parking_lot::Mutex;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const API_PREFIX: &str = "/api/v1/";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
	pub method: String,
	pub path: String,
	pub authorization: Option<String>,
	pub content_type: Option<String>,
	pub body: Option<Value>,
}

#[derive(Default)]
struct MockState {
	routes: HashMap<(String, String), (u16, Vec<u8>)>,
	requests: Vec<RecordedRequest>,
}

type Shared = Arc<Mutex<MockState>>;

pub struct MockApi {
	addr: SocketAddr,
	state: Shared,
	handle: JoinHandle<()>,
}

impl MockApi {
	pub async fn start() -> Self {
		let state: Shared = Arc::default();
		let app = Router::new().fallback(handle).with_state(state.clone());
		let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock api");
		let addr = listener.local_addr().expect("mock api addr");
		let handle = tokio::spawn(async move {
			axum::serve(listener, app).await.expect("mock api serve");
		});
		Self { addr, state, handle }
	}

	pub fn base_url(&self) -> String {
		format!("http://{}/api/v1", self.addr)
	}

	/// Serves `body` as JSON for `method path`. `None` sends an empty body.
	pub fn respond(&self, method: &str, path: &str, status: u16, body: Option<Value>) {
		let bytes = body.map(|b| serde_json::to_vec(&b).expect("encode body")).unwrap_or_default();
		self.respond_raw(method, path, status, bytes);
	}

	pub fn respond_raw(&self, method: &str, path: &str, status: u16, body: impl Into<Vec<u8>>) {
		self.state
			.lock()
			.routes
			.insert((method.to_string(), path.to_string()), (status, body.into()));
	}

	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.state.lock().requests.clone()
	}

	pub fn last_request(&self) -> RecordedRequest {
		self.requests().pop().expect("no request recorded")
	}
}

impl Drop for MockApi {
	fn drop(&mut self) {
		self.handle.abort();
	}
}

async fn handle(State(state): State<Shared>, method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
	let path = uri.path().strip_prefix(API_PREFIX).unwrap_or(uri.path()).to_string();
	let recorded = RecordedRequest {
		method: method.to_string(),
		path: path.clone(),
		authorization: header_value(&headers, header::AUTHORIZATION),
		content_type: header_value(&headers, header::CONTENT_TYPE),
		body: serde_json::from_slice(&body).ok(),
	};

	let mut state = state.lock();
	state.requests.push(recorded);
	match state.routes.get(&(method.to_string(), path)) {
		Some((status, body)) => {
			let status = StatusCode::from_u16(*status).expect("valid status");
			(status, [(header::CONTENT_TYPE, "application/json")], body.clone()).into_response()
		}
		None => StatusCode::NOT_FOUND.into_response(),
	}
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
	headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string)
}

pub fn ana() -> Value {
	serde_json::json!({
		"id": 1,
		"fullName": "Ana",
		"email": "a@x.com",
		"role": "ADMIN",
		"token": "tok-1"
	})
}
