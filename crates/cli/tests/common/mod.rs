#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use tokio::net::TcpListener;

type Routes = Arc<Mutex<HashMap<(String, String), (u16, Value)>>>;

/// Minimal API double: fixed JSON responses keyed by method and path.
pub struct MockApi {
	addr: SocketAddr,
	routes: Routes,
}

impl MockApi {
	pub async fn start() -> Self {
		let routes: Routes = Arc::default();
		let app = Router::new().fallback(handle).with_state(routes.clone());
		let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock api");
		let addr = listener.local_addr().expect("mock api addr");
		tokio::spawn(async move {
			axum::serve(listener, app).await.expect("mock api serve");
		});
		Self { addr, routes }
	}

	pub fn base_url(&self) -> String {
		format!("http://{}/api/v1", self.addr)
	}

	pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
		self.routes.lock().unwrap().insert((method.to_string(), path.to_string()), (status, body));
	}
}

async fn handle(State(routes): State<Routes>, method: Method, uri: Uri) -> Response {
	let path = uri.path().trim_start_matches("/api/v1/").to_string();
	let found = routes.lock().unwrap().get(&(method.to_string(), path)).cloned();
	match found {
		Some((status, body)) => (StatusCode::from_u16(status).unwrap(), [(header::CONTENT_TYPE, "application/json")], body.to_string()).into_response(),
		None => StatusCode::NOT_FOUND.into_response(),
	}
}

/// Runs `matr -f json <args>` and parses the envelope from stdout.
pub async fn run_matr(state_dir: &Path, base_url: &str, args: &[&str]) -> (bool, Value, String) {
	let output = tokio::process::Command::new(env!("CARGO_BIN_EXE_matr"))
		.arg("-f")
		.arg("json")
		.args(args)
		.env("MATR_STATE_DIR", state_dir)
		.env("MATR_API_BASE_URL", base_url)
		.env_remove("RUST_LOG")
		.output()
		.await
		.expect("failed to execute matr");

	let stdout = String::from_utf8_lossy(&output.stdout).to_string();
	let stderr = String::from_utf8_lossy(&output.stderr).to_string();
	let parsed = serde_json::from_str::<Value>(&stdout).unwrap_or_else(|_| json!({ "raw": stdout }));
	(output.status.success(), parsed, stderr)
}

pub fn ana() -> Value {
	json!({
		"id": 1,
		"fullName": "Ana",
		"email": "a@x.com",
		"role": "ADMIN",
		"token": "tok-1"
	})
}

pub fn seed_session(state_dir: &Path) {
	let content = json!({ "auth_user": ana() });
	std::fs::write(state_dir.join("storage.json"), content.to_string()).expect("seed storage file");
}
