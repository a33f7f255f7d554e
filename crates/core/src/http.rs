//! HTTP transport shared by the authenticator and the gateway.
//!
//! Owns header construction and the status/body helpers; deciding what a
//! status *means* is left to the caller, because a 401 from `/auth/login` is
//! a rejected password while a 401 from a resource is an expired session.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use matr_protocol::ErrorBody;

/// Status and raw body of a completed exchange.
#[derive(Debug, Clone)]
pub struct RawResponse {
	pub status: StatusCode,
	pub body: Vec<u8>,
}

impl RawResponse {
	/// True for 204 and for any response whose body is blank.
	pub fn is_empty(&self) -> bool {
		self.status == StatusCode::NO_CONTENT || self.body.iter().all(u8::is_ascii_whitespace)
	}

	/// Decodes the body as `T`, or `None` when [`is_empty`](Self::is_empty).
	pub fn decode<T: DeserializeOwned>(&self) -> Result<Option<T>> {
		if self.is_empty() {
			return Ok(None);
		}
		serde_json::from_slice(&self.body).map(Some).map_err(|e| Error::MalformedResponse {
			status: self.status.as_u16(),
			detail: e.to_string(),
		})
	}

	/// Best-effort message for a failed exchange: `{message}` or `Error <status>`.
	pub fn error_message(&self) -> String {
		serde_json::from_slice::<ErrorBody>(&self.body)
			.ok()
			.and_then(|body| body.message().map(str::to_string))
			.unwrap_or_else(|| format!("Error {}", self.status.as_u16()))
	}
}

/// Builds the headers attached to every request.
///
/// `Content-Type: application/json` is always present; `Authorization:
/// Bearer <token>` only when a non-empty token is held.
pub fn auth_headers(token: Option<&str>) -> HeaderMap {
	let mut headers = HeaderMap::new();
	headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

	if let Some(token) = token.filter(|t| !t.is_empty()) {
		match HeaderValue::from_str(&format!("Bearer {token}")) {
			Ok(value) => {
				headers.insert(AUTHORIZATION, value);
			}
			Err(_) => warn!(target: "matr.api", "stored token is not a valid header value; sending request without it"),
		}
	}

	headers
}

/// Thin wrapper over a shared `reqwest::Client` rooted at the API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
	client: reqwest::Client,
	base_url: Url,
	trace: bool,
}

impl ApiClient {
	pub fn new(config: &ClientConfig) -> Result<Self> {
		let client = reqwest::Client::builder()
			.user_agent(concat!("matr/", env!("CARGO_PKG_VERSION")))
			.build()
			.map_err(|e| Error::Config(format!("Failed to create HTTP client: {e}")))?;

		Ok(Self {
			client,
			base_url: config.base_url.clone(),
			trace: config.tracing_enabled(),
		})
	}

	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Resolves `path` relative to the base URL, keeping its path prefix.
	pub fn url(&self, path: &str) -> Result<Url> {
		self.base_url
			.join(path.trim_start_matches('/'))
			.map_err(|e| Error::Config(format!("invalid request path {path:?}: {e}")))
	}

	/// Sends one request and collects the full body. No retries, no timeout
	/// beyond what the transport imposes.
	pub async fn send(&self, method: Method, path: &str, token: Option<&str>, payload: Option<&Value>) -> Result<RawResponse> {
		self.trace(&method, path, payload);

		let mut request = self.client.request(method, self.url(path)?).headers(auth_headers(token));
		if let Some(payload) = payload {
			request = request.body(serde_json::to_vec(payload)?);
		}

		let response = request.send().await?;
		let status = response.status();
		let body = response.bytes().await?.to_vec();

		if self.trace_enabled() {
			debug!(target: "matr.api", status = status.as_u16(), bytes = body.len(), "response");
		}

		Ok(RawResponse { status, body })
	}

	fn trace_enabled(&self) -> bool {
		cfg!(debug_assertions) && self.trace
	}

	fn trace(&self, method: &Method, path: &str, payload: Option<&Value>) {
		if !self.trace_enabled() {
			return;
		}
		match payload {
			Some(payload) => debug!(target: "matr.api", %method, path, %payload, "request"),
			None => debug!(target: "matr.api", %method, path, "request"),
		}
	}
}
