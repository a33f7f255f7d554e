//! Authentication endpoint client.

use async_trait::async_trait;
use reqwest::Method;
use tracing::debug;

use crate::error::{Error, Result};
use crate::http::{ApiClient, RawResponse};
use matr_protocol::{AuthResponse, LoginRequest, RegisterRequest};

pub const LOGIN_PATH: &str = "auth/login";
pub const REGISTER_PATH: &str = "auth/register";

/// Exchanges credentials for an [`AuthResponse`].
///
/// Implementations report refusals as [`Error::AuthenticationRejected`].
#[async_trait]
pub trait Authenticator: Send + Sync {
	async fn login(&self, request: &LoginRequest) -> Result<AuthResponse>;

	async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse>;
}

/// [`Authenticator`] backed by `POST /auth/login` and `POST /auth/register`.
#[derive(Debug, Clone)]
pub struct HttpAuthenticator {
	api: ApiClient,
}

impl HttpAuthenticator {
	pub fn new(api: ApiClient) -> Self {
		Self { api }
	}

	async fn exchange(&self, path: &str, payload: serde_json::Value) -> Result<AuthResponse> {
		// Never attach a stored token here: these calls are how a token is obtained.
		let raw = self.api.send(Method::POST, path, None, Some(&payload)).await?;
		interpret(raw)
	}
}

#[async_trait]
impl Authenticator for HttpAuthenticator {
	async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
		debug!(target: "matr.session", email = %request.email, "login request");
		self.exchange(LOGIN_PATH, serde_json::to_value(request)?).await
	}

	async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
		debug!(target: "matr.session", email = %request.email, "register request");
		self.exchange(REGISTER_PATH, serde_json::to_value(request)?).await
	}
}

fn interpret(raw: RawResponse) -> Result<AuthResponse> {
	if !raw.status.is_success() {
		return Err(Error::AuthenticationRejected(raw.error_message()));
	}
	raw.decode()?.ok_or_else(|| Error::MalformedResponse {
		status: raw.status.as_u16(),
		detail: "authentication response had no body".into(),
	})
}
