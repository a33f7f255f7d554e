//! Request gateway for the resource endpoints.
//!
//! Every facade call funnels through [`Gateway::call`], which attaches the
//! current credential and applies one classification to the response:
//!
//! | Status | Outcome |
//! |---|---|
//! | 401 | credential cleared, attached store reset, [`Error::SessionExpired`] |
//! | other non-2xx | [`Error::RequestFailed`] with the body's `message` or `Error <status>` |
//! | 204 / blank body | `Ok(None)` |
//! | 2xx | body decoded as the resource type, else [`Error::MalformedResponse`] |

mod carreras;
mod facultades;

pub use carreras::Carreras;
pub use facultades::Facultades;

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::credentials::CredentialStore;
use crate::error::{Error, Result};
use crate::http::{ApiClient, RawResponse};
use crate::session::SessionStore;

/// Entry point for resource calls.
#[derive(Clone)]
pub struct Gateway {
	api: ApiClient,
	credentials: Arc<dyn CredentialStore>,
	session: Option<SessionStore>,
}

impl std::fmt::Debug for Gateway {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Gateway")
			.field("base_url", &self.api.base_url().as_str())
			.field("session_attached", &self.session.is_some())
			.finish()
	}
}

impl Gateway {
	/// Creates a gateway that reads its token from `credentials`.
	pub fn new(api: ApiClient, credentials: Arc<dyn CredentialStore>) -> Self {
		Self {
			api,
			credentials,
			session: None,
		}
	}

	/// Attaches the store to reset when the server reports an expired session.
	///
	/// Without one, a 401 only clears persistence and the next
	/// [`SessionStore::restore`] at startup settles the state.
	pub fn with_session(mut self, session: SessionStore) -> Self {
		self.session = Some(session);
		self
	}

	pub fn facultades(&self) -> Facultades<'_> {
		Facultades::new(self)
	}

	pub fn carreras(&self) -> Carreras<'_> {
		Carreras::new(self)
	}

	/// Token currently on record, if any. Read fresh for every request.
	fn current_token(&self) -> Option<String> {
		match self.credentials.read() {
			Ok(record) => record.map(|r| r.token).filter(|t| !t.trim().is_empty()),
			Err(err) => {
				warn!(target: "matr.api", error = %err, "credential unreadable; sending request without token");
				None
			}
		}
	}

	pub(crate) async fn call<T: DeserializeOwned>(&self, method: Method, path: &str, payload: Option<Value>) -> Result<Option<T>> {
		let token = self.current_token();
		let raw = self.api.send(method, path, token.as_deref(), payload.as_ref()).await?;
		self.classify(raw)
	}

	fn classify<T: DeserializeOwned>(&self, raw: RawResponse) -> Result<Option<T>> {
		if raw.status == StatusCode::UNAUTHORIZED {
			self.terminate_session();
			return Err(Error::SessionExpired);
		}
		if !raw.status.is_success() {
			return Err(Error::RequestFailed {
				status: raw.status.as_u16(),
				message: raw.error_message(),
			});
		}
		raw.decode()
	}

	fn terminate_session(&self) {
		if let Err(err) = self.credentials.clear() {
			warn!(target: "matr.api", error = %err, "failed to clear credential after 401");
		}
		match &self.session {
			Some(session) => session.expire(),
			None => warn!(target: "matr.api", "server rejected credential; session cleared"),
		}
	}
}

pub(crate) fn payload<B: Serialize>(body: &B) -> Result<Option<Value>> {
	Ok(Some(serde_json::to_value(body)?))
}
