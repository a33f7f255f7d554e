//! Wiring of transport, persistence, session store and gateway.

use std::sync::Arc;

use crate::auth::HttpAuthenticator;
use crate::config::ClientConfig;
use crate::credentials::{CredentialStore, FileCredentialStore};
use crate::error::Result;
use crate::gateway::Gateway;
use crate::http::ApiClient;
use crate::session::SessionStore;

/// One session store and one gateway sharing a credential store.
///
/// The gateway is attached to the session store, so a 401 from any resource
/// call resets the store in place.
#[derive(Debug, Clone)]
pub struct Client {
	config: ClientConfig,
	session: SessionStore,
	gateway: Gateway,
}

impl Client {
	/// Builds a client persisting credentials to `config.credentials_path`.
	pub fn new(config: ClientConfig) -> Result<Self> {
		let credentials = Arc::new(FileCredentialStore::new(config.credentials_path.clone()));
		Self::with_credentials(config, credentials)
	}

	pub fn with_credentials(config: ClientConfig, credentials: Arc<dyn CredentialStore>) -> Result<Self> {
		let api = ApiClient::new(&config)?;
		let session = SessionStore::new(credentials.clone(), Arc::new(HttpAuthenticator::new(api.clone())));
		let gateway = Gateway::new(api, credentials).with_session(session.clone());
		Ok(Self { config, session, gateway })
	}

	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	pub fn session(&self) -> &SessionStore {
		&self.session
	}

	pub fn gateway(&self) -> &Gateway {
		&self.gateway
	}
}
