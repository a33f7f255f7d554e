use std::fmt;

use serde::Serialize;

use matr_protocol::{CredentialRecord, Role};

/// Lifecycle phase of the session store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthPhase {
	#[default]
	Unauthenticated,
	Authenticating,
	Authenticated,
	AuthenticationFailed,
}

impl fmt::Display for AuthPhase {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AuthPhase::Unauthenticated => write!(f, "unauthenticated"),
			AuthPhase::Authenticating => write!(f, "authenticating"),
			AuthPhase::Authenticated => write!(f, "authenticated"),
			AuthPhase::AuthenticationFailed => write!(f, "authenticationFailed"),
		}
	}
}

/// The authenticated actor. Never exists without a non-empty token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
	record: CredentialRecord,
}

impl Session {
	/// Wraps `record`, or returns `None` when it carries no token.
	pub fn from_record(record: CredentialRecord) -> Option<Self> {
		if record.token.trim().is_empty() {
			return None;
		}
		Some(Self { record })
	}

	pub fn id(&self) -> u64 {
		self.record.id
	}

	pub fn full_name(&self) -> &str {
		&self.record.full_name
	}

	pub fn email(&self) -> &str {
		&self.record.email
	}

	pub fn role(&self) -> Role {
		self.record.role
	}

	pub fn token(&self) -> &str {
		&self.record.token
	}

	/// Durable form of this session.
	pub fn record(&self) -> &CredentialRecord {
		&self.record
	}
}

/// Point-in-time view of the store, as published to subscribers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
	pub phase: AuthPhase,
	pub session: Option<Session>,
	pub error: Option<String>,
}

impl SessionSnapshot {
	pub fn is_authenticated(&self) -> bool {
		self.phase == AuthPhase::Authenticated && self.session.is_some()
	}

	pub fn is_loading(&self) -> bool {
		self.phase == AuthPhase::Authenticating
	}

	pub fn token(&self) -> Option<&str> {
		self.session.as_ref().map(Session::token)
	}
}
