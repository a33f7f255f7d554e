//! Structured error body returned by the API on failure.

use serde::{Deserialize, Serialize};

/// `{ "message": "..." }` error payload.
///
/// Every field is optional: servers and gateways in front of them do not
/// always honor the contract, and a missing message falls back to a generic one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
	#[serde(default)]
	pub message: Option<String>,
}

impl ErrorBody {
	/// Returns the message when present and non-blank.
	pub fn message(&self) -> Option<&str> {
		self.message.as_deref().map(str::trim).filter(|m| !m.is_empty())
	}
}
