//! Error taxonomy shared by the session store and the request gateway.

use thiserror::Error;

/// Errors produced by session and gateway operations.
#[derive(Debug, Error)]
pub enum Error {
	/// Sign-in or sign-up was refused. Carries the server-provided message.
	#[error("{0}")]
	AuthenticationRejected(String),

	/// Another sign-in/sign-up is still in flight.
	#[error("An authentication attempt is already in progress")]
	AuthenticationInFlight,

	/// The server answered 401 to an authenticated call. Fatal to the session.
	#[error("Sesión expirada")]
	SessionExpired,

	/// Any other non-success status.
	#[error("{message}")]
	RequestFailed { status: u16, message: String },

	/// A body was expected but could not be decoded.
	#[error("Error {status}")]
	MalformedResponse { status: u16, detail: String },

	#[error("Transport error: {0}")]
	Transport(#[from] reqwest::Error),

	#[error("Credential persistence error: {0}")]
	Persistence(String),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Invalid configuration: {0}")]
	Config(String),
}

impl Error {
	pub fn is_session_expired(&self) -> bool {
		matches!(self, Error::SessionExpired)
	}

	/// HTTP status associated with the failure, when there is one.
	pub fn status(&self) -> Option<u16> {
		match self {
			Error::SessionExpired => Some(401),
			Error::RequestFailed { status, .. } | Error::MalformedResponse { status, .. } => Some(*status),
			Error::Transport(err) => err.status().map(|s| s.as_u16()),
			_ => None,
		}
	}

	/// True for failures the caller can recover from by retrying the user action.
	pub fn is_recoverable(&self) -> bool {
		matches!(
			self,
			Error::RequestFailed { .. } | Error::MalformedResponse { .. } | Error::AuthenticationRejected(_) | Error::AuthenticationInFlight
		)
	}
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn request_failed_displays_server_message() {
		let err = Error::RequestFailed {
			status: 400,
			message: "Nombre requerido".into(),
		};
		assert_eq!(err.to_string(), "Nombre requerido");
		assert_eq!(err.status(), Some(400));
		assert!(err.is_recoverable());
	}

	#[test]
	fn malformed_response_uses_generic_message() {
		let err = Error::MalformedResponse {
			status: 200,
			detail: "expected value at line 1 column 1".into(),
		};
		assert_eq!(err.to_string(), "Error 200");
	}

	#[test]
	fn session_expired_is_not_recoverable() {
		assert!(Error::SessionExpired.is_session_expired());
		assert!(!Error::SessionExpired.is_recoverable());
		assert_eq!(Error::SessionExpired.status(), Some(401));
		assert_eq!(Error::SessionExpired.to_string(), "Sesión expirada");
	}
}
