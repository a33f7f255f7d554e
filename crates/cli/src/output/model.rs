use serde::{Deserialize, Serialize};

/// The result envelope printed by every command.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult<T: Serialize> {
	pub ok: bool,
	pub command: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<T>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<CommandError>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub duration_ms: Option<u64>,
}

/// Error information for failed commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
	pub code: ErrorCode,
	pub message: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<u16>,
}

/// Standardized error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
	AuthRejected,
	AuthInFlight,
	SessionExpired,
	RequestFailed,
	MalformedResponse,
	TransportError,
	IoError,
	InvalidInput,
	InternalError,
}

impl std::fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ErrorCode::AuthRejected => write!(f, "AUTH_REJECTED"),
			ErrorCode::AuthInFlight => write!(f, "AUTH_IN_FLIGHT"),
			ErrorCode::SessionExpired => write!(f, "SESSION_EXPIRED"),
			ErrorCode::RequestFailed => write!(f, "REQUEST_FAILED"),
			ErrorCode::MalformedResponse => write!(f, "MALFORMED_RESPONSE"),
			ErrorCode::TransportError => write!(f, "TRANSPORT_ERROR"),
			ErrorCode::IoError => write!(f, "IO_ERROR"),
			ErrorCode::InvalidInput => write!(f, "INVALID_INPUT"),
			ErrorCode::InternalError => write!(f, "INTERNAL_ERROR"),
		}
	}
}
