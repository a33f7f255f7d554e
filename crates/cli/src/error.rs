use thiserror::Error;

use crate::output::ErrorCode;

#[derive(Debug, Error)]
pub enum CliError {
	#[error(transparent)]
	Api(#[from] matr::Error),

	#[error("{0}")]
	InvalidInput(String),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// Already reported through the output envelope.
	#[error("{0}")]
	Reported(String),
}

impl CliError {
	pub fn code(&self) -> ErrorCode {
		match self {
			CliError::Api(err) => match err {
				matr::Error::AuthenticationRejected(_) => ErrorCode::AuthRejected,
				matr::Error::AuthenticationInFlight => ErrorCode::AuthInFlight,
				matr::Error::SessionExpired => ErrorCode::SessionExpired,
				matr::Error::RequestFailed { .. } => ErrorCode::RequestFailed,
				matr::Error::MalformedResponse { .. } => ErrorCode::MalformedResponse,
				matr::Error::Transport(_) => ErrorCode::TransportError,
				matr::Error::Persistence(_) | matr::Error::Io(_) => ErrorCode::IoError,
				matr::Error::Config(_) => ErrorCode::InvalidInput,
				matr::Error::Json(_) => ErrorCode::InternalError,
			},
			CliError::InvalidInput(_) => ErrorCode::InvalidInput,
			CliError::Json(_) | CliError::Reported(_) => ErrorCode::InternalError,
		}
	}
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn api_errors_map_to_stable_codes() {
		assert_eq!(CliError::from(matr::Error::SessionExpired).code(), ErrorCode::SessionExpired);
		assert_eq!(CliError::from(matr::Error::AuthenticationRejected("x".into())).code(), ErrorCode::AuthRejected);
		let failed = matr::Error::RequestFailed {
			status: 400,
			message: "Nombre requerido".into(),
		};
		let err = CliError::from(failed);
		assert_eq!(err.code(), ErrorCode::RequestFailed);
		assert_eq!(err.to_string(), "Nombre requerido");
	}
}
