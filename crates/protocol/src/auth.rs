//! Authentication request and response shapes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role granted to an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
	#[serde(alias = "ROLE_ADMIN")]
	Admin,
	#[serde(alias = "ROLE_USER")]
	User,
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Role::Admin => write!(f, "ADMIN"),
			Role::User => write!(f, "USER"),
		}
	}
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
	pub email: String,
	pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
	pub full_name: String,
	pub email: String,
	pub password: String,
}

/// Successful authentication response.
///
/// The same shape is persisted verbatim as the credential record, so a
/// restored session is indistinguishable from a freshly issued one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
	pub id: u64,
	pub full_name: String,
	pub email: String,
	pub role: Role,
	pub token: String,
}

/// Durable form of a session. Identical to [`AuthResponse`] on the wire.
pub type CredentialRecord = AuthResponse;

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn auth_response_uses_camel_case_fields() {
		let record: AuthResponse = serde_json::from_value(json!({
			"id": 1,
			"fullName": "Ana",
			"email": "a@x.com",
			"role": "ADMIN",
			"token": "tok-1"
		}))
		.unwrap();

		assert_eq!(record.full_name, "Ana");
		assert_eq!(record.role, Role::Admin);
		assert_eq!(serde_json::to_value(&record).unwrap()["fullName"], "Ana");
	}

	#[test]
	fn role_accepts_spring_prefixed_names() {
		let role: Role = serde_json::from_value(json!("ROLE_USER")).unwrap();
		assert_eq!(role, Role::User);
		assert_eq!(serde_json::to_value(role).unwrap(), json!("USER"));
	}

	#[test]
	fn register_request_serializes_full_name() {
		let body = serde_json::to_value(RegisterRequest {
			full_name: "Juan Pérez".into(),
			email: "j@x.com".into(),
			password: "secret".into(),
		})
		.unwrap();
		assert_eq!(body, json!({"fullName": "Juan Pérez", "email": "j@x.com", "password": "secret"}));
	}
}
