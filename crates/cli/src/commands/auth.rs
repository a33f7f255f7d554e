//! Session commands.

use matr::{Client, Session};
use serde_json::{Value, json};
use tracing::info;

use crate::cli::AuthAction;
use crate::error::Result;

pub(super) async fn run(client: &Client, action: AuthAction) -> Result<Value> {
	let store = client.session();

	match action {
		AuthAction::Login { email, password } => {
			let session = store.sign_in(&email, &password).await?;
			info!(target: "matr", user = session.id(), "logged in");
			Ok(json!({ "phase": store.phase(), "user": user_view(&session) }))
		}
		AuthAction::Register { full_name, email, password } => {
			let session = store.sign_up(&full_name, &email, &password).await?;
			info!(target: "matr", user = session.id(), "registered");
			Ok(json!({ "phase": store.phase(), "user": user_view(&session) }))
		}
		AuthAction::Logout => {
			let was_authenticated = store.is_authenticated();
			store.sign_out();
			Ok(json!({ "phase": store.phase(), "signedOut": was_authenticated }))
		}
		AuthAction::Status => {
			let snapshot = store.snapshot();
			let config = client.config();
			Ok(json!({
				"app": config.app_name,
				"version": config.app_version,
				"baseUrl": config.base_url.as_str(),
				"phase": snapshot.phase,
				"authenticated": snapshot.is_authenticated(),
				"user": snapshot.session.as_ref().map(user_view),
			}))
		}
	}
}

/// Public part of a session. The token stays in the credential file.
fn user_view(session: &Session) -> Value {
	json!({
		"id": session.id(),
		"fullName": session.full_name(),
		"email": session.email(),
		"role": session.role(),
	})
}
