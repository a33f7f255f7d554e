//! Reactive session store.
//!
//! State lives in a `tokio::sync::watch` channel: every transition replaces
//! the published [`SessionSnapshot`] and wakes subscribers. The store is a
//! cheap handle; clones share state, so it can be passed to every consumer
//! (CLI commands, the gateway) instead of living in a global.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::state::{AuthPhase, Session, SessionSnapshot};
use crate::auth::Authenticator;
use crate::credentials::CredentialStore;
use crate::error::{Error, Result};
use matr_protocol::{AuthResponse, LoginRequest, RegisterRequest};

const SIGN_IN_FALLBACK: &str = "Error al iniciar sesión";
const SIGN_UP_FALLBACK: &str = "Error al registrar";

struct Inner {
	state: watch::Sender<SessionSnapshot>,
	credentials: Arc<dyn CredentialStore>,
	authenticator: Arc<dyn Authenticator>,
}

/// Owner of the current session and its lifecycle.
#[derive(Clone)]
pub struct SessionStore {
	inner: Arc<Inner>,
}

impl std::fmt::Debug for SessionStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SessionStore").field("state", &*self.inner.state.borrow()).finish()
	}
}

impl SessionStore {
	/// Creates a store in the `Unauthenticated` phase. Call
	/// [`restore`](Self::restore) once at startup to pick up a persisted session.
	pub fn new(credentials: Arc<dyn CredentialStore>, authenticator: Arc<dyn Authenticator>) -> Self {
		let (state, _) = watch::channel(SessionSnapshot::default());
		Self {
			inner: Arc::new(Inner {
				state,
				credentials,
				authenticator,
			}),
		}
	}

	/// Returns a receiver notified on every state transition.
	pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
		self.inner.state.subscribe()
	}

	pub fn snapshot(&self) -> SessionSnapshot {
		self.inner.state.borrow().clone()
	}

	pub fn phase(&self) -> AuthPhase {
		self.inner.state.borrow().phase
	}

	pub fn is_authenticated(&self) -> bool {
		self.inner.state.borrow().is_authenticated()
	}

	pub fn is_loading(&self) -> bool {
		self.inner.state.borrow().is_loading()
	}

	pub fn session(&self) -> Option<Session> {
		self.inner.state.borrow().session.clone()
	}

	pub fn token(&self) -> Option<String> {
		self.inner.state.borrow().token().map(str::to_string)
	}

	pub fn error(&self) -> Option<String> {
		self.inner.state.borrow().error.clone()
	}

	/// Adopts the persisted record, if any, without contacting the server.
	///
	/// A record that cannot be read is discarded. With no record the state is
	/// left as it is. Repeating the call with an unchanged record is a no-op.
	pub fn restore(&self) -> AuthPhase {
		let record = match self.inner.credentials.read() {
			Ok(record) => record,
			Err(err) => {
				warn!(target: "matr.session", error = %err, "discarding unreadable credential record");
				if let Err(err) = self.inner.credentials.clear() {
					warn!(target: "matr.session", error = %err, "failed to clear unreadable credential record");
				}
				None
			}
		};

		if let Some(session) = record.and_then(Session::from_record) {
			let restored = self.inner.state.send_if_modified(|state| {
				let next = SessionSnapshot {
					phase: AuthPhase::Authenticated,
					session: Some(session),
					error: None,
				};
				if *state == next {
					return false;
				}
				*state = next;
				true
			});
			if restored {
				info!(target: "matr.session", "restored persisted session");
			}
		} else {
			debug!(target: "matr.session", "no persisted session to restore");
		}

		self.phase()
	}

	/// Signs in with email and password.
	///
	/// On failure the error message is stored for display and the error is
	/// also returned so the caller can stay where it is.
	pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
		let attempt = self.begin_attempt()?;
		let request = LoginRequest {
			email: email.to_string(),
			password: password.to_string(),
		};
		let outcome = self.inner.authenticator.login(&request).await;
		self.finish_attempt(attempt, outcome, SIGN_IN_FALLBACK)
	}

	/// Registers a new account and signs it in. Same contract as [`sign_in`](Self::sign_in).
	pub async fn sign_up(&self, full_name: &str, email: &str, password: &str) -> Result<Session> {
		let attempt = self.begin_attempt()?;
		let request = RegisterRequest {
			full_name: full_name.to_string(),
			email: email.to_string(),
			password: password.to_string(),
		};
		let outcome = self.inner.authenticator.register(&request).await;
		self.finish_attempt(attempt, outcome, SIGN_UP_FALLBACK)
	}

	/// Clears the persisted record and returns to `Unauthenticated`. Never fails.
	pub fn sign_out(&self) {
		if let Err(err) = self.inner.credentials.clear() {
			warn!(target: "matr.session", error = %err, "failed to clear persisted credential");
		}
		self.inner.state.send_replace(SessionSnapshot::default());
		info!(target: "matr.session", "signed out");
	}

	/// Drops the in-memory session after the server rejected its token.
	///
	/// Persistence is not touched; whoever observed the 401 already cleared it.
	pub fn expire(&self) {
		let was_authenticated = self.is_authenticated();
		self.inner.state.send_replace(SessionSnapshot::default());
		if was_authenticated {
			warn!(target: "matr.session", "session expired");
		}
	}

	pub fn clear_error(&self) {
		self.inner.state.send_if_modified(|state| state.error.take().is_some());
	}

	/// Enters `Authenticating`, or refuses if an attempt is already running.
	///
	/// The returned guard rolls the phase back if the attempt is dropped
	/// before [`finish_attempt`](Self::finish_attempt) runs.
	fn begin_attempt(&self) -> Result<AttemptGuard<'_>> {
		let admitted = self.inner.state.send_if_modified(|state| {
			if state.phase == AuthPhase::Authenticating {
				return false;
			}
			*state = SessionSnapshot {
				phase: AuthPhase::Authenticating,
				session: None,
				error: None,
			};
			true
		});

		if admitted {
			Ok(AttemptGuard {
				state: &self.inner.state,
				armed: true,
			})
		} else {
			debug!(target: "matr.session", "rejecting overlapping authentication attempt");
			Err(Error::AuthenticationInFlight)
		}
	}

	fn finish_attempt(&self, attempt: AttemptGuard<'_>, outcome: Result<AuthResponse>, fallback: &str) -> Result<Session> {
		attempt.disarm();
		let result = outcome.and_then(|record| {
			let session = Session::from_record(record).ok_or_else(|| Error::MalformedResponse {
				status: 200,
				detail: "authentication response carried no token".into(),
			})?;
			self.inner.credentials.save(session.record())?;
			Ok(session)
		});

		match result {
			Ok(session) => {
				self.inner.state.send_replace(SessionSnapshot {
					phase: AuthPhase::Authenticated,
					session: Some(session.clone()),
					error: None,
				});
				info!(target: "matr.session", user = session.id(), role = %session.role(), "authenticated");
				Ok(session)
			}
			Err(err) => {
				// Persistence is left alone: only sign-out and a 401 destroy a stored session.
				let message = failure_message(&err, fallback);
				warn!(target: "matr.session", error = %message, "authentication failed");
				self.inner.state.send_replace(SessionSnapshot {
					phase: AuthPhase::AuthenticationFailed,
					session: None,
					error: Some(message),
				});
				Err(err)
			}
		}
	}
}

/// Returns the store to `Unauthenticated` when an attempt is abandoned mid-flight.
struct AttemptGuard<'a> {
	state: &'a watch::Sender<SessionSnapshot>,
	armed: bool,
}

impl AttemptGuard<'_> {
	fn disarm(mut self) {
		self.armed = false;
	}
}

impl Drop for AttemptGuard<'_> {
	fn drop(&mut self) {
		if !self.armed {
			return;
		}
		let reset = self.state.send_if_modified(|state| {
			if state.phase != AuthPhase::Authenticating {
				return false;
			}
			*state = SessionSnapshot::default();
			true
		});
		if reset {
			debug!(target: "matr.session", "authentication attempt abandoned");
		}
	}
}

fn failure_message(err: &Error, fallback: &str) -> String {
	let message = err.to_string();
	if message.trim().is_empty() { fallback.to_string() } else { message }
}
