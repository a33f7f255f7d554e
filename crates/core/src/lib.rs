//! Session store and authenticated request gateway for the matriculas API.
//!
//! The crate is split along the two stateful concerns of an API front end:
//!
//! - [`SessionStore`] owns the authentication state machine
//!   (`Unauthenticated` → `Authenticating` → `Authenticated` /
//!   `AuthenticationFailed`) and publishes every transition to subscribers.
//! - [`Gateway`] builds every outbound resource request, attaches the bearer
//!   credential, and folds each response into one [`Result`] contract. A 401
//!   clears the persisted credential and resets the attached store.
//!
//! Both sit on a [`CredentialStore`], the durable home of the serialized
//! session that survives process restarts.
//!
//! # Example
//!
//! ```no_run
//! # use matr::{Client, ClientConfig};
//! # async fn run() -> matr::Result<()> {
//! let client = Client::new(ClientConfig::from_env()?)?;
//! client.session().restore();
//!
//! if !client.session().is_authenticated() {
//!     client.session().sign_in("a@x.com", "secret").await?;
//! }
//!
//! for facultad in client.gateway().facultades().list().await? {
//!     println!("{} {}", facultad.id, facultad.nombre);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod gateway;
pub mod http;
pub mod session;

pub use auth::{Authenticator, HttpAuthenticator};
pub use client::Client;
pub use config::ClientConfig;
pub use credentials::{CREDENTIAL_KEY, CredentialStore, FileCredentialStore, MemoryCredentialStore};
pub use error::{Error, Result};
pub use gateway::{Carreras, Facultades, Gateway};
pub use http::ApiClient;
pub use matr_protocol as protocol;
pub use matr_protocol::{
	AuthResponse, Carrera, CarreraPatch, CredentialRecord, Facultad, FacultadPatch, LoginRequest, NewCarrera, NewFacultad, RegisterRequest, Role,
};
pub use session::{AuthPhase, Session, SessionSnapshot, SessionStore};
