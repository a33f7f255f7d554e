//! Durable persistence for the serialized session.
//!
//! The credential record is the only state that survives a restart; the
//! in-memory [`SessionStore`](crate::SessionStore) is always rebuilt from it.

mod file;
mod memory;

pub use file::FileCredentialStore;
pub use memory::MemoryCredentialStore;

use crate::error::Result;
use matr_protocol::CredentialRecord;

/// Well-known key the record is stored under.
pub const CREDENTIAL_KEY: &str = "auth_user";

/// Save/read/clear contract for the credential record.
pub trait CredentialStore: Send + Sync {
	/// Replaces any stored record with `record`.
	fn save(&self, record: &CredentialRecord) -> Result<()>;

	/// Returns the stored record, or `None` when absent.
	fn read(&self) -> Result<Option<CredentialRecord>>;

	/// Removes the stored record. Clearing an empty store succeeds.
	fn clear(&self) -> Result<()>;
}
