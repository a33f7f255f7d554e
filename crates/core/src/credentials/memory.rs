use parking_lot::Mutex;

use super::CredentialStore;
use crate::error::Result;
use matr_protocol::CredentialRecord;

/// Process-local credential store. Does not survive a restart.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
	record: Mutex<Option<CredentialRecord>>,
}

impl MemoryCredentialStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a store that already holds `record`.
	pub fn with_record(record: CredentialRecord) -> Self {
		Self {
			record: Mutex::new(Some(record)),
		}
	}
}

impl CredentialStore for MemoryCredentialStore {
	fn save(&self, record: &CredentialRecord) -> Result<()> {
		*self.record.lock() = Some(record.clone());
		Ok(())
	}

	fn read(&self) -> Result<Option<CredentialRecord>> {
		Ok(self.record.lock().clone())
	}

	fn clear(&self) -> Result<()> {
		self.record.lock().take();
		Ok(())
	}
}
