//! File-backed key-value store, the on-disk analogue of browser local storage.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::{CREDENTIAL_KEY, CredentialStore};
use crate::error::{Error, Result};
use matr_protocol::CredentialRecord;

/// Stores the credential record under [`CREDENTIAL_KEY`] in a JSON object file.
///
/// Other keys in the file are left untouched. Writes go through a sibling
/// temp file and a rename so readers never observe a partial file.
#[derive(Debug)]
pub struct FileCredentialStore {
	path: PathBuf,
	lock: Mutex<()>,
}

impl FileCredentialStore {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			lock: Mutex::new(()),
		}
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	fn load_entries(&self) -> Result<Map<String, Value>> {
		let content = match fs::read_to_string(&self.path) {
			Ok(content) => content,
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
			Err(err) => return Err(err.into()),
		};
		if content.trim().is_empty() {
			return Ok(Map::new());
		}
		match serde_json::from_str::<Value>(&content) {
			Ok(Value::Object(entries)) => Ok(entries),
			Ok(_) => Err(Error::Persistence(format!("{} is not a JSON object", self.path.display()))),
			Err(err) => Err(Error::Persistence(format!("{}: {err}", self.path.display()))),
		}
	}

	/// Like [`load_entries`](Self::load_entries) but starts over when the file is unreadable.
	fn load_entries_for_write(&self) -> Result<Map<String, Value>> {
		match self.load_entries() {
			Ok(entries) => Ok(entries),
			Err(Error::Persistence(reason)) => {
				warn!(target: "matr.credentials", %reason, "discarding corrupt storage file");
				Ok(Map::new())
			}
			Err(err) => Err(err),
		}
	}

	fn write_entries(&self, entries: &Map<String, Value>) -> Result<()> {
		if entries.is_empty() {
			return match fs::remove_file(&self.path) {
				Ok(()) => Ok(()),
				Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
				Err(err) => Err(err.into()),
			};
		}

		if let Some(parent) = self.path.parent() {
			if !parent.as_os_str().is_empty() {
				fs::create_dir_all(parent)?;
			}
		}
		let json = serde_json::to_string_pretty(entries)?;
		let tmp = self.path.with_extension("json.tmp");
		fs::write(&tmp, json)?;
		fs::rename(&tmp, &self.path)?;
		Ok(())
	}
}

impl CredentialStore for FileCredentialStore {
	fn save(&self, record: &CredentialRecord) -> Result<()> {
		let _guard = self.lock.lock();
		let mut entries = self.load_entries_for_write()?;
		entries.insert(CREDENTIAL_KEY.to_string(), serde_json::to_value(record)?);
		self.write_entries(&entries)?;
		debug!(target: "matr.credentials", path = %self.path.display(), user = record.id, "credential saved");
		Ok(())
	}

	fn read(&self) -> Result<Option<CredentialRecord>> {
		let _guard = self.lock.lock();
		let mut entries = self.load_entries()?;
		let Some(value) = entries.remove(CREDENTIAL_KEY) else {
			return Ok(None);
		};
		serde_json::from_value(value)
			.map(Some)
			.map_err(|e| Error::Persistence(format!("malformed credential record in {}: {e}", self.path.display())))
	}

	fn clear(&self) -> Result<()> {
		let _guard = self.lock.lock();
		let mut entries = self.load_entries_for_write()?;
		if entries.remove(CREDENTIAL_KEY).is_none() {
			return Ok(());
		}
		self.write_entries(&entries)?;
		debug!(target: "matr.credentials", path = %self.path.display(), "credential cleared");
		Ok(())
	}
}
