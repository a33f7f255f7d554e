//! Client configuration resolved from the environment.
//!
//! Resolution order for every setting is: explicit builder override, then the
//! `MATR_*` environment variable, then the built-in default.

use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";
pub const DEFAULT_APP_NAME: &str = "Sistema de Matrículas";
pub const DEFAULT_APP_VERSION: &str = "1.0.0";

pub const BASE_URL_ENV: &str = "MATR_API_BASE_URL";
pub const TRACE_ENV: &str = "MATR_TRACE";
pub const STATE_DIR_ENV: &str = "MATR_STATE_DIR";
pub const APP_NAME_ENV: &str = "MATR_APP_NAME";
pub const APP_VERSION_ENV: &str = "MATR_APP_VERSION";

const CREDENTIALS_FILE: &str = "storage.json";

/// Settings shared by the session store and the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
	/// API root. Always ends with `/` so resource paths join beneath it.
	pub base_url: Url,
	/// Request tracing requested. Only honored in debug builds.
	pub trace: bool,
	/// Durable key-value file holding the credential record.
	pub credentials_path: PathBuf,
	pub app_name: String,
	pub app_version: String,
}

impl ClientConfig {
	/// Builds a config for `base_url` with every other setting defaulted.
	pub fn new(base_url: &str) -> Result<Self> {
		Ok(Self {
			base_url: parse_base_url(base_url)?,
			trace: cfg!(debug_assertions),
			credentials_path: default_state_dir(|_| None).join(CREDENTIALS_FILE),
			app_name: DEFAULT_APP_NAME.to_string(),
			app_version: DEFAULT_APP_VERSION.to_string(),
		})
	}

	/// Reads the process environment.
	pub fn from_env() -> Result<Self> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
		let base_url = non_empty(lookup(BASE_URL_ENV)).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
		let trace = match non_empty(lookup(TRACE_ENV)) {
			Some(raw) => parse_flag(&raw).ok_or_else(|| Error::Config(format!("{TRACE_ENV} must be a boolean, got {raw:?}")))?,
			None => cfg!(debug_assertions),
		};
		let state_dir = non_empty(lookup(STATE_DIR_ENV)).map(PathBuf::from).unwrap_or_else(|| default_state_dir(&lookup));

		Ok(Self {
			base_url: parse_base_url(&base_url)?,
			trace,
			credentials_path: state_dir.join(CREDENTIALS_FILE),
			app_name: non_empty(lookup(APP_NAME_ENV)).unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
			app_version: non_empty(lookup(APP_VERSION_ENV)).unwrap_or_else(|| DEFAULT_APP_VERSION.to_string()),
		})
	}

	pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
		self.base_url = parse_base_url(base_url)?;
		Ok(self)
	}

	pub fn with_trace(mut self, trace: bool) -> Self {
		self.trace = trace;
		self
	}

	pub fn with_credentials_path(mut self, path: impl Into<PathBuf>) -> Self {
		self.credentials_path = path.into();
		self
	}

	/// Places the credential file inside `dir`.
	pub fn with_state_dir(self, dir: &Path) -> Self {
		self.with_credentials_path(dir.join(CREDENTIALS_FILE))
	}

	/// Whether request tracing actually runs. Always false in release builds.
	pub fn tracing_enabled(&self) -> bool {
		cfg!(debug_assertions) && self.trace
	}
}

/// Parses an API root, requiring http(s) and normalizing the trailing slash.
pub fn parse_base_url(raw: &str) -> Result<Url> {
	let trimmed = raw.trim();
	let with_slash = if trimmed.ends_with('/') { trimmed.to_string() } else { format!("{trimmed}/") };
	let url = Url::parse(&with_slash).map_err(|e| Error::Config(format!("invalid base URL {trimmed:?}: {e}")))?;

	match url.scheme() {
		"http" | "https" => Ok(url),
		other => Err(Error::Config(format!("unsupported base URL scheme {other:?}"))),
	}
}

fn default_state_dir(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
	non_empty(lookup("XDG_CONFIG_HOME"))
		.map(PathBuf::from)
		.or_else(dirs::config_dir)
		.unwrap_or_else(|| PathBuf::from("."))
		.join("matr")
}

fn parse_flag(raw: &str) -> Option<bool> {
	match raw.trim().to_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Some(true),
		"0" | "false" | "no" | "off" => Some(false),
		_ => None,
	}
}

fn non_empty(value: Option<String>) -> Option<String> {
	value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
		move |key| map.get(key).cloned()
	}

	#[test]
	fn defaults_apply_when_environment_is_empty() {
		let config = ClientConfig::from_lookup(lookup_from(&[("XDG_CONFIG_HOME", "/tmp/xdg")])).unwrap();
		assert_eq!(config.base_url.as_str(), "http://localhost:8080/api/v1/");
		assert_eq!(config.credentials_path, PathBuf::from("/tmp/xdg/matr/storage.json"));
		assert_eq!(config.app_name, DEFAULT_APP_NAME);
		assert_eq!(config.app_version, DEFAULT_APP_VERSION);
		assert_eq!(config.trace, cfg!(debug_assertions));
	}

	#[test]
	fn environment_overrides_defaults() {
		let config = ClientConfig::from_lookup(lookup_from(&[
			(BASE_URL_ENV, "https://api.example.edu/v2"),
			(TRACE_ENV, "false"),
			(STATE_DIR_ENV, "/var/lib/matr"),
			(APP_NAME_ENV, "Matrículas QA"),
		]))
		.unwrap();

		assert_eq!(config.base_url.as_str(), "https://api.example.edu/v2/");
		assert!(!config.trace);
		assert!(!config.tracing_enabled());
		assert_eq!(config.credentials_path, PathBuf::from("/var/lib/matr/storage.json"));
		assert_eq!(config.app_name, "Matrículas QA");
	}

	#[test]
	fn invalid_trace_flag_is_rejected() {
		let err = ClientConfig::from_lookup(lookup_from(&[(TRACE_ENV, "maybe")])).unwrap_err();
		assert!(matches!(err, Error::Config(_)));
	}

	#[test]
	fn base_url_keeps_path_prefix_when_joining() {
		let url = parse_base_url("http://localhost:8080/api/v1").unwrap();
		assert_eq!(url.join("matriculas/facultades").unwrap().as_str(), "http://localhost:8080/api/v1/matriculas/facultades");
	}

	#[test]
	fn base_url_rejects_non_http_schemes() {
		assert!(parse_base_url("ftp://example.com").is_err());
		assert!(parse_base_url("not a url").is_err());
	}

	#[test]
	fn tracing_follows_build_profile() {
		let config = ClientConfig::new(DEFAULT_BASE_URL).unwrap().with_trace(true);
		assert_eq!(config.tracing_enabled(), cfg!(debug_assertions));
	}
}
