use reqwest::Method;
use serde::de::IgnoredAny;

use super::{Gateway, payload};
use crate::error::Result;
use matr_protocol::{Facultad, FacultadPatch, NewFacultad};

pub const FACULTADES_PATH: &str = "matriculas/facultades";

/// Facade over `/matriculas/facultades`.
#[derive(Debug, Clone, Copy)]
pub struct Facultades<'a> {
	gateway: &'a Gateway,
}

impl<'a> Facultades<'a> {
	pub(super) fn new(gateway: &'a Gateway) -> Self {
		Self { gateway }
	}

	pub async fn list(&self) -> Result<Vec<Facultad>> {
		Ok(self.gateway.call(Method::GET, FACULTADES_PATH, None).await?.unwrap_or_default())
	}

	pub async fn get(&self, id: u64) -> Result<Option<Facultad>> {
		self.gateway.call(Method::GET, &item_path(id), None).await
	}

	pub async fn create(&self, data: &NewFacultad) -> Result<Option<Facultad>> {
		self.gateway.call(Method::POST, FACULTADES_PATH, payload(data)?).await
	}

	/// Sends exactly the fields present in `patch`.
	pub async fn update(&self, id: u64, patch: &FacultadPatch) -> Result<Option<Facultad>> {
		self.gateway.call(Method::PUT, &item_path(id), payload(patch)?).await
	}

	pub async fn delete(&self, id: u64) -> Result<()> {
		self.gateway.call::<IgnoredAny>(Method::DELETE, &item_path(id), None).await?;
		Ok(())
	}
}

fn item_path(id: u64) -> String {
	format!("{FACULTADES_PATH}/{id}")
}
