use reqwest::Method;
use serde::de::IgnoredAny;

use super::{Gateway, payload};
use crate::error::Result;
use matr_protocol::{Carrera, CarreraPatch, NewCarrera};

pub const CARRERAS_PATH: &str = "matriculas/carreras";

/// Facade over `/matriculas/carreras`.
#[derive(Debug, Clone, Copy)]
pub struct Carreras<'a> {
	gateway: &'a Gateway,
}

impl<'a> Carreras<'a> {
	pub(super) fn new(gateway: &'a Gateway) -> Self {
		Self { gateway }
	}

	pub async fn list(&self) -> Result<Vec<Carrera>> {
		Ok(self.gateway.call(Method::GET, CARRERAS_PATH, None).await?.unwrap_or_default())
	}

	/// Programs of one faculty. The parent reference is validated server-side.
	pub async fn list_by_facultad(&self, facultad_id: u64) -> Result<Vec<Carrera>> {
		let path = format!("{CARRERAS_PATH}/facultad/{facultad_id}");
		Ok(self.gateway.call(Method::GET, &path, None).await?.unwrap_or_default())
	}

	pub async fn get(&self, id: u64) -> Result<Option<Carrera>> {
		self.gateway.call(Method::GET, &item_path(id), None).await
	}

	pub async fn create(&self, data: &NewCarrera) -> Result<Option<Carrera>> {
		self.gateway.call(Method::POST, CARRERAS_PATH, payload(data)?).await
	}

	/// Sends exactly the fields present in `patch`.
	pub async fn update(&self, id: u64, patch: &CarreraPatch) -> Result<Option<Carrera>> {
		self.gateway.call(Method::PUT, &item_path(id), payload(patch)?).await
	}

	pub async fn delete(&self, id: u64) -> Result<()> {
		self.gateway.call::<IgnoredAny>(Method::DELETE, &item_path(id), None).await?;
		Ok(())
	}
}

fn item_path(id: u64) -> String {
	format!("{CARRERAS_PATH}/{id}")
}
