//! Organizational unit (`facultad`) records.

use serde::{Deserialize, Serialize};

/// A faculty as returned by `/matriculas/facultades`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facultad {
	#[serde(alias = "facultadId")]
	pub id: u64,
	pub nombre: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub descripcion: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub ubicacion: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub decano: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub activo: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fecha_registro: Option<String>,
}

/// Body of `POST /matriculas/facultades`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFacultad {
	pub nombre: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub descripcion: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub ubicacion: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub decano: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub activo: Option<bool>,
}

/// Sparse body of `PUT /matriculas/facultades/{id}`.
///
/// Only the fields that are `Some` are serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultadPatch {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub nombre: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub descripcion: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub ubicacion: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub decano: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub activo: Option<bool>,
}

impl FacultadPatch {
	pub fn is_empty(&self) -> bool {
		self == &Self::default()
	}
}
