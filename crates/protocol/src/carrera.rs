//! Program (`carrera`) records. Every program belongs to one faculty.

use serde::{Deserialize, Serialize};

/// A program as returned by `/matriculas/carreras`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carrera {
	#[serde(alias = "carreraId")]
	pub id: u64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub facultad_id: Option<u64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub facultad_nombre: Option<String>,
	pub nombre: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub descripcion: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub duracion_semestres: Option<u32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub titulo_otorgado: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub activo: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fecha_registro: Option<String>,
}

/// Body of `POST /matriculas/carreras`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCarrera {
	pub facultad_id: u64,
	pub nombre: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub descripcion: Option<String>,
	pub duracion_semestres: u32,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub titulo_otorgado: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub activo: Option<bool>,
}

/// Sparse body of `PUT /matriculas/carreras/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarreraPatch {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub facultad_id: Option<u64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub nombre: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub descripcion: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub duracion_semestres: Option<u32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub titulo_otorgado: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub activo: Option<bool>,
}

impl CarreraPatch {
	pub fn is_empty(&self) -> bool {
		self == &Self::default()
	}
}
