use matr::{CarreraPatch, Client, NewCarrera};
use serde_json::{Value, json};

use super::no_fields;
use crate::cli::{CarreraAction, CarreraPatchArgs, NewCarreraArgs};
use crate::error::Result;

pub(super) async fn run(client: &Client, action: CarreraAction) -> Result<Value> {
	let carreras = client.gateway().carreras();

	match action {
		CarreraAction::List { facultad: Some(id) } => Ok(serde_json::to_value(carreras.list_by_facultad(id).await?)?),
		CarreraAction::List { facultad: None } => Ok(serde_json::to_value(carreras.list().await?)?),
		CarreraAction::Get { id } => Ok(serde_json::to_value(carreras.get(id).await?)?),
		CarreraAction::Create(args) => Ok(serde_json::to_value(carreras.create(&args.into()).await?)?),
		CarreraAction::Update { id, fields } => {
			let patch = CarreraPatch::from(fields);
			if patch.is_empty() {
				return Err(no_fields());
			}
			Ok(serde_json::to_value(carreras.update(id, &patch).await?)?)
		}
		CarreraAction::Delete { id } => {
			carreras.delete(id).await?;
			Ok(json!({ "deleted": id }))
		}
	}
}

impl From<NewCarreraArgs> for NewCarrera {
	fn from(args: NewCarreraArgs) -> Self {
		NewCarrera {
			facultad_id: args.facultad,
			nombre: args.nombre,
			descripcion: args.descripcion,
			duracion_semestres: args.duracion,
			titulo_otorgado: args.titulo,
			activo: args.activo,
		}
	}
}

impl From<CarreraPatchArgs> for CarreraPatch {
	fn from(args: CarreraPatchArgs) -> Self {
		CarreraPatch {
			facultad_id: args.facultad,
			nombre: args.nombre,
			descripcion: args.descripcion,
			duracion_semestres: args.duracion,
			titulo_otorgado: args.titulo,
			activo: args.activo,
		}
	}
}
