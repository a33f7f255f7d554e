use matr::{Client, FacultadPatch, NewFacultad};
use serde_json::{Value, json};

use super::no_fields;
use crate::cli::{FacultadAction, FacultadPatchArgs, NewFacultadArgs};
use crate::error::Result;

pub(super) async fn run(client: &Client, action: FacultadAction) -> Result<Value> {
	let facultades = client.gateway().facultades();

	match action {
		FacultadAction::List => Ok(serde_json::to_value(facultades.list().await?)?),
		FacultadAction::Get { id } => Ok(serde_json::to_value(facultades.get(id).await?)?),
		FacultadAction::Create(args) => Ok(serde_json::to_value(facultades.create(&args.into()).await?)?),
		FacultadAction::Update { id, fields } => {
			let patch = FacultadPatch::from(fields);
			if patch.is_empty() {
				return Err(no_fields());
			}
			Ok(serde_json::to_value(facultades.update(id, &patch).await?)?)
		}
		FacultadAction::Delete { id } => {
			facultades.delete(id).await?;
			Ok(json!({ "deleted": id }))
		}
	}
}

impl From<NewFacultadArgs> for NewFacultad {
	fn from(args: NewFacultadArgs) -> Self {
		NewFacultad {
			nombre: args.nombre,
			descripcion: args.descripcion,
			ubicacion: args.ubicacion,
			decano: args.decano,
			activo: args.activo,
		}
	}
}

impl From<FacultadPatchArgs> for FacultadPatch {
	fn from(args: FacultadPatchArgs) -> Self {
		FacultadPatch {
			nombre: args.nombre,
			descripcion: args.descripcion,
			ubicacion: args.ubicacion,
			decano: args.decano,
			activo: args.activo,
		}
	}
}
