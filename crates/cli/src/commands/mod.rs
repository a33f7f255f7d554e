mod auth;
mod carreras;
mod facultades;

use matr::{Client, ClientConfig};
use serde_json::Value;
use tracing::debug;

use crate::cli::{AuthAction, CarreraAction, Cli, Commands, FacultadAction};
use crate::error::{CliError, Result};
use crate::output::{OutputFormat, ResultBuilder, print_result};

/// Runs one command and prints its envelope.
///
/// Each invocation restores the persisted session before doing anything else,
/// the same way a page load would.
pub async fn dispatch(cli: Cli) -> Result<()> {
	let format = cli.format;
	let builder = ResultBuilder::new(command_name(&cli.command));

	let outcome = match open_client(&cli) {
		Ok(client) => execute(&client, cli.command).await,
		Err(err) => Err(err),
	};

	finish(builder, outcome, format)
}

fn open_client(cli: &Cli) -> Result<Client> {
	let mut config = ClientConfig::from_env()?;
	if let Some(url) = &cli.base_url {
		config = config.with_base_url(url)?;
	}
	if let Some(dir) = &cli.state_dir {
		config = config.with_state_dir(dir);
	}

	let client = Client::new(config)?;
	let phase = client.session().restore();
	debug!(target: "matr", %phase, base_url = %client.config().base_url, "session restored");
	Ok(client)
}

async fn execute(client: &Client, command: Commands) -> Result<Value> {
	match command {
		Commands::Auth { action } => auth::run(client, action).await,
		Commands::Facultades { action } => facultades::run(client, action).await,
		Commands::Carreras { action } => carreras::run(client, action).await,
	}
}

fn finish(builder: ResultBuilder<Value>, outcome: Result<Value>, format: OutputFormat) -> Result<()> {
	match outcome {
		Ok(data) => {
			print_result(&builder.data(data).build(), format);
			Ok(())
		}
		Err(err) => {
			let status = match &err {
				CliError::Api(api) => api.status(),
				_ => None,
			};
			let message = err.to_string();
			print_result(&builder.error(err.code(), message.clone(), status).build(), format);
			Err(CliError::Reported(message))
		}
	}
}

fn command_name(command: &Commands) -> &'static str {
	match command {
		Commands::Auth { action } => match action {
			AuthAction::Login { .. } => "auth.login",
			AuthAction::Register { .. } => "auth.register",
			AuthAction::Logout => "auth.logout",
			AuthAction::Status => "auth.status",
		},
		Commands::Facultades { action } => match action {
			FacultadAction::List => "facultades.list",
			FacultadAction::Get { .. } => "facultades.get",
			FacultadAction::Create(_) => "facultades.create",
			FacultadAction::Update { .. } => "facultades.update",
			FacultadAction::Delete { .. } => "facultades.delete",
		},
		Commands::Carreras { action } => match action {
			CarreraAction::List { .. } => "carreras.list",
			CarreraAction::Get { .. } => "carreras.get",
			CarreraAction::Create(_) => "carreras.create",
			CarreraAction::Update { .. } => "carreras.update",
			CarreraAction::Delete { .. } => "carreras.delete",
		},
	}
}

fn no_fields() -> CliError {
	CliError::InvalidInput("nothing to update: pass at least one field".into())
}
