use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "matr")]
#[command(about = "Sistema de Matrículas - faculty and program administration from the command line")]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Output format
	#[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
	pub format: OutputFormat,

	/// API root, e.g. http://localhost:8080/api/v1 (overrides MATR_API_BASE_URL)
	#[arg(long, global = true, value_name = "URL")]
	pub base_url: Option<String>,

	/// Directory holding the persisted session (overrides MATR_STATE_DIR)
	#[arg(long, global = true, value_name = "DIR")]
	pub state_dir: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Sign in, register, sign out, inspect the session
	Auth {
		#[command(subcommand)]
		action: AuthAction,
	},

	/// Manage faculties
	#[command(alias = "fac")]
	Facultades {
		#[command(subcommand)]
		action: FacultadAction,
	},

	/// Manage academic programs
	#[command(alias = "car")]
	Carreras {
		#[command(subcommand)]
		action: CarreraAction,
	},
}

#[derive(Subcommand, Debug)]
pub enum AuthAction {
	/// Exchange email and password for a session
	Login {
		#[arg(long)]
		email: String,
		#[arg(long)]
		password: String,
	},
	/// Create an account and sign in
	Register {
		#[arg(long)]
		full_name: String,
		#[arg(long)]
		email: String,
		#[arg(long)]
		password: String,
	},
	/// Forget the persisted session
	Logout,
	/// Show the restored session
	Status,
}

#[derive(Subcommand, Debug)]
pub enum FacultadAction {
	List,
	Get { id: u64 },
	Create(NewFacultadArgs),
	Update {
		id: u64,
		#[command(flatten)]
		fields: FacultadPatchArgs,
	},
	Delete { id: u64 },
}

#[derive(Args, Debug)]
pub struct NewFacultadArgs {
	#[arg(long)]
	pub nombre: String,
	#[arg(long)]
	pub descripcion: Option<String>,
	#[arg(long)]
	pub ubicacion: Option<String>,
	#[arg(long)]
	pub decano: Option<String>,
	#[arg(long)]
	pub activo: Option<bool>,
}

#[derive(Args, Debug)]
pub struct FacultadPatchArgs {
	#[arg(long)]
	pub nombre: Option<String>,
	#[arg(long)]
	pub descripcion: Option<String>,
	#[arg(long)]
	pub ubicacion: Option<String>,
	#[arg(long)]
	pub decano: Option<String>,
	#[arg(long)]
	pub activo: Option<bool>,
}

#[derive(Subcommand, Debug)]
pub enum CarreraAction {
	List {
		/// Only programs of this faculty
		#[arg(long, value_name = "ID")]
		facultad: Option<u64>,
	},
	Get { id: u64 },
	Create(NewCarreraArgs),
	Update {
		id: u64,
		#[command(flatten)]
		fields: CarreraPatchArgs,
	},
	Delete { id: u64 },
}

#[derive(Args, Debug)]
pub struct NewCarreraArgs {
	#[arg(long, value_name = "ID")]
	pub facultad: u64,
	#[arg(long)]
	pub nombre: String,
	#[arg(long)]
	pub descripcion: Option<String>,
	/// Duration in semesters
	#[arg(long, value_name = "N")]
	pub duracion: u32,
	#[arg(long)]
	pub titulo: Option<String>,
	#[arg(long)]
	pub activo: Option<bool>,
}

#[derive(Args, Debug)]
pub struct CarreraPatchArgs {
	#[arg(long, value_name = "ID")]
	pub facultad: Option<u64>,
	#[arg(long)]
	pub nombre: Option<String>,
	#[arg(long)]
	pub descripcion: Option<String>,
	#[arg(long, value_name = "N")]
	pub duracion: Option<u32>,
	#[arg(long)]
	pub titulo: Option<String>,
	#[arg(long)]
	pub activo: Option<bool>,
}
