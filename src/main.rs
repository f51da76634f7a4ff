#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "blendexpl", about = "Schema-driven .blend container explorer")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Info(cmd::info::Args),
	Dna {
		path: PathBuf,
		#[arg(long = "struct")]
		struct_name: Option<String>,
	},
	Blocks {
		path: PathBuf,
	},
	Scene {
		path: PathBuf,
	},
	Armature {
		path: PathBuf,
	},
	Mesh {
		path: PathBuf,
	},
	Walk(cmd::walk::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> blendexpl::blend::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Dna { path, struct_name } => cmd::dna::run(path, struct_name),
		Commands::Blocks { path } => cmd::blocks::run(path),
		Commands::Scene { path } => cmd::scene::run(path),
		Commands::Armature { path } => cmd::armature::run(path),
		Commands::Mesh { path } => cmd::mesh::run(path),
		Commands::Walk(args) => cmd::walk::run(args),
	}
}
