#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;
mod error;

#[derive(Parser)]
#[command(name = "ftypes", about = "Parse, compare, and slice protocol field values")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// List registered field types.
	Types(cmd::types::Args),
	/// Parse a literal and render it back.
	Parse(cmd::parse::Args),
	/// Order and intersect two literals of one type.
	Cmp(cmd::cmp::Args),
	/// Extract a byte range from a literal's storage.
	Slice(cmd::slice::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> error::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Types(args) => cmd::types::run(args),
		Commands::Parse(args) => cmd::parse::run(args),
		Commands::Cmp(args) => cmd::cmp::run(args),
		Commands::Slice(args) => cmd::slice::run(args),
	}
}
