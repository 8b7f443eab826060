#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "nbtdoc", about = "NBT document inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print compression, root name, and node counts.
	Info(cmd::info::Args),
	/// Render the whole document.
	Show(cmd::show::Args),
	/// Render the value at a path such as `Level.Sections[0].Y` or `"my key".x`.
	Get(cmd::get::Args),
	/// Re-encode a document with different framing.
	Convert(cmd::convert::Args),
}

fn main() {
	env_logger::init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> nbtdoc::nbt::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Show(args) => cmd::show::run(args),
		Commands::Get(args) => cmd::get::run(args),
		Commands::Convert(args) => cmd::convert::run(args),
	}
}
