use std::path::PathBuf;

use log::info;
use nbtdoc::nbt::{Compression, Document, Result};

#[derive(clap::Args)]
pub struct Args {
	pub input: PathBuf,
	pub output: PathBuf,
	#[arg(long, conflicts_with_all = ["zlib", "raw"])]
	pub gzip: bool,
	#[arg(long, conflicts_with = "raw")]
	pub zlib: bool,
	#[arg(long)]
	pub raw: bool,
}

/// Decode `input` and write it to `output`, keeping the input framing unless overridden.
pub fn run(args: Args) -> Result<()> {
	let Args { input, output, gzip, zlib, raw } = args;

	let mut doc = Document::open_detect(&input)?;
	let from = doc.compression();
	let to = if gzip {
		Compression::Gzip
	} else if zlib {
		Compression::Zlib
	} else if raw {
		Compression::None
	} else {
		from
	};

	doc.flags = doc.flags.with_compression(to);
	doc.save(&output)?;
	info!("converted {} ({}) to {} ({})", input.display(), from.as_str(), output.display(), to.as_str());

	println!("wrote: {}", output.display());
	println!("compression: {}", to.as_str());
	Ok(())
}
