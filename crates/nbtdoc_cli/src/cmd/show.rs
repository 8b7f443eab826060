use std::path::PathBuf;

use nbtdoc::nbt::{Document, Result, render_root};

use crate::cmd::util::StyleArg;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long, value_enum, default_value_t = StyleArg::Snbt)]
	pub style: StyleArg,
}

/// Print the root compound in the selected style.
pub fn run(args: Args) -> Result<()> {
	let Args { path, style } = args;

	let doc = Document::open_detect(&path)?;
	println!("{}", render_root(&doc.name, &doc.root, style.into()));
	Ok(())
}
