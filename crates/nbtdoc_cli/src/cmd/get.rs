use std::path::PathBuf;

use nbtdoc::nbt::{Document, NbtPath, NbtString, PathStep, Result, render};

use crate::cmd::util::StyleArg;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(value_name = "PATH")]
	pub path_expr: String,
	#[arg(long, value_enum, default_value_t = StyleArg::Snbt)]
	pub style: StyleArg,
}

/// Resolve a path expression and print the value it selects.
pub fn run(args: Args) -> Result<()> {
	let Args { path, path_expr, style } = args;

	let field = NbtPath::parse(&path_expr)?;
	let doc = Document::open_detect(&path)?;
	let value = doc.root.at_path(&field)?;

	let label = field.steps.iter().rev().find_map(|step| match step {
		PathStep::Key(key) => Some(NbtString::from(key)),
		PathStep::Index(_) => None,
	});
	println!("{}", render(label.as_ref(), value, style.into()));
	Ok(())
}
