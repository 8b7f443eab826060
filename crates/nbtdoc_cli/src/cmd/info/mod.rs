use std::collections::BTreeMap;
use std::path::PathBuf;

use nbtdoc::nbt::{Compound, Document, Result, Tag, Value};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print framing, root name, and per-kind node counts.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let doc = Document::open_detect(&path)?;
	let kinds = count_kinds(&doc.root);

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			compression: doc.compression().as_str(),
			root_name: doc.name.to_string_lossy().into_owned(),
			entries: doc.root.len(),
			kinds: kinds.iter().map(|(tag, count)| (tag.as_str(), *count)).collect(),
		};
		return emit_json(&payload);
	}

	println!("path: {}", path.display());
	println!("compression: {}", doc.compression().as_str());
	println!("root_name: {:?}", doc.name);
	println!("entries: {}", doc.root.len());
	println!("kinds:");
	for (tag, count) in kinds {
		println!("  {}: {}", tag.as_str(), count);
	}

	Ok(())
}

/// Count every node below `root` by kind, including `root` itself.
fn count_kinds(root: &Compound) -> BTreeMap<Tag, usize> {
	let mut counts = BTreeMap::new();
	*counts.entry(Tag::Compound).or_insert(0) += 1;
	for value in root.values() {
		count_value(value, &mut counts);
	}
	counts
}

fn count_value(value: &Value, counts: &mut BTreeMap<Tag, usize>) {
	*counts.entry(value.tag()).or_insert(0) += 1;
	match value {
		Value::List(list) => {
			for item in list {
				count_value(item, counts);
			}
		}
		Value::Compound(compound) => {
			for item in compound.values() {
				count_value(item, counts);
			}
		}
		_ => {}
	}
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	compression: &'static str,
	root_name: String,
	entries: usize,
	kinds: BTreeMap<&'static str, usize>,
}

#[cfg(test)]
mod tests;
