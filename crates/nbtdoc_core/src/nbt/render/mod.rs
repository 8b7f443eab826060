//! One-way debug renderings of NBT trees. None of these are parsed back.

use std::fmt::{self, Write as _};

use crate::nbt::{Compound, List, NbtString, Tag, Value};

/// Output flavor for diagnostic rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
	/// Compact SNBT-like text with kind suffixes.
	#[default]
	Snbt,
	/// Pretty-printed JSON.
	Json,
	/// Indented `TAG_*` tree.
	Tree,
}

impl RenderStyle {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Snbt => "snbt",
			Self::Json => "json",
			Self::Tree => "tree",
		}
	}
}

/// Render `value` in `style`. `name` labels the top node in tree output.
pub fn render(name: Option<&NbtString>, value: &Value, style: RenderStyle) -> String {
	match style {
		RenderStyle::Snbt => value.to_string(),
		RenderStyle::Json => format!("{:#}", to_json(value)),
		RenderStyle::Tree => Tree::Node { name, value }.to_string(),
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::End => Ok(()),
			Self::Byte(v) => write!(f, "{v}B"),
			Self::Short(v) => write!(f, "{v}S"),
			Self::Int(v) => write!(f, "{v}"),
			Self::Long(v) => write!(f, "{v}L"),
			Self::Float(v) => write!(f, "{v:?}F"),
			Self::Double(v) => write!(f, "{v:?}"),
			Self::ByteArray(items) => write_array(f, "B", items.iter().map(|v| format!("{v}B"))),
			Self::String(text) => write_quoted(f, text),
			Self::List(list) => fmt::Display::fmt(list, f),
			Self::Compound(compound) => fmt::Display::fmt(compound, f),
			Self::IntArray(items) => write_array(f, "I", items.iter().map(|v| v.to_string())),
			Self::LongArray(items) => write_array(f, "L", items.iter().map(|v| format!("{v}L"))),
		}
	}
}

impl fmt::Display for List {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_char('[')?;
		for (idx, item) in self.iter().enumerate() {
			if idx > 0 {
				f.write_char(',')?;
			}
			write!(f, "{item}")?;
		}
		f.write_char(']')
	}
}

impl fmt::Display for Compound {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_char('{')?;
		for (idx, (name, value)) in self.iter().enumerate() {
			if idx > 0 {
				f.write_str(",\n")?;
			}
			write!(f, "{name}:{value}")?;
		}
		f.write_char('}')
	}
}

fn write_array(f: &mut fmt::Formatter<'_>, prefix: &str, items: impl Iterator<Item = String>) -> fmt::Result {
	write!(f, "[{prefix};")?;
	for (idx, item) in items.enumerate() {
		if idx > 0 {
			f.write_char(',')?;
		}
		f.write_str(&item)?;
	}
	f.write_char(']')
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &NbtString) -> fmt::Result {
	f.write_char('"')?;
	for ch in text.to_string_lossy().chars() {
		match ch {
			'"' => f.write_str("\\\"")?,
			'\\' => f.write_str("\\\\")?,
			c => f.write_char(c)?,
		}
	}
	f.write_char('"')
}

/// Render a document root compound in `style`.
pub fn render_root(name: &NbtString, root: &Compound, style: RenderStyle) -> String {
	match style {
		RenderStyle::Snbt => root.to_string(),
		RenderStyle::Json => format!("{:#}", compound_json(root)),
		RenderStyle::Tree => Tree::Root { name, root }.to_string(),
	}
}

/// Convert a tree to JSON. Non-finite floats become `null`.
pub fn to_json(value: &Value) -> serde_json::Value {
	use serde_json::Value as Json;

	match value {
		Value::End => Json::Null,
		Value::Byte(v) => Json::from(*v),
		Value::Short(v) => Json::from(*v),
		Value::Int(v) => Json::from(*v),
		Value::Long(v) => Json::from(*v),
		Value::Float(v) => float_json(f64::from(*v)),
		Value::Double(v) => float_json(*v),
		Value::ByteArray(items) => Json::Array(items.iter().map(|v| Json::from(*v)).collect()),
		Value::String(text) => Json::String(text.to_string_lossy().into_owned()),
		Value::List(list) => Json::Array(list.iter().map(to_json).collect()),
		Value::Compound(compound) => compound_json(compound),
		Value::IntArray(items) => Json::Array(items.iter().map(|v| Json::from(*v)).collect()),
		Value::LongArray(items) => Json::Array(items.iter().map(|v| Json::from(*v)).collect()),
	}
}

fn compound_json(compound: &Compound) -> serde_json::Value {
	serde_json::Value::Object(
		compound
			.iter()
			.map(|(name, value)| (name.to_string_lossy().into_owned(), to_json(value)))
			.collect(),
	)
}

fn float_json(value: f64) -> serde_json::Value {
	serde_json::Number::from_f64(value).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

/// Top of an indented `TAG_*` rendering.
enum Tree<'a> {
	Node { name: Option<&'a NbtString>, value: &'a Value },
	Root { name: &'a NbtString, root: &'a Compound },
}

impl fmt::Display for Tree<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match *self {
			Self::Node { name, value } => write_tree(f, name, value, 0),
			Self::Root { name, root } => write_compound_tree(f, Tag::Compound, Some(name), root, 0),
		}
	}
}

fn write_label(f: &mut impl fmt::Write, tag: Tag, name: Option<&NbtString>, indent: usize) -> fmt::Result {
	write_indent(f, indent)?;
	match name {
		Some(name) => write!(f, "{tag}('{name}')"),
		None => write!(f, "{tag}(None)"),
	}
}

fn write_indent(f: &mut impl fmt::Write, indent: usize) -> fmt::Result {
	for _ in 0..indent {
		f.write_str("  ")?;
	}
	Ok(())
}

fn write_tree(f: &mut impl fmt::Write, name: Option<&NbtString>, value: &Value, indent: usize) -> fmt::Result {
	if let Value::Compound(compound) = value {
		return write_compound_tree(f, value.tag(), name, compound, indent);
	}
	if value.is_end() {
		write_indent(f, indent)?;
		return writeln!(f, "{}", Tag::End);
	}

	write_label(f, value.tag(), name, indent)?;
	match value {
		Value::ByteArray(items) => writeln!(f, ": [{} bytes]", items.len()),
		Value::IntArray(items) => writeln!(f, ": [{} ints]", items.len()),
		Value::LongArray(items) => writeln!(f, ": [{} longs]", items.len()),
		Value::String(text) => writeln!(f, ": '{text}'"),
		Value::List(list) => {
			writeln!(f, ": {} entries of {}", list.len(), list.element_tag())?;
			write_indent(f, indent)?;
			f.write_str("{\n")?;
			for item in list {
				write_tree(f, None, item, indent + 1)?;
			}
			write_indent(f, indent)?;
			f.write_str("}\n")
		}
		scalar => writeln!(f, ": {scalar}"),
	}
}

fn write_compound_tree(
	f: &mut impl fmt::Write,
	tag: Tag,
	name: Option<&NbtString>,
	compound: &Compound,
	indent: usize,
) -> fmt::Result {
	write_label(f, tag, name, indent)?;
	writeln!(f, ": {} entries", compound.len())?;
	write_indent(f, indent)?;
	f.write_str("{\n")?;
	for (child_name, child) in compound {
		write_tree(f, Some(child_name), child, indent + 1)?;
	}
	write_indent(f, indent)?;
	f.write_str("}\n")
}
