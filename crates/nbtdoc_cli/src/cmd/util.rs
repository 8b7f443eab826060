use nbtdoc::nbt::{RenderStyle, Result};

/// Render style selector shared by `show` and `get`.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum StyleArg {
	#[default]
	Snbt,
	Json,
	Tree,
}

impl From<StyleArg> for RenderStyle {
	fn from(value: StyleArg) -> Self {
		match value {
			StyleArg::Snbt => Self::Snbt,
			StyleArg::Json => Self::Json,
			StyleArg::Tree => Self::Tree,
		}
	}
}

/// Print `payload` as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload).map_err(std::io::Error::from)?;
	println!("{text}");
	Ok(())
}
