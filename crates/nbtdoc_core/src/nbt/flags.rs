use bitflags::bitflags;

use crate::nbt::{Compression, RenderStyle};

bitflags! {
	/// Open/write configuration carried by a document, not by its tree.
	///
	/// An empty set means raw bytes, no compression, SNBT rendering.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct DocFlags: u32 {
		/// gzip-inflate on read, gzip-deflate on write.
		const USE_GZIP = 0x0001;
		/// zlib framing, the reserved alternate compression.
		const USE_ZIP = 0x0002;
		/// Render diagnostics as SNBT.
		const SNBT_STR = 0x0010;
		/// Render diagnostics as JSON.
		const JSON_STR = 0x0020;
		/// Render diagnostics as an indented tag tree.
		const TREE_STR = 0x0040;
	}
}

impl DocFlags {
	/// Framing selected by these flags; gzip wins when both are set.
	pub fn compression(self) -> Compression {
		if self.contains(Self::USE_GZIP) {
			Compression::Gzip
		} else if self.contains(Self::USE_ZIP) {
			Compression::Zlib
		} else {
			Compression::None
		}
	}

	/// Render flavor selected by these flags.
	pub fn render_style(self) -> RenderStyle {
		if self.contains(Self::JSON_STR) {
			RenderStyle::Json
		} else if self.contains(Self::TREE_STR) {
			RenderStyle::Tree
		} else {
			RenderStyle::Snbt
		}
	}

	/// Flags with the compression bits replaced to select `mode`.
	pub fn with_compression(self, mode: Compression) -> Self {
		let base = self.difference(Self::USE_GZIP | Self::USE_ZIP);
		match mode {
			Compression::None => base,
			Compression::Gzip => base | Self::USE_GZIP,
			Compression::Zlib => base | Self::USE_ZIP,
		}
	}
}
