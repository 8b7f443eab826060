use std::fs;
use std::path::Path;

use log::debug;

use crate::nbt::compression::{compress, decompress};
use crate::nbt::decode::decode_root;
use crate::nbt::encode::encode_root;
use crate::nbt::render::render_root;
use crate::nbt::{Compound, Compression, DecodeOptions, DocFlags, NbtString, Result};

/// Named root compound plus the flags used to read and write it.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
	/// Root entry name, conventionally empty.
	pub name: NbtString,
	/// Root compound.
	pub root: Compound,
	/// Compression and render configuration.
	pub flags: DocFlags,
}

impl Document {
	/// Wrap `root` with an empty name and no flags.
	pub fn new(root: Compound) -> Self {
		Self {
			name: NbtString::new(),
			root,
			flags: DocFlags::empty(),
		}
	}

	/// Decode raw document bytes, inflating first when `flags` select a compression.
	pub fn from_bytes(raw: Vec<u8>, flags: DocFlags) -> Result<Self> {
		Self::from_bytes_with(raw, flags, &DecodeOptions::default())
	}

	/// [`Document::from_bytes`] with explicit decode limits.
	pub fn from_bytes_with(raw: Vec<u8>, flags: DocFlags, opt: &DecodeOptions) -> Result<Self> {
		let bytes = decompress(raw, flags.compression())?;
		let (name, root) = decode_root(&bytes, opt)?;
		Ok(Self { name, root, flags })
	}

	/// Read and decode a document from disk using `flags`.
	pub fn open(path: impl AsRef<Path>, flags: DocFlags) -> Result<Self> {
		let path = path.as_ref();
		let raw = fs::read(path)?;
		debug!("read {} bytes from {}", raw.len(), path.display());
		Self::from_bytes(raw, flags)
	}

	/// Read a document from disk, choosing the compression flag from its magic bytes.
	pub fn open_detect(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let raw = fs::read(path)?;
		let compression = Compression::detect(&raw);
		debug!("read {} bytes from {} (detected {})", raw.len(), path.display(), compression.as_str());
		Self::from_bytes(raw, DocFlags::empty().with_compression(compression))
	}

	/// Compression mode selected by this document's flags.
	pub fn compression(&self) -> Compression {
		self.flags.compression()
	}

	/// Encode and, when flagged, compress the document.
	pub fn to_bytes(&self) -> Result<Vec<u8>> {
		let bytes = encode_root(&self.name, &self.root)?;
		compress(bytes, self.flags.compression())
	}

	/// Encode and write the document to disk.
	pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
		let path = path.as_ref();
		let bytes = self.to_bytes()?;
		fs::write(path, &bytes)?;
		debug!("wrote {} bytes to {}", bytes.len(), path.display());
		Ok(())
	}

	/// Render the root in the style selected by this document's flags.
	pub fn render(&self) -> String {
		render_root(&self.name, &self.root, self.flags.render_style())
	}
}

#[cfg(test)]
mod tests;
