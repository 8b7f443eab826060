use std::io::{Read, Write};

use flate2::Compression as Level;
use flate2::read::{GzDecoder, ZlibDecoder};
use flate2::write::{GzEncoder, ZlibEncoder};
use log::debug;

use crate::nbt::{NbtError, Result};

const MAX_DECOMPRESSED_BYTES: usize = 512 * 1024 * 1024;
/// gzip member magic.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Whole-document framing applied around the encoded tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Raw uncompressed stream.
	None,
	/// gzip-framed DEFLATE stream.
	Gzip,
	/// zlib-framed DEFLATE stream.
	Zlib,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Gzip => "gzip",
			Self::Zlib => "zlib",
		}
	}

	/// Guess framing from leading magic bytes.
	pub fn detect(raw: &[u8]) -> Self {
		if raw.starts_with(&GZIP_MAGIC) {
			return Self::Gzip;
		}
		if is_zlib_header(raw) {
			return Self::Zlib;
		}
		Self::None
	}
}

/// Inflate `raw` according to `mode`; `None` passes bytes through.
pub fn decompress(raw: Vec<u8>, mode: Compression) -> Result<Vec<u8>> {
	let out = match mode {
		Compression::None => return Ok(raw),
		Compression::Gzip => read_all(GzDecoder::new(raw.as_slice()))?,
		Compression::Zlib => read_all(ZlibDecoder::new(raw.as_slice()))?,
	};
	debug!("inflated {} {} bytes to {} bytes", mode.as_str(), raw.len(), out.len());
	Ok(out)
}

/// Deflate `bytes` according to `mode`; `None` passes bytes through.
pub fn compress(bytes: Vec<u8>, mode: Compression) -> Result<Vec<u8>> {
	let out = match mode {
		Compression::None => return Ok(bytes),
		Compression::Gzip => {
			let mut encoder = GzEncoder::new(Vec::new(), Level::default());
			encoder.write_all(&bytes).map_err(NbtError::Deflate)?;
			encoder.finish().map_err(NbtError::Deflate)?
		}
		Compression::Zlib => {
			let mut encoder = ZlibEncoder::new(Vec::new(), Level::default());
			encoder.write_all(&bytes).map_err(NbtError::Deflate)?;
			encoder.finish().map_err(NbtError::Deflate)?
		}
	};
	debug!("deflated {} bytes to {} {} bytes", bytes.len(), out.len(), mode.as_str());
	Ok(out)
}

fn read_all(mut decoder: impl Read) -> Result<Vec<u8>> {
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf).map_err(NbtError::Inflate)?;
		if read == 0 {
			break;
		}

		if out.len() + read > MAX_DECOMPRESSED_BYTES {
			return Err(NbtError::DecompressedTooLarge { limit: MAX_DECOMPRESSED_BYTES });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}

fn is_zlib_header(raw: &[u8]) -> bool {
	let [cmf, flg, ..] = raw else {
		return false;
	};
	cmf & 0x0f == 8 && cmf >> 4 <= 7 && (u16::from(*cmf) << 8 | u16::from(*flg)) % 31 == 0
}

#[cfg(test)]
mod tests;
