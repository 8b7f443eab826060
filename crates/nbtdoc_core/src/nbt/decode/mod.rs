use log::trace;

use crate::nbt::bytes::Cursor;
use crate::nbt::{Compound, List, NbtError, NbtString, Result, Tag, Value};

/// Upper bound on elements reserved up front from a wire length.
const MAX_PREALLOC: usize = 1024;

/// Runtime limits and behavior switches for wire decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum nesting depth of compounds and lists.
	pub max_depth: u32,
	/// Accept bytes left over after the root compound.
	pub allow_trailing: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 512,
			allow_trailing: true,
		}
	}
}

impl DecodeOptions {
	/// Preset that rejects anything after the root compound.
	pub fn strict() -> Self {
		Self {
			allow_trailing: false,
			..Self::default()
		}
	}
}

/// Decode uncompressed wire bytes into the root name and root compound.
///
/// Any other root tag fails with `RootNotCompound`.
pub fn decode_root(bytes: &[u8], opt: &DecodeOptions) -> Result<(NbtString, Compound)> {
	trace!("decoding {} bytes", bytes.len());
	let mut cursor = Cursor::new(bytes);
	let tag = read_tag(&mut cursor)?;
	if tag != Tag::Compound {
		return Err(NbtError::RootNotCompound { tag });
	}

	let name = read_string(&mut cursor)?;
	let root = read_compound(&mut cursor, opt, 0)?;

	if !opt.allow_trailing && cursor.remaining() > 0 {
		return Err(NbtError::TrailingBytes {
			at: cursor.pos(),
			rem: cursor.remaining(),
		});
	}

	Ok((name, root))
}

/// Decode one untagged payload of kind `tag` occupying all of `bytes`.
pub fn decode_payload(tag: Tag, bytes: &[u8], opt: &DecodeOptions) -> Result<Value> {
	let mut cursor = Cursor::new(bytes);
	let value = read_payload(&mut cursor, tag, opt, 0)?;
	if cursor.remaining() > 0 {
		return Err(NbtError::TrailingBytes {
			at: cursor.pos(),
			rem: cursor.remaining(),
		});
	}
	Ok(value)
}

fn read_tag(cursor: &mut Cursor<'_>) -> Result<Tag> {
	let at = cursor.pos();
	let byte = cursor.read_u8()?;
	Tag::from_byte(byte).ok_or(NbtError::InvalidTag { tag: byte, at })
}

fn read_string(cursor: &mut Cursor<'_>) -> Result<NbtString> {
	let len = usize::from(cursor.read_u16()?);
	Ok(NbtString::from(cursor.read_exact(len)?))
}

fn read_payload(cursor: &mut Cursor<'_>, tag: Tag, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	Ok(match tag {
		Tag::End => Value::End,
		Tag::Byte => Value::Byte(cursor.read_i8()?),
		Tag::Short => Value::Short(cursor.read_i16()?),
		Tag::Int => Value::Int(cursor.read_i32()?),
		Tag::Long => Value::Long(cursor.read_i64()?),
		Tag::Float => Value::Float(cursor.read_f32()?),
		Tag::Double => Value::Double(cursor.read_f64()?),
		Tag::ByteArray => {
			let len = cursor.read_len(1)?;
			let raw = cursor.read_exact(len)?;
			Value::ByteArray(raw.iter().map(|byte| *byte as i8).collect())
		}
		Tag::String => Value::String(read_string(cursor)?),
		Tag::List => Value::List(read_list(cursor, opt, depth)?),
		Tag::Compound => Value::Compound(read_compound(cursor, opt, depth)?),
		Tag::IntArray => {
			let len = cursor.read_len(4)?;
			let mut items = Vec::with_capacity(len.min(MAX_PREALLOC));
			for _ in 0..len {
				items.push(cursor.read_i32()?);
			}
			Value::IntArray(items)
		}
		Tag::LongArray => {
			let len = cursor.read_len(8)?;
			let mut items = Vec::with_capacity(len.min(MAX_PREALLOC));
			for _ in 0..len {
				items.push(cursor.read_i64()?);
			}
			Value::LongArray(items)
		}
	})
}

fn enter(depth: u32, opt: &DecodeOptions) -> Result<u32> {
	if depth >= opt.max_depth {
		return Err(NbtError::DecodeDepthExceeded { max_depth: opt.max_depth });
	}
	Ok(depth + 1)
}

fn read_list(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: u32) -> Result<List> {
	let depth = enter(depth, opt)?;
	let at = cursor.pos();
	let element = read_tag(cursor)?;

	if element == Tag::End {
		let len_at = cursor.pos();
		let len = cursor.read_i32()?;
		if len < 0 {
			return Err(NbtError::NegativeLength { len, at: len_at });
		}
		if len > 0 {
			return Err(NbtError::EndListNotEmpty { len, at });
		}
		return Ok(List::new());
	}

	let len = cursor.read_len(element.min_payload_size())?;
	let mut items = Vec::with_capacity(len.min(MAX_PREALLOC));
	for _ in 0..len {
		items.push(read_payload(cursor, element, opt, depth)?);
	}
	Ok(List::from_parts(element, items))
}

fn read_compound(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: u32) -> Result<Compound> {
	let depth = enter(depth, opt)?;
	let mut out = Compound::new();
	loop {
		let tag = read_tag(cursor)?;
		if tag == Tag::End {
			break;
		}

		let name = read_string(cursor)?;
		let value = read_payload(cursor, tag, opt, depth)?;
		out.insert(name, value);
	}
	Ok(out)
}
