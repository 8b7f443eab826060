use log::trace;

use crate::nbt::bytes::Writer;
use crate::nbt::{Compound, List, NbtError, NbtString, Result, Tag, Value};

/// Encode a named root compound into uncompressed wire bytes.
pub fn encode_root(name: &NbtString, root: &Compound) -> Result<Vec<u8>> {
	trace!("encoding root compound with {} entries", root.len());
	let mut out = Writer::new();
	out.put_u8(Tag::Compound.code());
	write_string(&mut out, name.as_bytes())?;
	write_compound(&mut out, root)?;
	Ok(out.into_bytes())
}

/// Encode one value's payload without a tag byte or name.
pub fn encode_payload(value: &Value) -> Result<Vec<u8>> {
	let mut out = Writer::new();
	write_payload(&mut out, value)?;
	Ok(out.into_bytes())
}

fn write_payload(out: &mut Writer, value: &Value) -> Result<()> {
	match value {
		Value::End => {}
		Value::Byte(v) => out.put_i8(*v),
		Value::Short(v) => out.put_i16(*v),
		Value::Int(v) => out.put_i32(*v),
		Value::Long(v) => out.put_i64(*v),
		Value::Float(v) => out.put_f32(*v),
		Value::Double(v) => out.put_f64(*v),
		Value::ByteArray(items) => {
			out.put_len(items.len())?;
			for item in items {
				out.put_i8(*item);
			}
		}
		Value::String(text) => write_string(out, text.as_bytes())?,
		Value::List(list) => write_list(out, list)?,
		Value::Compound(compound) => write_compound(out, compound)?,
		Value::IntArray(items) => {
			out.put_len(items.len())?;
			for item in items {
				out.put_i32(*item);
			}
		}
		Value::LongArray(items) => {
			out.put_len(items.len())?;
			for item in items {
				out.put_i64(*item);
			}
		}
	}
	Ok(())
}

fn write_string(out: &mut Writer, bytes: &[u8]) -> Result<()> {
	let len = u16::try_from(bytes.len()).map_err(|_| NbtError::StringTooLong { len: bytes.len() })?;
	out.put_u16(len);
	out.put_bytes(bytes);
	Ok(())
}

fn write_list(out: &mut Writer, list: &List) -> Result<()> {
	// Empty lists go out kind-less whatever kind they hold in memory.
	let element = if list.is_empty() { Tag::End } else { list.element_tag() };
	out.put_u8(element.code());
	out.put_len(list.len())?;
	for item in list {
		write_payload(out, item)?;
	}
	Ok(())
}

fn write_compound(out: &mut Writer, compound: &Compound) -> Result<()> {
	for (name, value) in compound {
		if value.is_end() {
			return Err(NbtError::EndInCompound {
				name: name.to_string_lossy().into_owned(),
			});
		}
		out.put_u8(value.tag().code());
		write_string(out, name.as_bytes())?;
		write_payload(out, value)?;
	}
	out.put_u8(Tag::End.code());
	Ok(())
}
