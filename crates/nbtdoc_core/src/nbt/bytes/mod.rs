use crate::nbt::{NbtError, Result};

/// Bounded big-endian cursor over an immutable byte slice.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(NbtError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let raw = self.read_exact(N)?;
		let mut buf = [0_u8; N];
		buf.copy_from_slice(raw);
		Ok(buf)
	}

	/// Read one unsigned byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_array::<1>()?[0])
	}

	/// Read one signed byte.
	pub fn read_i8(&mut self) -> Result<i8> {
		Ok(i8::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `u16`.
	pub fn read_u16(&mut self) -> Result<u16> {
		Ok(u16::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `i16`.
	pub fn read_i16(&mut self) -> Result<i16> {
		Ok(i16::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `i32`.
	pub fn read_i32(&mut self) -> Result<i32> {
		Ok(i32::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `i64`.
	pub fn read_i64(&mut self) -> Result<i64> {
		Ok(i64::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian IEEE-754 single from its bit pattern.
	pub fn read_f32(&mut self) -> Result<f32> {
		Ok(f32::from_bits(u32::from_be_bytes(self.read_array()?)))
	}

	/// Read a big-endian IEEE-754 double from its bit pattern.
	pub fn read_f64(&mut self) -> Result<f64> {
		Ok(f64::from_bits(u64::from_be_bytes(self.read_array()?)))
	}

	/// Read a signed 32-bit length prefix and check that `len` items of
	/// `item_size` bytes can still fit in the remaining input.
	pub fn read_len(&mut self, item_size: usize) -> Result<usize> {
		let at = self.pos;
		let len = self.read_i32()?;
		if len < 0 {
			return Err(NbtError::NegativeLength { len, at });
		}

		let len = len as usize;
		let need = len.saturating_mul(item_size);
		if need > self.remaining() {
			return Err(NbtError::UnexpectedEof {
				at: self.pos,
				need,
				rem: self.remaining(),
			});
		}
		Ok(len)
	}
}

/// Growable big-endian output buffer.
#[derive(Debug, Default)]
pub struct Writer {
	out: Vec<u8>,
}

impl Writer {
	/// Create an empty writer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Consume the writer and return its bytes.
	pub fn into_bytes(self) -> Vec<u8> {
		self.out
	}

	/// Append raw bytes.
	pub fn put_bytes(&mut self, bytes: &[u8]) {
		self.out.extend_from_slice(bytes);
	}

	/// Append one unsigned byte.
	pub fn put_u8(&mut self, value: u8) {
		self.out.push(value);
	}

	/// Append one signed byte.
	pub fn put_i8(&mut self, value: i8) {
		self.put_bytes(&value.to_be_bytes());
	}

	/// Append a big-endian `u16`.
	pub fn put_u16(&mut self, value: u16) {
		self.put_bytes(&value.to_be_bytes());
	}

	/// Append a big-endian `i16`.
	pub fn put_i16(&mut self, value: i16) {
		self.put_bytes(&value.to_be_bytes());
	}

	/// Append a big-endian `i32`.
	pub fn put_i32(&mut self, value: i32) {
		self.put_bytes(&value.to_be_bytes());
	}

	/// Append a big-endian `i64`.
	pub fn put_i64(&mut self, value: i64) {
		self.put_bytes(&value.to_be_bytes());
	}

	/// Append the big-endian bit pattern of an `f32`.
	pub fn put_f32(&mut self, value: f32) {
		self.put_bytes(&value.to_bits().to_be_bytes());
	}

	/// Append the big-endian bit pattern of an `f64`.
	pub fn put_f64(&mut self, value: f64) {
		self.put_bytes(&value.to_bits().to_be_bytes());
	}

	/// Append a signed 32-bit length prefix.
	pub fn put_len(&mut self, len: usize) -> Result<()> {
		let len32 = i32::try_from(len).map_err(|_| NbtError::LengthOverflow { len })?;
		self.put_i32(len32);
		Ok(())
	}
}
