use std::borrow::{Borrow, Cow};
use std::fmt;

/// Owned NBT string payload.
///
/// The wire format does not validate encoding, so the bytes are kept as read
/// and only decoded (lossily) for display.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NbtString(Vec<u8>);

impl NbtString {
	/// Create an empty string.
	pub fn new() -> Self {
		Self::default()
	}

	/// Wrap raw bytes without validation.
	pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
		Self(bytes.into())
	}

	/// Raw payload bytes.
	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	/// Consume and return raw payload bytes.
	pub fn into_bytes(self) -> Vec<u8> {
		self.0
	}

	/// Borrow as `&str` when the payload is valid UTF-8.
	pub fn as_str(&self) -> Option<&str> {
		std::str::from_utf8(&self.0).ok()
	}

	/// Decode for display, replacing invalid sequences.
	pub fn to_string_lossy(&self) -> Cow<'_, str> {
		String::from_utf8_lossy(&self.0)
	}

	/// Payload length in bytes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Return `true` for the empty string.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl Borrow<[u8]> for NbtString {
	fn borrow(&self) -> &[u8] {
		&self.0
	}
}

impl AsRef<[u8]> for NbtString {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl From<&str> for NbtString {
	fn from(value: &str) -> Self {
		Self(value.as_bytes().to_vec())
	}
}

impl From<String> for NbtString {
	fn from(value: String) -> Self {
		Self(value.into_bytes())
	}
}

impl From<&String> for NbtString {
	fn from(value: &String) -> Self {
		Self::from(value.as_str())
	}
}

impl From<&[u8]> for NbtString {
	fn from(value: &[u8]) -> Self {
		Self(value.to_vec())
	}
}

impl From<Vec<u8>> for NbtString {
	fn from(value: Vec<u8>) -> Self {
		Self(value)
	}
}

impl PartialEq<str> for NbtString {
	fn eq(&self, other: &str) -> bool {
		self.0 == other.as_bytes()
	}
}

impl PartialEq<&str> for NbtString {
	fn eq(&self, other: &&str) -> bool {
		self.0 == other.as_bytes()
	}
}

impl fmt::Debug for NbtString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(&*self.to_string_lossy(), f)
	}
}

impl fmt::Display for NbtString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_string_lossy())
	}
}
