use thiserror::Error;

use crate::nbt::Tag;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, NbtError>;

/// Errors produced while building, navigating, encoding, and decoding NBT trees.
#[derive(Debug, Error)]
pub enum NbtError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),

	/// Assignment would change the kind of a kind-locked slot.
	#[error("type mismatch: cannot assign {found} to a slot that must stay {expected}")]
	TypeMismatch {
		/// Kind the slot is locked to.
		expected: Tag,
		/// Kind of the rejected value.
		found: Tag,
	},
	/// Keyed access on a value that is not a compound.
	#[error("not a compound: value is {found}")]
	NotACompound {
		/// Actual kind.
		found: Tag,
	},
	/// Indexed access on a value that is not a list.
	#[error("not a list: value is {found}")]
	NotAList {
		/// Actual kind.
		found: Tag,
	},
	/// Typed element access on the wrong array kind.
	#[error("not a {expected}: value is {found}")]
	NotAnArray {
		/// Array kind the accessor works on.
		expected: Tag,
		/// Actual kind.
		found: Tag,
	},
	/// List or array index past the end.
	#[error("index {index} out of range (len={len})")]
	IndexOutOfRange {
		/// Requested index.
		index: usize,
		/// Current length.
		len: usize,
	},
	/// Compound has no entry with this name.
	#[error("key not found: {key}")]
	KeyNotFound {
		/// Requested key, lossily decoded.
		key: String,
	},
	/// Path expression syntax is invalid.
	#[error("invalid path: {path}")]
	InvalidPath {
		/// Original user-provided path string.
		path: String,
	},

	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Tag byte outside the known range.
	#[error("invalid tag byte 0x{tag:02x} at offset {at}")]
	InvalidTag {
		/// Offending byte.
		tag: u8,
		/// Offset of the tag byte.
		at: usize,
	},
	/// Array or list length prefix was negative.
	#[error("negative length {len} at offset {at}")]
	NegativeLength {
		/// Parsed signed length.
		len: i32,
		/// Offset of the length field.
		at: usize,
	},
	/// List header declares `TAG_End` elements but a non-zero length.
	#[error("list of TAG_End with non-zero length {len} at offset {at}")]
	EndListNotEmpty {
		/// Declared element count.
		len: i32,
		/// Offset of the list header.
		at: usize,
	},
	/// Document root is not a compound.
	#[error("root tag must be TAG_Compound, got {tag}")]
	RootNotCompound {
		/// Root tag as read from the stream.
		tag: Tag,
	},
	/// Decoder recursion depth exceeded configured limit.
	#[error("decode depth exceeded (max={max_depth})")]
	DecodeDepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Bytes remained after the root compound in strict mode.
	#[error("trailing bytes after root at offset {at} (remaining {rem})")]
	TrailingBytes {
		/// Offset just past the root compound.
		at: usize,
		/// Unconsumed bytes.
		rem: usize,
	},

	/// String payload does not fit the 16-bit length prefix.
	#[error("string too long for u16 length prefix: {len} bytes")]
	StringTooLong {
		/// Byte length of the string.
		len: usize,
	},
	/// Array or list length does not fit the 32-bit length prefix.
	#[error("length {len} overflows i32 length prefix")]
	LengthOverflow {
		/// Element count.
		len: usize,
	},
	/// Compound entry holds the `End` placeholder, which has no wire form.
	#[error("compound entry {name:?} holds TAG_End and cannot be encoded")]
	EndInCompound {
		/// Entry name, lossily decoded.
		name: String,
	},

	/// Inflating a compressed document failed.
	#[error("inflate failed: {0}")]
	Inflate(#[source] std::io::Error),
	/// Deflating a document failed.
	#[error("deflate failed: {0}")]
	Deflate(#[source] std::io::Error),
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
}

impl NbtError {
	/// Return `true` for malformed-wire-bytes failures.
	pub fn is_decode_error(&self) -> bool {
		matches!(
			self,
			Self::UnexpectedEof { .. }
				| Self::InvalidTag { .. }
				| Self::NegativeLength { .. }
				| Self::EndListNotEmpty { .. }
				| Self::RootNotCompound { .. }
				| Self::DecodeDepthExceeded { .. }
				| Self::TrailingBytes { .. }
		)
	}

	/// Return `true` for failures raised by the compression layer.
	pub fn is_compression_error(&self) -> bool {
		matches!(self, Self::Inflate(_) | Self::Deflate(_) | Self::DecompressedTooLarge { .. })
	}
}
