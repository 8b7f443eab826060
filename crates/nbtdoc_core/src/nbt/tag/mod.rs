use std::fmt;

/// One-byte kind discriminator persisted before every named entry and list header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Tag {
	/// Compound terminator and the empty placeholder value.
	End = 0x00,
	/// Signed 8-bit integer.
	Byte = 0x01,
	/// Signed 16-bit integer.
	Short = 0x02,
	/// Signed 32-bit integer.
	Int = 0x03,
	/// Signed 64-bit integer.
	Long = 0x04,
	/// IEEE-754 single precision float.
	Float = 0x05,
	/// IEEE-754 double precision float.
	Double = 0x06,
	/// Length-prefixed run of signed bytes.
	ByteArray = 0x07,
	/// Length-prefixed raw byte string.
	String = 0x08,
	/// Homogeneous sequence of untagged values.
	List = 0x09,
	/// Named entries terminated by `End`.
	Compound = 0x0a,
	/// Length-prefixed run of 32-bit integers.
	IntArray = 0x0b,
	/// Length-prefixed run of 64-bit integers.
	LongArray = 0x0c,
}

impl Tag {
	/// Every tag in wire-code order.
	pub const ALL: [Tag; 13] = [
		Tag::End,
		Tag::Byte,
		Tag::Short,
		Tag::Int,
		Tag::Long,
		Tag::Float,
		Tag::Double,
		Tag::ByteArray,
		Tag::String,
		Tag::List,
		Tag::Compound,
		Tag::IntArray,
		Tag::LongArray,
	];

	/// Map a wire byte to its tag, `None` for unknown codes.
	pub fn from_byte(byte: u8) -> Option<Self> {
		Self::ALL.get(usize::from(byte)).copied()
	}

	/// Raw wire code.
	pub fn code(self) -> u8 {
		self as u8
	}

	/// Conventional `TAG_*` name used in tree renderings and error messages.
	pub fn name(self) -> &'static str {
		match self {
			Self::End => "TAG_End",
			Self::Byte => "TAG_Byte",
			Self::Short => "TAG_Short",
			Self::Int => "TAG_Int",
			Self::Long => "TAG_Long",
			Self::Float => "TAG_Float",
			Self::Double => "TAG_Double",
			Self::ByteArray => "TAG_Byte_Array",
			Self::String => "TAG_String",
			Self::List => "TAG_List",
			Self::Compound => "TAG_Compound",
			Self::IntArray => "TAG_Int_Array",
			Self::LongArray => "TAG_Long_Array",
		}
	}

	/// Stable lowercase label for machine-readable output.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::End => "end",
			Self::Byte => "byte",
			Self::Short => "short",
			Self::Int => "int",
			Self::Long => "long",
			Self::Float => "float",
			Self::Double => "double",
			Self::ByteArray => "byte_array",
			Self::String => "string",
			Self::List => "list",
			Self::Compound => "compound",
			Self::IntArray => "int_array",
			Self::LongArray => "long_array",
		}
	}

	/// Smallest number of payload bytes one value of this kind occupies on the wire.
	///
	/// Used to reject length prefixes that cannot fit in the remaining input
	/// before anything is allocated.
	pub fn min_payload_size(self) -> usize {
		match self {
			Self::End => 0,
			Self::Byte => 1,
			Self::Short => 2,
			Self::Int | Self::Float => 4,
			Self::Long | Self::Double => 8,
			Self::ByteArray | Self::IntArray | Self::LongArray => 4,
			Self::String => 2,
			Self::List => 5,
			Self::Compound => 1,
		}
	}
}

impl fmt::Display for Tag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
