use std::cmp::Ordering;

use crate::nbt::{Compound, List, NbtError, NbtString, Result, Tag};

/// One node of an NBT tree.
///
/// Trees own their children exclusively. Whether a node may change kind is
/// decided by the container it sits in, see [`crate::nbt::Slot`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
	/// Empty placeholder; never persisted as an entry kind.
	#[default]
	End,
	/// Signed 8-bit integer.
	Byte(i8),
	/// Signed 16-bit integer.
	Short(i16),
	/// Signed 32-bit integer.
	Int(i32),
	/// Signed 64-bit integer.
	Long(i64),
	/// Single precision float.
	Float(f32),
	/// Double precision float.
	Double(f64),
	/// Raw signed bytes.
	ByteArray(Vec<i8>),
	/// Raw byte string.
	String(NbtString),
	/// Homogeneous list of wrapped values.
	List(List),
	/// Name-to-value mapping in key order.
	Compound(Compound),
	/// Raw 32-bit integers.
	IntArray(Vec<i32>),
	/// Raw 64-bit integers.
	LongArray(Vec<i64>),
}

impl Value {
	/// Kind of the active alternative.
	pub fn tag(&self) -> Tag {
		match self {
			Self::End => Tag::End,
			Self::Byte(_) => Tag::Byte,
			Self::Short(_) => Tag::Short,
			Self::Int(_) => Tag::Int,
			Self::Long(_) => Tag::Long,
			Self::Float(_) => Tag::Float,
			Self::Double(_) => Tag::Double,
			Self::ByteArray(_) => Tag::ByteArray,
			Self::String(_) => Tag::String,
			Self::List(_) => Tag::List,
			Self::Compound(_) => Tag::Compound,
			Self::IntArray(_) => Tag::IntArray,
			Self::LongArray(_) => Tag::LongArray,
		}
	}

	/// Kind of contained elements.
	///
	/// Arrays report their raw element kind, lists their declared element kind,
	/// compounds report `Compound`, and scalars report their own kind.
	pub fn element_tag(&self) -> Tag {
		match self {
			Self::ByteArray(_) => Tag::Byte,
			Self::IntArray(_) => Tag::Int,
			Self::LongArray(_) => Tag::Long,
			Self::List(list) => list.element_tag(),
			other => other.tag(),
		}
	}

	/// Return `true` for the `End` placeholder.
	pub fn is_end(&self) -> bool {
		matches!(self, Self::End)
	}

	/// Build a list from wrapped values, inferring the element kind from the first one.
	pub fn list(items: Vec<Value>) -> Result<Self> {
		List::from_values(items).map(Self::List)
	}

	/// Byte payload, if any.
	pub fn as_byte(&self) -> Option<i8> {
		match self {
			Self::Byte(v) => Some(*v),
			_ => None,
		}
	}

	/// Short payload, if any.
	pub fn as_short(&self) -> Option<i16> {
		match self {
			Self::Short(v) => Some(*v),
			_ => None,
		}
	}

	/// Int payload, if any.
	pub fn as_int(&self) -> Option<i32> {
		match self {
			Self::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// Long payload, if any.
	pub fn as_long(&self) -> Option<i64> {
		match self {
			Self::Long(v) => Some(*v),
			_ => None,
		}
	}

	/// Float payload, if any.
	pub fn as_float(&self) -> Option<f32> {
		match self {
			Self::Float(v) => Some(*v),
			_ => None,
		}
	}

	/// Double payload, if any.
	pub fn as_double(&self) -> Option<f64> {
		match self {
			Self::Double(v) => Some(*v),
			_ => None,
		}
	}

	/// Borrow string payload when it is valid UTF-8.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(v) => v.as_str(),
			_ => None,
		}
	}

	/// Borrow string payload as raw bytes-backed string.
	pub fn as_nbt_string(&self) -> Option<&NbtString> {
		match self {
			Self::String(v) => Some(v),
			_ => None,
		}
	}

	/// Borrow raw bytes of a byte array.
	pub fn as_byte_array(&self) -> Option<&[i8]> {
		match self {
			Self::ByteArray(v) => Some(v),
			_ => None,
		}
	}

	/// Borrow raw values of an int array.
	pub fn as_int_array(&self) -> Option<&[i32]> {
		match self {
			Self::IntArray(v) => Some(v),
			_ => None,
		}
	}

	/// Borrow raw values of a long array.
	pub fn as_long_array(&self) -> Option<&[i64]> {
		match self {
			Self::LongArray(v) => Some(v),
			_ => None,
		}
	}

	/// Borrow list payload.
	pub fn as_list(&self) -> Option<&List> {
		match self {
			Self::List(v) => Some(v),
			_ => None,
		}
	}

	/// Mutably borrow list payload; element kinds stay locked by [`List`].
	pub fn as_list_mut(&mut self) -> Option<&mut List> {
		match self {
			Self::List(v) => Some(v),
			_ => None,
		}
	}

	/// Borrow compound payload.
	pub fn as_compound(&self) -> Option<&Compound> {
		match self {
			Self::Compound(v) => Some(v),
			_ => None,
		}
	}

	/// Mutably borrow compound payload.
	pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
		match self {
			Self::Compound(v) => Some(v),
			_ => None,
		}
	}

	/// Mutably borrow byte array storage.
	pub fn as_byte_array_mut(&mut self) -> Option<&mut Vec<i8>> {
		match self {
			Self::ByteArray(v) => Some(v),
			_ => None,
		}
	}

	/// Mutably borrow int array storage.
	pub fn as_int_array_mut(&mut self) -> Option<&mut Vec<i32>> {
		match self {
			Self::IntArray(v) => Some(v),
			_ => None,
		}
	}

	/// Mutably borrow long array storage.
	pub fn as_long_array_mut(&mut self) -> Option<&mut Vec<i64>> {
		match self {
			Self::LongArray(v) => Some(v),
			_ => None,
		}
	}
}

impl PartialOrd for Value {
	/// Same-kind values order by payload; different kinds are incomparable.
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		match (self, other) {
			(Self::End, Self::End) => Some(Ordering::Equal),
			(Self::Byte(a), Self::Byte(b)) => a.partial_cmp(b),
			(Self::Short(a), Self::Short(b)) => a.partial_cmp(b),
			(Self::Int(a), Self::Int(b)) => a.partial_cmp(b),
			(Self::Long(a), Self::Long(b)) => a.partial_cmp(b),
			(Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
			(Self::Double(a), Self::Double(b)) => a.partial_cmp(b),
			(Self::ByteArray(a), Self::ByteArray(b)) => a.partial_cmp(b),
			(Self::String(a), Self::String(b)) => a.partial_cmp(b),
			(Self::List(a), Self::List(b)) => a.partial_cmp(b),
			(Self::Compound(a), Self::Compound(b)) => a.partial_cmp(b),
			(Self::IntArray(a), Self::IntArray(b)) => a.partial_cmp(b),
			(Self::LongArray(a), Self::LongArray(b)) => a.partial_cmp(b),
			_ => None,
		}
	}
}

macro_rules! impl_from_scalar {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Self::$variant(value)
				}
			}
		)*
	};
}

impl_from_scalar! {
	i8 => Byte,
	i16 => Short,
	i32 => Int,
	i64 => Long,
	f32 => Float,
	f64 => Double,
	Vec<i8> => ByteArray,
	Vec<i32> => IntArray,
	Vec<i64> => LongArray,
	NbtString => String,
	List => List,
	Compound => Compound,
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Byte(i8::from(value))
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.into())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value.into())
	}
}

macro_rules! impl_from_list_vec {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<Vec<$ty>> for Value {
				fn from(value: Vec<$ty>) -> Self {
					Self::List(List::from(value))
				}
			}
		)*
	};
}

impl_from_list_vec!(i16, f32, f64, &str, String, Compound, List);

impl TryFrom<Vec<Value>> for Value {
	type Error = NbtError;

	fn try_from(value: Vec<Value>) -> Result<Self> {
		Self::list(value)
	}
}

#[cfg(test)]
mod tests;
