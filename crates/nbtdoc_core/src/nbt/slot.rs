use std::ops::Deref;

use crate::nbt::{Compound, List, NbtError, Result, Tag, Value};

/// Mutable handle to one value together with the kind its container requires.
///
/// List elements are handed out as locked slots; compound entries are free.
/// [`Slot::set`] is the single place where the lock is enforced. Payload
/// accessors only allow edits that keep the current kind.
pub struct Slot<'a> {
	value: &'a mut Value,
	lock: Option<Tag>,
}

impl<'a> Slot<'a> {
	/// Handle whose kind may change on assignment.
	pub fn free(value: &'a mut Value) -> Self {
		Self { value, lock: None }
	}

	/// Handle that must keep kind `tag`.
	pub fn locked(value: &'a mut Value, tag: Tag) -> Self {
		Self { value, lock: Some(tag) }
	}

	/// Kind this slot is locked to, if any.
	pub fn required_tag(&self) -> Option<Tag> {
		self.lock
	}

	/// Borrow the current value.
	pub fn get(&self) -> &Value {
		self.value
	}

	/// Replace the value, returning the previous one.
	///
	/// Fails with `TypeMismatch` and leaves the slot untouched when the slot is
	/// locked to a different kind.
	pub fn set(&mut self, value: impl Into<Value>) -> Result<Value> {
		let value = value.into();
		if let Some(expected) = self.lock {
			let found = value.tag();
			if found != expected {
				return Err(NbtError::TypeMismatch { expected, found });
			}
		}
		Ok(std::mem::replace(self.value, value))
	}

	/// Mutable compound payload.
	pub fn compound_mut(self) -> Result<&'a mut Compound> {
		let found = self.value.tag();
		self.value.as_compound_mut().ok_or(NbtError::NotACompound { found })
	}

	/// Mutable list payload.
	pub fn list_mut(self) -> Result<&'a mut List> {
		let found = self.value.tag();
		self.value.as_list_mut().ok_or(NbtError::NotAList { found })
	}

	/// Mutable byte array storage.
	pub fn byte_array_mut(self) -> Result<&'a mut Vec<i8>> {
		let found = self.value.tag();
		self.value.as_byte_array_mut().ok_or(NbtError::NotAnArray {
			expected: Tag::ByteArray,
			found,
		})
	}

	/// Mutable int array storage.
	pub fn int_array_mut(self) -> Result<&'a mut Vec<i32>> {
		let found = self.value.tag();
		self.value.as_int_array_mut().ok_or(NbtError::NotAnArray {
			expected: Tag::IntArray,
			found,
		})
	}

	/// Mutable long array storage.
	pub fn long_array_mut(self) -> Result<&'a mut Vec<i64>> {
		let found = self.value.tag();
		self.value.as_long_array_mut().ok_or(NbtError::NotAnArray {
			expected: Tag::LongArray,
			found,
		})
	}
}

impl Deref for Slot<'_> {
	type Target = Value;

	fn deref(&self) -> &Value {
		self.value
	}
}
