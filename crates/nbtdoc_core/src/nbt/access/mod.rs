use crate::nbt::{Compound, List, NbtError, NbtString, Result, Slot, Tag, Value};

impl Value {
	fn compound_ref(&self) -> Result<&Compound> {
		self.as_compound().ok_or(NbtError::NotACompound { found: self.tag() })
	}

	fn compound_mut(&mut self) -> Result<&mut Compound> {
		let found = self.tag();
		self.as_compound_mut().ok_or(NbtError::NotACompound { found })
	}

	fn list_ref(&self) -> Result<&List> {
		self.as_list().ok_or(NbtError::NotAList { found: self.tag() })
	}

	fn list_mut(&mut self) -> Result<&mut List> {
		let found = self.tag();
		self.as_list_mut().ok_or(NbtError::NotAList { found })
	}

	/// Borrow compound entry `name`.
	///
	/// Fails with `NotACompound` on other kinds and `KeyNotFound` when absent.
	pub fn get(&self, name: impl AsRef<[u8]>) -> Result<&Value> {
		self.compound_ref()?.try_get(name)
	}

	/// Mutable reference to compound entry `name`, inserting an `End`
	/// placeholder when absent. Writing through it replaces or inserts.
	pub fn entry(&mut self, name: impl Into<NbtString>) -> Result<&mut Value> {
		Ok(self.compound_mut()?.entry(name))
	}

	/// Insert or overwrite compound entry `name`.
	pub fn add_entry(&mut self, name: impl Into<NbtString>, value: impl Into<Value>) -> Result<()> {
		self.compound_mut()?.insert(name, value);
		Ok(())
	}

	/// Borrow list element `index`.
	///
	/// Fails with `NotAList` on other kinds and `IndexOutOfRange` past the end.
	pub fn index(&self, index: usize) -> Result<&Value> {
		self.list_ref()?.try_get(index)
	}

	/// Kind-locked handle to list element `index`.
	pub fn slot(&mut self, index: usize) -> Result<Slot<'_>> {
		self.list_mut()?.slot(index)
	}

	/// Read byte array element `index`.
	pub fn byte_at(&self, index: usize) -> Result<i8> {
		let items = self.as_byte_array().ok_or_else(|| self.not_an_array(Tag::ByteArray))?;
		element(items, index).copied()
	}

	/// Mutable byte array element `index`.
	pub fn byte_at_mut(&mut self, index: usize) -> Result<&mut i8> {
		let err = self.not_an_array(Tag::ByteArray);
		let items = self.as_byte_array_mut().ok_or(err)?;
		element_mut(items, index)
	}

	/// Read int array element `index`.
	pub fn int_at(&self, index: usize) -> Result<i32> {
		let items = self.as_int_array().ok_or_else(|| self.not_an_array(Tag::IntArray))?;
		element(items, index).copied()
	}

	/// Mutable int array element `index`.
	pub fn int_at_mut(&mut self, index: usize) -> Result<&mut i32> {
		let err = self.not_an_array(Tag::IntArray);
		let items = self.as_int_array_mut().ok_or(err)?;
		element_mut(items, index)
	}

	/// Read long array element `index`.
	pub fn long_at(&self, index: usize) -> Result<i64> {
		let items = self.as_long_array().ok_or_else(|| self.not_an_array(Tag::LongArray))?;
		element(items, index).copied()
	}

	/// Mutable long array element `index`.
	pub fn long_at_mut(&mut self, index: usize) -> Result<&mut i64> {
		let err = self.not_an_array(Tag::LongArray);
		let items = self.as_long_array_mut().ok_or(err)?;
		element_mut(items, index)
	}

	fn not_an_array(&self, expected: Tag) -> NbtError {
		NbtError::NotAnArray { expected, found: self.tag() }
	}
}

fn element<T>(items: &[T], index: usize) -> Result<&T> {
	let len = items.len();
	items.get(index).ok_or(NbtError::IndexOutOfRange { index, len })
}

fn element_mut<T>(items: &mut [T], index: usize) -> Result<&mut T> {
	let len = items.len();
	items.get_mut(index).ok_or(NbtError::IndexOutOfRange { index, len })
}

#[cfg(test)]
mod tests;
