use std::cmp::Ordering;
use std::slice;

use crate::nbt::{Compound, NbtError, Result, Slot, Tag, Value};

/// Homogeneous sequence of values sharing one element kind.
///
/// The element kind is fixed by the first element (or the decoded header) and
/// every later write is checked against it. Elements are never handed out as
/// bare `&mut Value`; whole-value replacement goes through [`Slot`].
///
/// Equality and ordering look at the elements only, so two empty lists are
/// equal whatever kind they are locked to. Non-empty equal lists always share
/// a kind.
#[derive(Debug, Clone)]
pub struct List {
	element: Tag,
	items: Vec<Value>,
}

impl Default for List {
	fn default() -> Self {
		Self::new()
	}
}

impl PartialEq for List {
	fn eq(&self, other: &Self) -> bool {
		self.items == other.items
	}
}

impl PartialOrd for List {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		self.items.partial_cmp(&other.items)
	}
}

impl List {
	/// Create an empty list with no element kind (`End`).
	pub fn new() -> Self {
		Self {
			element: Tag::End,
			items: Vec::new(),
		}
	}

	/// Create an empty list locked to `element`.
	pub fn with_element(element: Tag) -> Self {
		Self { element, items: Vec::new() }
	}

	/// Build from wrapped values, taking the element kind from the first one.
	///
	/// An empty vector yields an `End`-kind list. Any element whose kind
	/// differs from the first fails with `TypeMismatch`.
	pub fn from_values(items: Vec<Value>) -> Result<Self> {
		let Some(first) = items.first() else {
			return Ok(Self::new());
		};

		let element = first.tag();
		for item in &items {
			check_element(element, item.tag())?;
		}
		Ok(Self { element, items })
	}

	/// Assemble a list whose elements are already known to share `element`.
	pub(crate) fn from_parts(element: Tag, items: Vec<Value>) -> Self {
		debug_assert!(items.iter().all(|item| item.tag() == element));
		Self { element, items }
	}

	/// Declared element kind.
	pub fn element_tag(&self) -> Tag {
		self.element
	}

	/// Number of elements.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Return `true` when the list has no elements.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Borrow element at `index`.
	pub fn get(&self, index: usize) -> Option<&Value> {
		self.items.get(index)
	}

	/// Borrow element at `index`, failing with `IndexOutOfRange`.
	pub fn try_get(&self, index: usize) -> Result<&Value> {
		let len = self.items.len();
		self.items.get(index).ok_or(NbtError::IndexOutOfRange { index, len })
	}

	/// Kind-locked mutable handle to element at `index`.
	pub fn slot(&mut self, index: usize) -> Result<Slot<'_>> {
		let len = self.items.len();
		let element = self.element;
		let value = self.items.get_mut(index).ok_or(NbtError::IndexOutOfRange { index, len })?;
		Ok(Slot::locked(value, element))
	}

	/// Replace element at `index`, returning the previous value.
	pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Result<Value> {
		self.slot(index)?.set(value)
	}

	/// Append a value of the element kind.
	///
	/// A kind-less (`End`) empty list adopts the kind of its first push.
	pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
		let value = value.into();
		if self.element == Tag::End && self.items.is_empty() && !value.is_end() {
			self.element = value.tag();
		}
		check_element(self.element, value.tag())?;
		self.items.push(value);
		Ok(())
	}

	/// Remove and return element at `index`.
	pub fn remove(&mut self, index: usize) -> Result<Value> {
		let len = self.items.len();
		if index >= len {
			return Err(NbtError::IndexOutOfRange { index, len });
		}
		Ok(self.items.remove(index))
	}

	/// Remove and return the last element.
	pub fn pop(&mut self) -> Option<Value> {
		self.items.pop()
	}

	/// Drop every element. The element kind stays locked in memory; an empty
	/// list is still encoded as `TAG_End`.
	pub fn clear(&mut self) {
		self.items.clear();
	}

	/// Iterate elements in order.
	pub fn iter(&self) -> slice::Iter<'_, Value> {
		self.items.iter()
	}

	/// Iterate kind-locked handles to every element.
	pub fn slots(&mut self) -> impl Iterator<Item = Slot<'_>> {
		let element = self.element;
		self.items.iter_mut().map(move |value| Slot::locked(value, element))
	}

	/// Borrow all elements.
	pub fn as_slice(&self) -> &[Value] {
		&self.items
	}

	/// Consume and return the elements.
	pub fn into_values(self) -> Vec<Value> {
		self.items
	}
}

fn check_element(element: Tag, found: Tag) -> Result<()> {
	if found != element || found == Tag::End {
		return Err(NbtError::TypeMismatch { expected: element, found });
	}
	Ok(())
}

impl<'a> IntoIterator for &'a List {
	type Item = &'a Value;
	type IntoIter = slice::Iter<'a, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

impl IntoIterator for List {
	type Item = Value;
	type IntoIter = std::vec::IntoIter<Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

impl TryFrom<Vec<Value>> for List {
	type Error = NbtError;

	fn try_from(value: Vec<Value>) -> Result<Self> {
		Self::from_values(value)
	}
}

macro_rules! impl_list_from_vec {
	($($ty:ty => $tag:ident),* $(,)?) => {
		$(
			impl From<Vec<$ty>> for List {
				fn from(value: Vec<$ty>) -> Self {
					let element = if value.is_empty() { Tag::End } else { Tag::$tag };
					Self::from_parts(element, value.into_iter().map(Value::from).collect())
				}
			}
		)*
	};
}

impl_list_from_vec! {
	i16 => Short,
	f32 => Float,
	f64 => Double,
	&str => String,
	String => String,
	Compound => Compound,
	List => List,
}

#[cfg(test)]
mod tests;
