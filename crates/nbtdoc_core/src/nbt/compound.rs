use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::nbt::{NbtError, NbtString, Result, Slot, Value};

/// Name-to-value mapping with unique keys, iterated in key order.
///
/// Entries are free slots: writing an existing key may change its kind.
#[derive(Debug, Clone, Default, PartialEq, PartialOrd)]
pub struct Compound {
	entries: BTreeMap<NbtString, Value>,
}

impl Compound {
	/// Create an empty compound.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Return `true` when there are no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Return `true` when `name` is present.
	pub fn contains_key(&self, name: impl AsRef<[u8]>) -> bool {
		self.entries.contains_key(name.as_ref())
	}

	/// Borrow the value stored under `name`.
	pub fn get(&self, name: impl AsRef<[u8]>) -> Option<&Value> {
		self.entries.get(name.as_ref())
	}

	/// Mutably borrow the value stored under `name`.
	pub fn get_mut(&mut self, name: impl AsRef<[u8]>) -> Option<&mut Value> {
		self.entries.get_mut(name.as_ref())
	}

	/// Borrow the value under `name`, failing with `KeyNotFound`.
	pub fn try_get(&self, name: impl AsRef<[u8]>) -> Result<&Value> {
		let name = name.as_ref();
		self.entries.get(name).ok_or_else(|| NbtError::KeyNotFound {
			key: String::from_utf8_lossy(name).into_owned(),
		})
	}

	/// Insert or overwrite an entry, returning the previous value.
	pub fn insert(&mut self, name: impl Into<NbtString>, value: impl Into<Value>) -> Option<Value> {
		self.entries.insert(name.into(), value.into())
	}

	/// Mutable reference to the entry under `name`, inserting an `End`
	/// placeholder when it is absent.
	pub fn entry(&mut self, name: impl Into<NbtString>) -> &mut Value {
		self.entries.entry(name.into()).or_default()
	}

	/// Free slot for the entry under `name`, inserting a placeholder when absent.
	pub fn slot(&mut self, name: impl Into<NbtString>) -> Slot<'_> {
		Slot::free(self.entry(name))
	}

	/// Remove and return the entry under `name`.
	pub fn remove(&mut self, name: impl AsRef<[u8]>) -> Option<Value> {
		self.entries.remove(name.as_ref())
	}

	/// Iterate entries in key order.
	pub fn iter(&self) -> btree_map::Iter<'_, NbtString, Value> {
		self.entries.iter()
	}

	/// Iterate entries mutably in key order.
	pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, NbtString, Value> {
		self.entries.iter_mut()
	}

	/// Iterate entry names in key order.
	pub fn keys(&self) -> btree_map::Keys<'_, NbtString, Value> {
		self.entries.keys()
	}

	/// Iterate entry values in key order.
	pub fn values(&self) -> btree_map::Values<'_, NbtString, Value> {
		self.entries.values()
	}
}

impl<K: Into<NbtString>, V: Into<Value>> FromIterator<(K, V)> for Compound {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut out = Self::new();
		for (name, value) in iter {
			out.insert(name, value);
		}
		out
	}
}

impl<K: Into<NbtString>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Compound {
	fn from(entries: [(K, V); N]) -> Self {
		entries.into_iter().collect()
	}
}

impl<'a> IntoIterator for &'a Compound {
	type Item = (&'a NbtString, &'a Value);
	type IntoIter = btree_map::Iter<'a, NbtString, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

impl IntoIterator for Compound {
	type Item = (NbtString, Value);
	type IntoIter = btree_map::IntoIter<NbtString, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}
