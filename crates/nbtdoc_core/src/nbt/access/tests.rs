use crate::nbt::{Compound, List, NbtError, Tag, Value};

fn sample() -> Value {
	let mut root = Value::Compound(Compound::new());
	root.add_entry("a", 10_i32).expect("root is a compound");
	root.add_entry("b", vec![1_i16, 2, 3]).expect("root is a compound");
	root.add_entry("bytes", vec![1_i8, 2]).expect("root is a compound");
	root
}

#[test]
fn keyed_access_requires_a_compound() {
	let root = sample();
	assert_eq!(root.get("a").expect("present").as_int(), Some(10));

	let missing = root.get("zz").expect_err("absent key");
	assert!(matches!(missing, NbtError::KeyNotFound { ref key } if key == "zz"));

	let scalar = Value::Int(1);
	let err = scalar.get("a").expect_err("int has no entries");
	assert!(matches!(err, NbtError::NotACompound { found: Tag::Int }));
}

#[test]
fn add_entry_overwrites_and_keeps_count() {
	let mut root = sample();
	root.add_entry("a", "text").expect("root is a compound");
	assert_eq!(root.as_compound().map(Compound::len), Some(3));
	assert_eq!(root.get("a").expect("present").as_str(), Some("text"));

	let mut scalar = Value::Short(1);
	assert!(matches!(scalar.add_entry("a", 1_i32), Err(NbtError::NotACompound { found: Tag::Short })));
}

#[test]
fn entry_inserts_or_replaces_freely() {
	let mut root = sample();
	*root.entry("fresh").expect("root is a compound") = Value::Long(9);
	*root.entry("a").expect("root is a compound") = Value::from("kind changed");
	assert_eq!(root.get("fresh").expect("inserted").as_long(), Some(9));
	assert_eq!(root.get("a").expect("present").as_str(), Some("kind changed"));
}

#[test]
fn indexed_access_requires_a_list() {
	let root = sample();
	let list = root.get("b").expect("present");
	assert_eq!(list.index(2).expect("in range").as_short(), Some(3));

	let err = list.index(3).expect_err("past the end");
	assert!(matches!(err, NbtError::IndexOutOfRange { index: 3, len: 3 }));

	let err = root.index(0).expect_err("compound is not a list");
	assert!(matches!(err, NbtError::NotAList { found: Tag::Compound }));
}

#[test]
fn list_slot_through_value_is_locked() {
	let mut value = Value::List(List::from(vec![1.0_f32, 2.0]));
	let err = value.slot(0).and_then(|mut slot| slot.set(1_i32)).expect_err("int into float list");
	assert!(matches!(
		err,
		NbtError::TypeMismatch {
			expected: Tag::Float,
			found: Tag::Int,
		}
	));
	value.slot(1).and_then(|mut slot| slot.set(4.0_f32)).expect("same kind");
	assert_eq!(value.index(1).expect("in range").as_float(), Some(4.0));
}

#[test]
fn typed_array_element_access() {
	let mut root = sample();
	let bytes = root.entry("bytes").expect("root is a compound");
	assert_eq!(bytes.byte_at(1).expect("in range"), 2);
	*bytes.byte_at_mut(0).expect("in range") = -1;
	assert_eq!(bytes.as_byte_array(), Some(&[-1_i8, 2][..]));

	let err = bytes.int_at(0).expect_err("byte array is not an int array");
	assert!(matches!(
		err,
		NbtError::NotAnArray {
			expected: Tag::IntArray,
			found: Tag::ByteArray,
		}
	));
	assert!(matches!(bytes.byte_at(2), Err(NbtError::IndexOutOfRange { index: 2, len: 2 })));

	let mut longs = Value::LongArray(vec![5, 6]);
	*longs.long_at_mut(1).expect("in range") += 1;
	assert_eq!(longs.long_at(1).expect("in range"), 7);
	assert!(longs.int_at_mut(0).is_err());
}
