use crate::nbt::{List, NbtError, Tag, Value};

fn ints(values: &[i32]) -> List {
	List::from_values(values.iter().copied().map(Value::Int).collect()).expect("int list")
}

#[test]
fn locked_element_rejects_other_kinds() {
	let mut list = ints(&[1, 2, 3]);
	let err = list.set(1, 2.0_f64).expect_err("double into int list");
	assert!(matches!(
		err,
		NbtError::TypeMismatch {
			expected: Tag::Int,
			found: Tag::Double,
		}
	));
	assert_eq!(list.get(1), Some(&Value::Int(2)));
	assert_eq!(list.len(), 3);
}

#[test]
fn set_replaces_in_place() {
	let mut list = ints(&[1, 2, 3]);
	let previous = list.set(2, 30_i32).expect("same kind");
	assert_eq!(previous, Value::Int(3));
	assert_eq!(list.len(), 3);
	assert_eq!(list.as_slice(), &[Value::Int(1), Value::Int(2), Value::Int(30)]);
}

#[test]
fn slot_reports_its_lock() {
	let mut list = ints(&[5]);
	let mut slot = list.slot(0).expect("in range");
	assert_eq!(slot.required_tag(), Some(Tag::Int));
	assert_eq!(slot.as_int(), Some(5));
	assert!(slot.set(Value::End).is_err());
	slot.set(6_i32).expect("same kind");
	assert_eq!(list.get(0), Some(&Value::Int(6)));

	let err = list.slot(4).err().expect("past the end");
	assert!(matches!(err, NbtError::IndexOutOfRange { index: 4, len: 1 }));
}

#[test]
fn nested_payload_edits_keep_element_kind() {
	let mut inner = List::new();
	inner.push(1_i32).expect("first push");
	let mut outer = List::new();
	outer.push(inner).expect("list of lists");

	let nested = outer.slot(0).and_then(|slot| slot.list_mut()).expect("element is a list");
	nested.push(2_i32).expect("int into int list");
	assert!(nested.push("no").is_err());

	assert_eq!(outer.element_tag(), Tag::List);
	assert_eq!(outer.get(0).and_then(Value::as_list).map(List::len), Some(2));
}

#[test]
fn empty_list_adopts_first_pushed_kind() {
	let mut list = List::new();
	assert_eq!(list.element_tag(), Tag::End);
	list.push("first").expect("adopts string");
	assert_eq!(list.element_tag(), Tag::String);
	assert!(list.push(1_i8).is_err());

	list.clear();
	assert_eq!(list.element_tag(), Tag::String);
	assert!(list.push(1_i8).is_err());
}

#[test]
fn end_values_never_enter_a_list() {
	let mut list = List::new();
	assert!(list.push(Value::End).is_err());
	assert!(List::from_values(vec![Value::End]).is_err());
	assert!(list.is_empty());
}

#[test]
fn typed_empty_list_rejects_other_kinds() {
	let mut list = List::with_element(Tag::Long);
	assert!(list.push(1_i32).is_err());
	list.push(1_i64).expect("long into long list");
	assert_eq!(list.len(), 1);
}

#[test]
fn remove_and_pop() {
	let mut list = ints(&[1, 2, 3]);
	assert_eq!(list.remove(0).expect("in range"), Value::Int(1));
	assert_eq!(list.pop(), Some(Value::Int(3)));
	assert!(matches!(list.remove(5), Err(NbtError::IndexOutOfRange { index: 5, len: 1 })));
	assert_eq!(list.into_values(), vec![Value::Int(2)]);
}

#[test]
fn slots_iterate_every_element() {
	let mut list = ints(&[1, 2, 3]);
	for mut slot in list.slots() {
		let doubled = slot.as_int().map(|v| v * 2).expect("int element");
		slot.set(doubled).expect("same kind");
	}
	assert_eq!(list, ints(&[2, 4, 6]));
}

#[test]
fn empty_lists_compare_equal_across_kinds() {
	let mut cleared = ints(&[1]);
	cleared.clear();
	assert_eq!(cleared, List::new());
	assert_eq!(List::with_element(Tag::Compound), List::new());
	assert_ne!(ints(&[1]), List::from(vec![1_i16]));
	assert_eq!(ints(&[1]).partial_cmp(&ints(&[2])), Some(std::cmp::Ordering::Less));
}
