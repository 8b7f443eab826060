use std::cmp::Ordering;

use crate::nbt::{Compound, List, NbtError, Tag, Value};

#[test]
fn reports_kind_and_element_kind() {
	assert_eq!(Value::default().tag(), Tag::End);
	assert_eq!(Value::from(3_i16).tag(), Tag::Short);
	assert_eq!(Value::from(vec![1_i8, 2]).element_tag(), Tag::Byte);
	assert_eq!(Value::from(vec![1_i32]).element_tag(), Tag::Int);
	assert_eq!(Value::from(vec![1_i64]).element_tag(), Tag::Long);
	assert_eq!(Value::from(vec!["a", "b"]).element_tag(), Tag::String);
	assert_eq!(Value::from(Compound::new()).element_tag(), Tag::Compound);
	assert_eq!(Value::from(2.5_f64).element_tag(), Tag::Double);
}

#[test]
fn builds_values_from_native_types() {
	assert_eq!(Value::from(true), Value::Byte(1));
	assert_eq!(Value::from("hi").as_str(), Some("hi"));
	assert_eq!(Value::from(7_i64).as_long(), Some(7));
	assert_eq!(Value::from(1.5_f32).as_float(), Some(1.5));
	assert_eq!(Value::from(vec![1_i32, 2]).as_int_array(), Some(&[1, 2][..]));

	let shorts = Value::from(vec![1_i16, 2, 3]);
	let list = shorts.as_list().expect("vec of shorts becomes a list");
	assert_eq!(list.element_tag(), Tag::Short);
	assert_eq!(list.len(), 3);
}

#[test]
fn empty_vec_becomes_kindless_list() {
	let value = Value::from(Vec::<f64>::new());
	assert_eq!(value.tag(), Tag::List);
	assert_eq!(value.element_tag(), Tag::End);
}

#[test]
fn mixed_values_do_not_form_a_list() {
	let err = Value::list(vec![Value::Int(1), Value::Short(2)]).expect_err("mixed kinds");
	assert!(matches!(
		err,
		NbtError::TypeMismatch {
			expected: Tag::Int,
			found: Tag::Short,
		}
	));

	let ok = Value::try_from(vec![Value::Int(1), Value::Int(2)]).expect("same kinds");
	assert_eq!(ok.element_tag(), Tag::Int);
}

#[test]
fn ordering_only_holds_within_a_kind() {
	assert_eq!(Value::Int(1).partial_cmp(&Value::Int(2)), Some(Ordering::Less));
	assert_eq!(Value::from("b").partial_cmp(&Value::from("a")), Some(Ordering::Greater));
	assert_eq!(Value::Int(1).partial_cmp(&Value::Long(1)), None);
	assert_eq!(Value::Float(f32::NAN).partial_cmp(&Value::Float(0.0)), None);
	assert!(Value::Byte(1) != Value::Short(1));
}

#[test]
fn compound_insert_overwrites_existing_name() {
	let mut compound = Compound::new();
	assert!(compound.insert("x", 1_i32).is_none());
	let previous = compound.insert("x", "now a string");
	assert_eq!(previous, Some(Value::Int(1)));
	assert_eq!(compound.len(), 1);
	assert_eq!(compound.get("x").and_then(Value::as_str), Some("now a string"));
}

#[test]
fn compound_iterates_in_key_order() {
	let compound = Compound::from([("b", Value::Int(2)), ("a", Value::Int(1)), ("c", Value::Int(3))]);
	let keys: Vec<String> = compound.keys().map(|key| key.to_string()).collect();
	assert_eq!(keys, ["a", "b", "c"]);

	let nested = Value::from(vec![compound.clone(), compound]);
	assert_eq!(nested.as_list().map(List::len), Some(2));
}
