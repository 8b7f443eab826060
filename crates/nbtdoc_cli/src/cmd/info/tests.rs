use nbtdoc::nbt::{Compound, Tag, Value};

use super::count_kinds;

#[test]
fn counts_nested_nodes_by_kind() {
	let inner = Compound::from([("x", Value::Int(1)), ("y", Value::Int(2))]);
	let root = Compound::from([
		("name", Value::from("spawn")),
		("pos", Value::from(vec![inner.clone(), inner])),
		("heights", Value::IntArray(vec![1, 2, 3])),
	]);

	let counts = count_kinds(&root);
	assert_eq!(counts.get(&Tag::Compound), Some(&3));
	assert_eq!(counts.get(&Tag::Int), Some(&4));
	assert_eq!(counts.get(&Tag::List), Some(&1));
	assert_eq!(counts.get(&Tag::String), Some(&1));
	assert_eq!(counts.get(&Tag::IntArray), Some(&1));
	assert_eq!(counts.get(&Tag::Long), None);
}
