use nbtdoc_testkit::{HELLO_WORLD, SAMPLE_DOCUMENT, gzip, scratch_path};

use crate::nbt::{Compound, Compression, DocFlags, Document, NbtError, Value};

#[test]
fn raw_document_round_trips_bytes() {
	let doc = Document::from_bytes(SAMPLE_DOCUMENT.to_vec(), DocFlags::empty()).expect("decodes");
	assert_eq!(doc.compression(), Compression::None);
	assert_eq!(doc.to_bytes().expect("encodes"), SAMPLE_DOCUMENT);
}

#[test]
fn gzip_flag_inflates_on_read_and_deflates_on_write() {
	let doc = Document::from_bytes(gzip(HELLO_WORLD), DocFlags::USE_GZIP).expect("decodes gzip");
	assert_eq!(doc.name, "hello world");
	assert_eq!(doc.root.get("name").and_then(Value::as_str), Some("Bananrama"));

	let packed = doc.to_bytes().expect("encodes");
	assert_eq!(Compression::detect(&packed), Compression::Gzip);
	let again = Document::from_bytes(packed, DocFlags::USE_GZIP).expect("decodes own output");
	assert_eq!(again, doc);
}

#[test]
fn gzip_flag_on_raw_bytes_is_a_compression_error() {
	let err = Document::from_bytes(SAMPLE_DOCUMENT.to_vec(), DocFlags::USE_GZIP).expect_err("raw is not gzip");
	assert!(err.is_compression_error(), "{err}");
}

#[test]
fn flags_pick_compression_and_render_style() {
	let both = DocFlags::USE_GZIP | DocFlags::USE_ZIP;
	assert_eq!(both.compression(), Compression::Gzip);
	assert_eq!(DocFlags::USE_ZIP.compression(), Compression::Zlib);
	assert_eq!(
		(DocFlags::JSON_STR | DocFlags::TREE_STR).render_style(),
		crate::nbt::RenderStyle::Json
	);
	assert_eq!(DocFlags::TREE_STR.render_style(), crate::nbt::RenderStyle::Tree);

	let swapped = (DocFlags::USE_GZIP | DocFlags::TREE_STR).with_compression(Compression::Zlib);
	assert_eq!(swapped, DocFlags::USE_ZIP | DocFlags::TREE_STR);
	assert_eq!(swapped.with_compression(Compression::None), DocFlags::TREE_STR);
}

#[test]
fn render_follows_document_flags() {
	let mut doc = Document::new(Compound::from([("a", Value::Int(10))]));
	assert_eq!(doc.render(), "{a:10}");

	doc.flags = DocFlags::JSON_STR;
	let parsed: serde_json::Value = serde_json::from_str(&doc.render()).expect("json output");
	assert_eq!(parsed, serde_json::json!({ "a": 10 }));

	doc.flags = DocFlags::TREE_STR;
	assert!(doc.render().starts_with("TAG_Compound(''): 1 entries"));
}

#[test]
fn save_and_open_through_the_filesystem() {
	let path = scratch_path("document_save_open.dat");
	let mut doc = Document::new(Compound::from([("level", Value::from("overworld"))]));
	doc.flags = DocFlags::USE_GZIP;
	doc.save(&path).expect("writes file");

	let opened = Document::open(&path, DocFlags::USE_GZIP).expect("reads file");
	assert_eq!(opened, doc);

	let detected = Document::open_detect(&path).expect("detects gzip");
	assert_eq!(detected.compression(), Compression::Gzip);
	assert_eq!(detected.root, doc.root);
}

#[test]
fn open_missing_file_is_io_error() {
	let err = Document::open(scratch_path("does_not_exist.dat"), DocFlags::empty()).expect_err("missing");
	assert!(matches!(err, NbtError::Io(_)), "{err}");
}
