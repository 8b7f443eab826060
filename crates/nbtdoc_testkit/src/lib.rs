//! Shared test helpers for workspace crates.

use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;

/// `{"a": 10, "b": [1, 2, 3]}` under an empty root name, uncompressed.
pub const SAMPLE_DOCUMENT: &[u8] = &[
	0x0a, 0x00, 0x00, // root compound, empty name
	0x03, 0x00, 0x01, b'a', 0x00, 0x00, 0x00, 0x0a, // a: Int(10)
	0x09, 0x00, 0x01, b'b', 0x03, 0x00, 0x00, 0x00, 0x03, // b: List of 3 Int
	0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x03, //
	0x00, // end of root
];

/// The classic `hello world` test document: root `"hello world"` with `name: "Bananrama"`.
pub const HELLO_WORLD: &[u8] = &[
	0x0a, 0x00, 0x0b, b'h', b'e', b'l', b'l', b'o', b' ', b'w', b'o', b'r', b'l', b'd', //
	0x08, 0x00, 0x04, b'n', b'a', b'm', b'e', //
	0x00, 0x09, b'B', b'a', b'n', b'a', b'n', b'r', b'a', b'm', b'a', //
	0x00,
];

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Per-process scratch file path under the target directory.
pub fn scratch_path(name: &str) -> PathBuf {
	let dir = target_dir().join("nbtdoc-scratch").join(std::process::id().to_string());
	std::fs::create_dir_all(&dir).expect("scratch dir is creatable");
	dir.join(name)
}

/// gzip-frame `bytes` with default settings.
pub fn gzip(bytes: &[u8]) -> Vec<u8> {
	let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
	encoder.write_all(bytes).expect("in-memory gzip write");
	encoder.finish().expect("in-memory gzip finish")
}
