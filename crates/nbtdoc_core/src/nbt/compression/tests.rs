use nbtdoc_testkit::{SAMPLE_DOCUMENT, gzip};

use super::GZIP_MAGIC;
use crate::nbt::{Compression, NbtError, compress, decompress};

#[test]
fn gzip_round_trip() {
	let packed = compress(SAMPLE_DOCUMENT.to_vec(), Compression::Gzip).expect("gzip deflate");
	assert!(packed.starts_with(&GZIP_MAGIC));
	let unpacked = decompress(packed, Compression::Gzip).expect("gzip inflate");
	assert_eq!(unpacked, SAMPLE_DOCUMENT);
}

#[test]
fn zlib_round_trip() {
	let packed = compress(SAMPLE_DOCUMENT.to_vec(), Compression::Zlib).expect("zlib deflate");
	assert_eq!(Compression::detect(&packed), Compression::Zlib);
	let unpacked = decompress(packed, Compression::Zlib).expect("zlib inflate");
	assert_eq!(unpacked, SAMPLE_DOCUMENT);
}

#[test]
fn none_passes_bytes_through() {
	let bytes = vec![1, 2, 3];
	assert_eq!(compress(bytes.clone(), Compression::None).expect("identity"), bytes);
	assert_eq!(decompress(bytes.clone(), Compression::None).expect("identity"), bytes);
}

#[test]
fn inflates_externally_framed_gzip() {
	let unpacked = decompress(gzip(SAMPLE_DOCUMENT), Compression::Gzip).expect("gzip inflate");
	assert_eq!(unpacked, SAMPLE_DOCUMENT);
}

#[test]
fn detects_framing_from_magic() {
	assert_eq!(Compression::detect(&gzip(b"x")), Compression::Gzip);
	assert_eq!(Compression::detect(SAMPLE_DOCUMENT), Compression::None);
	assert_eq!(Compression::detect(&[0x78, 0x9c, 0x00]), Compression::Zlib);
	assert_eq!(Compression::detect(&[0x1f]), Compression::None);
	assert_eq!(Compression::detect(&[]), Compression::None);
}

#[test]
fn raw_bytes_fail_gzip_inflate() {
	let err = decompress(SAMPLE_DOCUMENT.to_vec(), Compression::Gzip).expect_err("not gzip");
	assert!(matches!(err, NbtError::Inflate(_)), "{err}");
	assert!(err.is_compression_error());
}

#[test]
fn truncated_gzip_fails_inflate() {
	let mut packed = gzip(&[7_u8; 4096]);
	packed.truncate(packed.len() / 2);
	let err = decompress(packed, Compression::Gzip).expect_err("truncated stream");
	assert!(matches!(err, NbtError::Inflate(_)), "{err}");
}

#[test]
fn labels_are_stable() {
	assert_eq!(Compression::None.as_str(), "none");
	assert_eq!(Compression::Gzip.as_str(), "gzip");
	assert_eq!(Compression::Zlib.as_str(), "zlib");
}
