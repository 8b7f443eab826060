mod access;
mod bytes;
mod compound;
mod compression;
mod decode;
mod document;
mod encode;
mod error;
mod flags;
mod list;
mod path;
mod render;
mod slot;
mod string;
mod tag;
mod value;

/// Compound container type.
pub use compound::Compound;
/// Compression framing and whole-buffer transforms.
pub use compression::{Compression, compress, decompress};
/// Wire decoding entry points and options.
pub use decode::{DecodeOptions, decode_payload, decode_root};
/// Named root document and file I/O.
pub use document::Document;
/// Wire encoding entry points.
pub use encode::{encode_payload, encode_root};
/// Error and result aliases.
pub use error::{NbtError, Result};
/// Open/write configuration flags.
pub use flags::DocFlags;
/// Homogeneous list type.
pub use list::List;
/// Path expression types.
pub use path::{NbtPath, PathStep};
/// Debug renderers.
pub use render::{RenderStyle, render, render_root, to_json};
/// Kind-locked mutable handle.
pub use slot::Slot;
/// Raw byte string type.
pub use string::NbtString;
/// Kind discriminator.
pub use tag::Tag;
/// Tree node type.
pub use value::Value;
