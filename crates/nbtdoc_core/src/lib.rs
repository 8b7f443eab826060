//! Public library API for reading, editing, and writing NBT documents.

/// NBT value model, binary codec, compression, rendering, and document I/O.
pub mod nbt;
