// src/lib.rs
//! huffpack — classical Huffman compression over a bit-exact file format.
//!
//! Pipeline: bytes → `FrequencyTable` → `OrderedList` of leaves →
//! `HuffmanTree` → `CodeTable` → bit file (encode) / bytes (decode).
//!
//! File layout:
//!   Bytes 0..4:   payload bit length L, big-endian u32 (not rounded to bytes)
//!   Bytes 4..:    ceil(L / 8) payload bytes, bits packed MSB first, the last
//!                 byte's unused low-order bits zero
//!
//! The tree is not stored. Decoding uses the `HuffmanCodec` session that
//! built it.
//!
//! ```
//! let codec  = huffpack::HuffmanCodec::from_bytes(b"aaaabbbcc")?;
//! let packed = codec.compress(b"aaaabbbcc")?;
//! assert_eq!(packed, [0u8, 0, 0, 14, 0b0000_1111, 0b1110_1000]);
//! assert_eq!(codec.decompress(&packed)?, b"aaaabbbcc");
//! # Ok::<(), huffpack::HuffError>(())
//! ```
pub mod error;
pub mod ordered_list;
pub mod frequency;
pub mod tree;
pub mod code_table;
pub mod bitwriter;
pub mod bitreader;
pub mod bitstream;
pub mod encoder;
pub mod decoder;
pub mod codec;

/// Size of the bit-length header.
pub const HEADER_BYTES: usize = 4;

pub use bitreader::BitFileReader;
pub use bitstream::{BitStream, OpenMode};
pub use bitwriter::BitFileWriter;
pub use code_table::{Code, CodeTable};
pub use codec::HuffmanCodec;
pub use error::{HuffError, Result};
pub use frequency::FrequencyTable;
pub use ordered_list::OrderedList;
pub use tree::{HuffNode, HuffmanTree};
