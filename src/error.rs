// src/error.rs
//! Error taxonomy shared by every stage of the pipeline.
//!
//! Every variant aborts the current build / encode / decode call. Nothing
//! here is retried internally.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffError {
    /// Invalid open mode, or an operation the open mode does not allow.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Declared bit length inconsistent with the bytes actually stored.
    #[error("corrupt input: {0}")]
    CorruptInput(String),

    /// Fewer bits available than requested, or the stream ends mid-symbol.
    #[error("truncated stream: {0}")]
    TruncatedStream(String),

    #[error("remove_min on an empty ordered list")]
    EmptyCollection,

    /// Tree builder loop invariant violated.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),

    #[error("symbol 0x{symbol:02x} is not in the code table")]
    SymbolNotInTable { symbol: u8 },

    /// More than 32 bits requested in one `write_bits` / `read_bits` call.
    #[error("invalid bit count {requested} (must be at most 32)")]
    InvalidBitCount { requested: u32 },

    /// Payload does not fit the 32-bit length header.
    #[error("payload of {bits} bits exceeds the 32-bit length header")]
    BitLengthOverflow { bits: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HuffError>;
