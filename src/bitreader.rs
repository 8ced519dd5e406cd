// src/bitreader.rs
//! Read side of the bit file format.
//!
//! The header's declared bit length is checked against the bytes actually
//! stored before any payload is read, and is then counted down as bits are
//! consumed. Padding bits past the declared length are never returned.

use std::io::{self, Read, Seek, SeekFrom};

use bitstream_io::{BigEndian, BitRead, BitReader};

use crate::error::{HuffError, Result};
use crate::HEADER_BYTES;

pub struct BitFileReader<R: Read + Seek> {
    bits:      BitReader<R, BigEndian>,
    declared:  u64,
    remaining: u64,
}

impl<R: Read + Seek> BitFileReader<R> {
    /// Open a bit file starting at the current position of `inner`.
    pub fn new(mut inner: R) -> Result<Self> {
        let origin = inner.stream_position()?;

        let mut header = [0u8; HEADER_BYTES];
        if let Err(e) = inner.read_exact(&mut header) {
            return Err(match e.kind() {
                io::ErrorKind::UnexpectedEof => HuffError::CorruptInput(format!(
                    "file shorter than the {}-byte length header",
                    HEADER_BYTES
                )),
                _ => e.into(),
            });
        }
        let declared = u32::from_be_bytes(header) as u64;

        // Sanity check: the declared length must fit in what is stored.
        let end       = inner.seek(SeekFrom::End(0))?;
        let available = end.saturating_sub(origin + HEADER_BYTES as u64);
        let needed    = (declared + 7) / 8;
        if needed > available {
            return Err(HuffError::CorruptInput(format!(
                "header declares {} bits ({} bytes) but only {} payload bytes are stored",
                declared, needed, available
            )));
        }
        inner.seek(SeekFrom::Start(origin + HEADER_BYTES as u64))?;

        Ok(BitFileReader {
            bits: BitReader::endian(inner, BigEndian),
            declared,
            remaining: declared,
        })
    }

    /// Read `n` bits, most significant first, into the low bits of the result.
    pub fn read_bits(&mut self, n: u32) -> Result<u32> {
        if n > 32 {
            return Err(HuffError::InvalidBitCount { requested: n });
        }
        if n == 0 {
            return Ok(0);
        }
        if (n as u64) > self.remaining {
            return Err(HuffError::TruncatedStream(format!(
                "asked for {} bits with {} of {} declared bits left",
                n, self.remaining, self.declared
            )));
        }
        let value = self.bits.read::<u32>(n).map_err(|e| truncated(e, n))?;
        self.remaining -= n as u64;
        Ok(value)
    }

    pub fn read_bit(&mut self) -> Result<bool> {
        self.read_bits(1).map(|b| b == 1)
    }

    /// True while declared payload bits remain unread.
    pub fn has_more_bits(&self) -> bool {
        self.remaining > 0
    }

    /// Payload length from the header.
    pub fn declared_bits(&self) -> u64 {
        self.declared
    }

    pub fn remaining_bits(&self) -> u64 {
        self.remaining
    }

    pub fn into_inner(self) -> R {
        self.bits.into_reader()
    }
}

fn truncated(e: io::Error, n: u32) -> HuffError {
    match e.kind() {
        io::ErrorKind::UnexpectedEof => {
            HuffError::TruncatedStream(format!("storage exhausted while reading {} bits", n))
        }
        _ => e.into(),
    }
}
