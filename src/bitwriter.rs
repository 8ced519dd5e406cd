// src/bitwriter.rs
//! Write side of the bit file format.
//!
//! Layout: 4-byte big-endian payload bit length, then the payload packed
//! most-significant-bit first. The header is written as zero on creation and
//! patched by `close()` once the true length is known; the final byte's
//! unused low-order bits are zero.

use std::io::{Seek, SeekFrom, Write};

use bitstream_io::{BigEndian, BitWrite, BitWriter};

use crate::error::{HuffError, Result};
use crate::HEADER_BYTES;

pub struct BitFileWriter<W: Write + Seek> {
    bits:       BitWriter<W, BigEndian>,
    origin:     u64,
    bit_length: u64,
}

impl<W: Write + Seek> BitFileWriter<W> {
    /// Start a bit file at the current position of `inner`.
    pub fn new(mut inner: W) -> Result<Self> {
        let origin = inner.stream_position()?;
        inner.write_all(&[0u8; HEADER_BYTES])?; // room for the length
        Ok(BitFileWriter {
            bits: BitWriter::endian(inner, BigEndian),
            origin,
            bit_length: 0,
        })
    }

    /// Append the low `n` bits of `value`, most significant first.
    pub fn write_bits(&mut self, value: u32, n: u32) -> Result<()> {
        if n > 32 {
            return Err(HuffError::InvalidBitCount { requested: n });
        }
        if n == 0 {
            return Ok(());
        }
        let total = self.bit_length + n as u64;
        if total > u32::MAX as u64 {
            return Err(HuffError::BitLengthOverflow { bits: total });
        }
        let masked = if n == 32 { value } else { value & ((1u32 << n) - 1) };
        self.bits.write(n, masked)?;
        self.bit_length = total;
        Ok(())
    }

    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.write_bits(bit as u32, 1)
    }

    /// Bits written so far.
    pub fn bit_length(&self) -> u64 {
        self.bit_length
    }

    /// Zero-pad to a byte boundary, then patch the header with the bit count.
    ///
    /// Returns the underlying writer, positioned after the payload.
    pub fn close(mut self) -> Result<W> {
        self.bits.byte_align()?;
        let mut inner = self.bits.into_writer();

        let end = inner.stream_position()?;
        inner.seek(SeekFrom::Start(self.origin))?;
        inner.write_all(&(self.bit_length as u32).to_be_bytes())?;
        inner.seek(SeekFrom::Start(end))?;
        inner.flush()?;
        Ok(inner)
    }
}
