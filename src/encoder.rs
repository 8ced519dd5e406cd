// src/encoder.rs
//! Writes each input symbol's code to a bit file, in input order.

use std::io::{self, Read, Seek, Write};

use crate::bitwriter::BitFileWriter;
use crate::code_table::CodeTable;
use crate::error::{HuffError, Result};

const READ_CHUNK: usize = 8 * 1024;

/// Append the codes for `input` to `writer` without closing it.
pub fn write_symbols<W: Write + Seek>(
    input:  &[u8],
    table:  &CodeTable,
    writer: &mut BitFileWriter<W>,
) -> Result<()> {
    for &symbol in input {
        let code = table.get(symbol).ok_or(HuffError::SymbolNotInTable { symbol })?;
        for (value, width) in code.segments() {
            writer.write_bits(value, width)?;
        }
    }
    Ok(())
}

/// Encode `input` into a complete bit file on `sink`.
///
/// Returns the payload bit length written to the header.
pub fn encode<W: Write + Seek>(input: &[u8], table: &CodeTable, sink: W) -> Result<u64> {
    let mut writer = BitFileWriter::new(sink)?;
    write_symbols(input, table, &mut writer)?;
    let bits = writer.bit_length();
    writer.close()?;
    Ok(bits)
}

/// Append the codes for every symbol `source` yields until it is exhausted.
pub fn write_reader<R: Read, W: Write + Seek>(
    mut source: R,
    table:      &CodeTable,
    writer:     &mut BitFileWriter<W>,
) -> Result<()> {
    let mut buf = vec![0u8; READ_CHUNK];
    loop {
        let n = match source.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        write_symbols(&buf[..n], table, writer)?;
    }
    Ok(())
}

/// Like `encode`, pulling symbols from `source`.
pub fn encode_reader<R: Read, W: Write + Seek>(source: R, table: &CodeTable, sink: W) -> Result<u64> {
    let mut writer = BitFileWriter::new(sink)?;
    write_reader(source, table, &mut writer)?;
    let bits = writer.bit_length();
    writer.close()?;
    Ok(bits)
}
