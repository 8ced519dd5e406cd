// src/codec.rs
//! One compression session: analyze → build tree → derive codes, then
//! encode and decode with the same tree.
//!
//! The bit file does not carry the tree, so a stream can only be decoded by
//! the session (or an identically built one) that encoded it.

use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Read, Seek, Write};
use std::path::Path;

use tracing::debug;

use crate::bitreader::BitFileReader;
use crate::bitstream::{BitStream, OpenMode};
use crate::code_table::CodeTable;
use crate::decoder;
use crate::encoder;
use crate::error::{HuffError, Result};
use crate::frequency::FrequencyTable;
use crate::tree::HuffmanTree;

#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    frequencies: FrequencyTable,
    tree:        Option<HuffmanTree>,
    table:       CodeTable,
}

impl HuffmanCodec {
    /// Session for an empty input is valid and holds no tree.
    pub fn from_frequencies(frequencies: FrequencyTable) -> Result<Self> {
        debug!(
            "Frequencies: {} symbols, {} distinct",
            frequencies.total(),
            frequencies.distinct()
        );
        let (tree, table) = if frequencies.is_empty() {
            (None, CodeTable::empty())
        } else {
            let tree  = HuffmanTree::build(&frequencies)?;
            let table = CodeTable::from_tree(&tree);
            (Some(tree), table)
        };
        Ok(HuffmanCodec { frequencies, tree, table })
    }

    pub fn from_bytes(input: &[u8]) -> Result<Self> {
        Self::from_frequencies(FrequencyTable::analyze(input))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_frequencies(FrequencyTable::analyze_reader(reader)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn tree(&self) -> Option<&HuffmanTree> {
        self.tree.as_ref()
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    /// Payload bits the analyzed input encodes to.
    pub fn expected_bit_length(&self) -> u64 {
        self.table.encoded_bit_length(&self.frequencies)
    }

    /// Encode `input` as a bit file on `sink`. Returns the payload bit length.
    pub fn encode_to<W: Write + Seek>(&self, input: &[u8], sink: W) -> Result<u64> {
        encoder::encode(input, &self.table, sink)
    }

    /// Decode a bit file from `source` into `out`. Returns the symbols written.
    pub fn decode_from<R: Read + Seek, W: Write>(&self, source: R, out: &mut W) -> Result<u64> {
        let mut reader = BitFileReader::new(source)?;
        self.decode_bits(&mut reader, out)
    }

    fn decode_bits<R: Read + Seek, W: Write>(
        &self,
        reader: &mut BitFileReader<R>,
        out:    &mut W,
    ) -> Result<u64> {
        match &self.tree {
            Some(tree) => decoder::decode(tree, reader, out),
            None if !reader.has_more_bits() => Ok(0),
            None => Err(HuffError::CorruptInput(format!(
                "{} payload bits but the session has no symbols",
                reader.declared_bits()
            ))),
        }
    }

    /// In-memory `encode_to`.
    pub fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut out = Cursor::new(Vec::new());
        self.encode_to(input, &mut out)?;
        Ok(out.into_inner())
    }

    /// In-memory `decode_from`.
    pub fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.decode_from(Cursor::new(data), &mut out)?;
        Ok(out)
    }

    /// Re-read `input` and write its bit file to `output`.
    pub fn encode_file<P: AsRef<Path>, Q: AsRef<Path>>(&self, input: P, output: Q) -> Result<u64> {
        let source     = BufReader::new(File::open(input.as_ref())?);
        let mut writer = BitStream::open(output.as_ref(), OpenMode::Write)?.into_writer()?;
        encoder::write_reader(source, &self.table, &mut writer)?;
        let bits = writer.bit_length();
        writer.close()?;
        debug!("Encoded {} -> {} bits", input.as_ref().display(), bits);
        Ok(bits)
    }

    /// Decode the bit file at `input` into `output`.
    pub fn decode_file<P: AsRef<Path>, Q: AsRef<Path>>(&self, input: P, output: Q) -> Result<u64> {
        let mut reader = BitStream::open(input.as_ref(), OpenMode::Read)?.into_reader()?;
        let mut out    = BufWriter::new(File::create(output.as_ref())?);
        let symbols    = self.decode_bits(&mut reader, &mut out)?;
        out.flush()?;
        debug!("Decoded {} -> {} bytes", input.as_ref().display(), symbols);
        Ok(symbols)
    }
}
