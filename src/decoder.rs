// src/decoder.rs
//! Walks the tree one bit at a time to turn a bit file back into bytes.
//!
//! States: `AtRoot` (about to start a symbol), `Traversing` (inside the
//! tree), `Done` (declared bits exhausted). Running out of bits anywhere
//! but at the root means the stream ended mid-symbol.

use std::io::{Read, Seek, Write};

use crate::bitreader::BitFileReader;
use crate::error::{HuffError, Result};
use crate::tree::{HuffNode, HuffmanTree};

#[derive(Debug, Clone, Copy)]
enum DecodeState<'t> {
    AtRoot,
    Traversing(&'t HuffNode),
    Done,
}

/// Decode every declared bit of `reader` against `tree`, writing symbols to
/// `out`. Returns the number of symbols written.
pub fn decode<R: Read + Seek, W: Write>(
    tree:   &HuffmanTree,
    reader: &mut BitFileReader<R>,
    out:    &mut W,
) -> Result<u64> {
    let root = tree.root();
    let mut state   = DecodeState::AtRoot;
    let mut emitted = 0u64;

    loop {
        state = match state {
            DecodeState::Done => return Ok(emitted),
            DecodeState::AtRoot if !reader.has_more_bits() => DecodeState::Done,
            DecodeState::Traversing(_) if !reader.has_more_bits() => {
                return Err(HuffError::TruncatedStream(format!(
                    "stream ended mid-symbol after {} symbols",
                    emitted
                )));
            }
            DecodeState::AtRoot | DecodeState::Traversing(_) => {
                let bit = reader.read_bit()?;
                let next = match state {
                    DecodeState::Traversing(node) => step(node, bit)?,
                    _ => step(root, bit)?,
                };
                match next {
                    HuffNode::Leaf { symbol, .. } => {
                        out.write_all(&[*symbol])?;
                        emitted += 1;
                        DecodeState::AtRoot
                    }
                    HuffNode::Internal { .. } => DecodeState::Traversing(next),
                }
            }
        };
    }
}

/// Follow one edge. A leaf here is a single-symbol tree whose only code is `0`.
fn step(node: &HuffNode, bit: bool) -> Result<&HuffNode> {
    match node {
        HuffNode::Internal { left, right, .. } => Ok(if bit { &**right } else { &**left }),
        HuffNode::Leaf { .. } if !bit => Ok(node),
        HuffNode::Leaf { symbol, .. } => Err(HuffError::CorruptInput(format!(
            "1 bit in a stream whose only symbol is 0x{:02x}",
            symbol
        ))),
    }
}
