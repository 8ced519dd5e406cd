// src/code_table.rs
//! Symbol → code mapping derived by a depth-first walk of the tree.
//!
//! Left edges append 0, right edges append 1. A tree that is a single leaf
//! gets the 1-bit code `0` so each occurrence still costs one bit.

use std::fmt;

use tracing::{debug, trace};

use crate::frequency::FrequencyTable;
use crate::tree::{HuffNode, HuffmanTree};

/// Longest code a `Code` can hold.
pub const MAX_CODE_BITS: u32 = 128;

/// Root-to-leaf path, stored right-aligned: the first edge is the most
/// significant of the low `len` bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    bits: u128,
    len:  u32,
}

impl Code {
    pub const EMPTY: Code = Code { bits: 0, len: 0 };

    pub fn bits(&self) -> u128 {
        self.bits
    }

    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// This code extended by one bit.
    pub fn push(self, bit: bool) -> Code {
        debug_assert!(self.len < MAX_CODE_BITS);
        Code { bits: (self.bits << 1) | bit as u128, len: self.len + 1 }
    }

    /// Bit at `index`, counting from the first edge taken.
    pub fn bit(&self, index: u32) -> bool {
        debug_assert!(index < self.len);
        (self.bits >> (self.len - 1 - index)) & 1 == 1
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        if self.len > other.len {
            return false;
        }
        let shift = other.len - self.len;
        shift == MAX_CODE_BITS || (other.bits >> shift) == self.bits
    }

    /// Split into `(value, width)` pieces of at most 32 bits, first edge first.
    pub fn segments(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let mut left = self.len;
        std::iter::from_fn(move || {
            if left == 0 {
                return None;
            }
            let width = if left % 32 == 0 { 32 } else { left % 32 };
            left -= width;
            let value = ((self.bits >> left) & ((1u128 << width) - 1)) as u32;
            Some((value, width))
        })
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.len {
            f.write_str(if self.bit(i) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Option<Code>; 256],
}

impl CodeTable {
    /// Table with no symbols, used when the input was empty.
    pub fn empty() -> Self {
        CodeTable { codes: [None; 256] }
    }

    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut table = CodeTable::empty();
        match tree.root() {
            HuffNode::Leaf { symbol, .. } => {
                table.codes[*symbol as usize] = Some(Code::EMPTY.push(false));
            }
            root => table.assign(root, Code::EMPTY),
        }
        debug!("Code table derived: {} symbols", table.len());
        for (symbol, code) in table.iter() {
            trace!("  0x{:02x} {:?} -> {}", symbol, symbol as char, code);
        }
        table
    }

    fn assign(&mut self, node: &HuffNode, code: Code) {
        match node {
            HuffNode::Leaf { symbol, .. } => self.codes[*symbol as usize] = Some(code),
            HuffNode::Internal { left, right, .. } => {
                self.assign(left, code.push(false));
                self.assign(right, code.push(true));
            }
        }
    }

    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes[symbol as usize].as_ref()
    }

    /// `(symbol, code)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(s, c)| c.as_ref().map(|c| (s as u8, c)))
    }

    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|c| c.is_none())
    }

    /// Σ count × code length: the exact payload size of encoding the input
    /// `frequencies` was taken from. Symbols missing from the table count 0.
    pub fn encoded_bit_length(&self, frequencies: &FrequencyTable) -> u64 {
        frequencies
            .entries()
            .filter_map(|(s, count)| self.get(s).map(|c| count * c.len() as u64))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_for(input: &[u8]) -> (FrequencyTable, CodeTable) {
        let freq = FrequencyTable::analyze(input);
        let table = CodeTable::from_tree(&HuffmanTree::build(&freq).unwrap());
        (freq, table)
    }

    #[test]
    fn aaaabbbcc_codes() {
        let (freq, table) = table_for(b"aaaabbbcc");
        assert_eq!(table.get(b'a').unwrap().to_string(), "0");
        assert_eq!(table.get(b'c').unwrap().to_string(), "10");
        assert_eq!(table.get(b'b').unwrap().to_string(), "11");
        assert!(table.get(b'd').is_none());
        assert_eq!(table.len(), 3);
        assert_eq!(table.encoded_bit_length(&freq), 14);
    }

    #[test]
    fn single_symbol_gets_one_bit() {
        let (freq, table) = table_for(b"aaaaa");
        let code = table.get(b'a').unwrap();
        assert_eq!(code.len(), 1);
        assert_eq!(code.to_string(), "0");
        assert_eq!(table.encoded_bit_length(&freq), 5);
    }

    #[test]
    fn every_symbol_gets_one_prefix_free_code() {
        let input: Vec<u8> = (0u32..20_000).map(|i| ((i * 31) % 251 ^ (i % 7)) as u8).collect();
        let (freq, table) = table_for(&input);
        assert_eq!(table.len(), freq.distinct());

        let codes: Vec<_> = table.iter().collect();
        for (i, (sa, a)) in codes.iter().enumerate() {
            for (sb, b) in codes.iter().skip(i + 1) {
                assert!(!a.is_prefix_of(b), "{:02x} is a prefix of {:02x}", sa, sb);
                assert!(!b.is_prefix_of(a), "{:02x} is a prefix of {:02x}", sb, sa);
            }
        }
    }

    #[test]
    fn skewed_weights_give_long_codes() {
        // Fibonacci counts force a maximally deep tree.
        let mut counts = Vec::new();
        let (mut x, mut y) = (1u64, 1u64);
        for s in 0u8..40 {
            counts.push((s, x));
            let z = x + y;
            x = y;
            y = z;
        }
        let freq = FrequencyTable::from_counts(counts).unwrap();
        let tree = HuffmanTree::build(&freq).unwrap();
        let table = CodeTable::from_tree(&tree);
        let longest = table.iter().map(|(_, c)| c.len()).max().unwrap();
        assert_eq!(longest as usize, tree.depth());
        assert!(longest > 32);
    }

    #[test]
    fn segments_split_long_codes_msb_first() {
        let mut code = Code::EMPTY;
        for i in 0..40 {
            code = code.push(i % 3 == 0);
        }
        let segs: Vec<_> = code.segments().collect();
        assert_eq!(segs.iter().map(|&(_, w)| w).collect::<Vec<_>>(), vec![8, 32]);

        let mut rebuilt = Code::EMPTY;
        for (value, width) in segs {
            for i in (0..width).rev() {
                rebuilt = rebuilt.push((value >> i) & 1 == 1);
            }
        }
        assert_eq!(rebuilt, code);
    }

    #[test]
    fn prefix_relation() {
        let a = Code::EMPTY.push(true);
        let ab = a.push(false);
        assert!(a.is_prefix_of(&ab));
        assert!(!ab.is_prefix_of(&a));
        assert!(Code::EMPTY.is_prefix_of(&a));
    }
}
