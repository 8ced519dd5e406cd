// src/frequency.rs
//! Single-pass symbol frequency analysis.
//!
//! Counts are indexed directly by byte value. Symbols never seen have a
//! count of zero and are skipped by `entries()`, so they never become leaves.

use std::io::{self, Read};

use crate::error::{HuffError, Result};

const READ_CHUNK: usize = 8 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 256],
    total:  u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        FrequencyTable { counts: [0u64; 256], total: 0 }
    }

    /// Count every byte of `input`.
    pub fn analyze(input: &[u8]) -> Self {
        let mut table = FrequencyTable::new();
        table.add(input);
        table
    }

    /// Count every byte read from `reader` until it is exhausted.
    pub fn analyze_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut table = FrequencyTable::new();
        let mut buf   = vec![0u8; READ_CHUNK];
        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            table.add(&buf[..n]);
        }
        Ok(table)
    }

    /// Table with the given `(symbol, count)` pairs; later pairs for the same
    /// symbol add to earlier ones.
    ///
    /// Fails with `InternalInvariant` if a count or the total would exceed
    /// `u64::MAX`, since tree weights are sums of these.
    pub fn from_counts<I: IntoIterator<Item = (u8, u64)>>(counts: I) -> Result<Self> {
        let mut table = FrequencyTable::new();
        for (symbol, count) in counts {
            let slot = &mut table.counts[symbol as usize];
            *slot = slot.checked_add(count).ok_or_else(|| overflow(symbol, count))?;
            table.total = table.total.checked_add(count).ok_or_else(|| overflow(symbol, count))?;
        }
        Ok(table)
    }

    /// Accumulate counts for another chunk of input.
    pub fn add(&mut self, chunk: &[u8]) {
        for &b in chunk {
            self.counts[b as usize] += 1;
        }
        self.total += chunk.len() as u64;
    }

    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// `(symbol, count)` for every symbol seen at least once, in symbol order.
    pub fn entries(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(s, &c)| (s as u8, c))
    }

    /// Number of distinct symbols present.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Total number of symbols counted.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

fn overflow(symbol: u8, count: u64) -> HuffError {
    HuffError::InternalInvariant(format!(
        "adding {} occurrences of 0x{:02x} overflows the symbol count",
        count, symbol
    ))
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}
