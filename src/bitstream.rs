// src/bitstream.rs
//! File-backed bit stream opened in read (`"r"`) or write (`"w"`) mode.
//!
//! Each instance owns one file handle. Operations that do not match the
//! open mode fail with a configuration error rather than touching the file.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::bitreader::BitFileReader;
use crate::bitwriter::BitFileWriter;
use crate::error::{HuffError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    Read,
    Write,
}

impl FromStr for OpenMode {
    type Err = HuffError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "r" => Ok(OpenMode::Read),
            "w" => Ok(OpenMode::Write),
            other => Err(HuffError::Configuration(format!(
                "mode should be either \"r\" or \"w\", got {:?}",
                other
            ))),
        }
    }
}

pub enum BitStream {
    Reader(BitFileReader<BufReader<File>>),
    Writer(BitFileWriter<BufWriter<File>>),
}

impl BitStream {
    /// Open `path` for bit-level reading or writing. Write mode truncates.
    pub fn open<P: AsRef<Path>>(path: P, mode: OpenMode) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening bit stream {} ({:?})", path.display(), mode);
        match mode {
            OpenMode::Read => {
                let file = File::open(path)?;
                Ok(BitStream::Reader(BitFileReader::new(BufReader::new(file))?))
            }
            OpenMode::Write => {
                let file = File::create(path)?;
                Ok(BitStream::Writer(BitFileWriter::new(BufWriter::new(file))?))
            }
        }
    }

    /// Like `open`, with the mode given as `"r"` or `"w"`.
    pub fn open_with_mode<P: AsRef<Path>>(path: P, mode: &str) -> Result<Self> {
        Self::open(path, mode.parse()?)
    }

    pub fn mode(&self) -> OpenMode {
        match self {
            BitStream::Reader(_) => OpenMode::Read,
            BitStream::Writer(_) => OpenMode::Write,
        }
    }

    pub fn write_bits(&mut self, value: u32, n: u32) -> Result<()> {
        match self {
            BitStream::Writer(w) => w.write_bits(value, n),
            BitStream::Reader(_) => Err(wrong_mode("write_bits", OpenMode::Read)),
        }
    }

    pub fn read_bits(&mut self, n: u32) -> Result<u32> {
        match self {
            BitStream::Reader(r) => r.read_bits(n),
            BitStream::Writer(_) => Err(wrong_mode("read_bits", OpenMode::Write)),
        }
    }

    /// Always false for a write stream.
    pub fn has_more_bits(&self) -> bool {
        match self {
            BitStream::Reader(r) => r.has_more_bits(),
            BitStream::Writer(_) => false,
        }
    }

    /// Finalize the stream. For writers this pads the last byte and patches
    /// the length header; it must be called before the file is read back.
    pub fn close(self) -> Result<()> {
        match self {
            BitStream::Writer(w) => {
                let bits = w.bit_length();
                w.close()?;
                debug!("Bit stream closed after {} bits", bits);
                Ok(())
            }
            BitStream::Reader(_) => Ok(()),
        }
    }

    pub fn into_reader(self) -> Result<BitFileReader<BufReader<File>>> {
        match self {
            BitStream::Reader(r) => Ok(r),
            BitStream::Writer(_) => Err(wrong_mode("into_reader", OpenMode::Write)),
        }
    }

    pub fn into_writer(self) -> Result<BitFileWriter<BufWriter<File>>> {
        match self {
            BitStream::Writer(w) => Ok(w),
            BitStream::Reader(_) => Err(wrong_mode("into_writer", OpenMode::Read)),
        }
    }
}

fn wrong_mode(op: &str, mode: OpenMode) -> HuffError {
    HuffError::Configuration(format!("{} is not allowed on a stream opened for {:?}", op, mode))
}
