//! The 3200-byte textual file header.
//!
//! The header is kept as raw bytes, 40 lines of 80 characters. Turning it
//! into text is left to a [`TextDecoder`], since SEG-Y files use EBCDIC,
//! ASCII, or vendor code pages.

use std::io::{Read, Seek, SeekFrom};

use crate::{Result, SegyError};

/// Converts one line of raw textual header bytes to a `String`.
pub trait TextDecoder {
    fn decode_line(&self, encoding: &str, line: &[u8]) -> Result<String>;
}

/// Lossy ASCII decoder: bytes above 0x7F become `?`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiDecoder;

impl TextDecoder for AsciiDecoder {
    fn decode_line(&self, _encoding: &str, line: &[u8]) -> Result<String> {
        Ok(line
            .iter()
            .map(|&b| if b.is_ascii() { b as char } else { '?' })
            .collect())
    }
}

/// Raw textual file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextHeader {
    raw: Vec<u8>,
    encoding: String,
}

impl TextHeader {
    pub const LINE_LENGTH: usize = 80;
    pub const LINE_COUNT: usize = 40;
    pub const SIZE: usize = Self::LINE_LENGTH * Self::LINE_COUNT;

    /// Wrap raw header bytes. Fails if `raw` is shorter than 3200 bytes.
    pub fn new(raw: &[u8], encoding: impl Into<String>) -> Result<Self> {
        if raw.len() < Self::SIZE {
            return Err(SegyError::BufferTooShort {
                field: "TEXT_HEADER".into(),
                needed: Self::SIZE,
                actual: raw.len(),
            });
        }
        Ok(Self {
            raw: raw[..Self::SIZE].to_vec(),
            encoding: encoding.into(),
        })
    }

    /// Read the header from the start of `reader`.
    pub fn from_reader<R: Read + Seek>(
        reader: &mut R,
        encoding: impl Into<String>,
    ) -> Result<Self> {
        reader.seek(SeekFrom::Start(0))?;
        let mut raw = Vec::with_capacity(Self::SIZE);
        reader.take(Self::SIZE as u64).read_to_end(&mut raw)?;
        Self::new(&raw, encoding)
    }

    /// Name of the encoding the caller declared for this header.
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Raw bytes of line `index` (0-based).
    pub fn line(&self, index: usize) -> Option<&[u8]> {
        self.raw.chunks_exact(Self::LINE_LENGTH).nth(index)
    }

    pub fn lines(&self) -> impl Iterator<Item = &[u8]> {
        self.raw.chunks_exact(Self::LINE_LENGTH)
    }

    /// Decode every line with `decoder`.
    pub fn decode_lines<D: TextDecoder + ?Sized>(&self, decoder: &D) -> Result<Vec<String>> {
        self.lines()
            .map(|line| decoder.decode_line(&self.encoding, line))
            .collect()
    }

    /// Decode the header as one newline-joined string.
    pub fn decode<D: TextDecoder + ?Sized>(&self, decoder: &D) -> Result<String> {
        Ok(self.decode_lines(decoder)?.join("\n"))
    }
}
