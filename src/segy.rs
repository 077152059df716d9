//! Opening a SEG-Y file.
//!
//! [`SegY::open`] reads the textual and binary file headers once, derives
//! the trace geometry from the binary header and the file size, and hands
//! trace access to a [`TraceIndexer`]. No file handle is kept open.

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::binary_header::{BinaryHeader, EXTENDED_TEXT_HEADER_COUNT, SAMPLES_PER_TRACE};
use crate::format::SampleFormat;
use crate::indexer::TraceIndexer;
use crate::options::SegyOptions;
use crate::text::TextHeader;
use crate::trace_header::TraceHeader;
use crate::{Result, SegyError};

/// An opened SEG-Y file.
#[derive(Debug, Clone)]
pub struct SegY {
    path: PathBuf,
    options: SegyOptions,
    text_header: TextHeader,
    binary_header: BinaryHeader,
    format: SampleFormat,
    indexer: TraceIndexer,
}

impl SegY {
    /// Read the file headers and index the traces of `path`.
    ///
    /// Fails with `UnsupportedFormat` if the binary header's sample format
    /// code is not one of the known codes 1-14, and with `ValueOutOfRange`
    /// if the sample count or extended header count put traces beyond
    /// any addressable offset. Files using a known format
    /// without a sample codec (such as 24-bit integers) still open; only
    /// their samples are unreadable.
    pub fn open(path: impl AsRef<Path>, options: SegyOptions) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let (text_header, binary_header, file_size) = {
            let mut file = File::open(&path)?;
            let file_size = file.metadata()?.len();
            let text_header = TextHeader::from_reader(&mut file, options.text_encoding.as_str())?;
            let binary_header = BinaryHeader::from_reader(
                &mut file,
                &options.binary_edits,
                &options.binary_overrides,
                options.byte_order,
            )?;
            (text_header, binary_header, file_size)
        };

        let format = binary_header.sample_format()?;
        let trace_layout = TraceHeader::layout(&options.trace_edits, options.byte_order)?;

        let start_offset = first_trace_offset(&binary_header)?;
        let payload_len = binary_header
            .samples_per_trace()
            .checked_mul(format.byte_size() as u64)
            .filter(|len| len.checked_add(TraceHeader::SIZE as u64).is_some())
            .ok_or_else(|| out_of_range(&binary_header, SAMPLES_PER_TRACE))?;
        let stride = payload_len + TraceHeader::SIZE as u64;
        let data_len = file_size.saturating_sub(start_offset);
        let trace_count = data_len / stride;

        let remainder = data_len % stride;
        if remainder != 0 {
            warn!(
                path = %path.display(),
                remainder,
                stride,
                "file size is not a whole number of traces; ignoring trailing bytes"
            );
        }

        debug!(
            path = %path.display(),
            trace_count,
            stride,
            start_offset,
            format = %format,
            "opened SEG-Y file"
        );

        let indexer = TraceIndexer::new(
            &path,
            start_offset,
            payload_len,
            trace_count,
            trace_layout,
            format,
        )?;

        Ok(Self {
            path,
            options,
            text_header,
            binary_header,
            format,
            indexer,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> &SegyOptions {
        &self.options
    }

    pub fn text_header(&self) -> &TextHeader {
        &self.text_header
    }

    pub fn binary_header(&self) -> &BinaryHeader {
        &self.binary_header
    }

    pub fn sample_format(&self) -> SampleFormat {
        self.format
    }

    pub fn samples_per_trace(&self) -> u64 {
        self.binary_header.samples_per_trace()
    }

    pub fn trace_count(&self) -> u64 {
        self.indexer.len()
    }

    /// Random access to trace headers and samples.
    pub fn traces(&self) -> &TraceIndexer {
        &self.indexer
    }
}

/// Traces follow the binary header and any extended textual headers.
/// A variable count (`-1`) cannot be located without scanning the file and
/// is treated as zero.
fn first_trace_offset(binary_header: &BinaryHeader) -> Result<u64> {
    let base = BinaryHeader::OFFSET + BinaryHeader::SIZE as u64;
    let extended = binary_header.extended_text_header_count();
    if binary_header.major_revision() < 1 || extended <= 0 {
        return Ok(base);
    }
    (extended as u64)
        .checked_mul(TextHeader::SIZE as u64)
        .and_then(|len| len.checked_add(base))
        .ok_or_else(|| out_of_range(binary_header, EXTENDED_TEXT_HEADER_COUNT))
}

fn out_of_range(binary_header: &BinaryHeader, field: &str) -> SegyError {
    SegyError::ValueOutOfRange {
        field: field.to_string(),
        value: binary_header[field],
    }
}
