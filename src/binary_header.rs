//! The 400-byte binary file header at byte 3200.
//!
//! Field names are exported as constants so callers can look values up
//! without stringly-typed typos:
//!
//! ```
//! use segy_rs::binary_header::{self, BinaryHeader};
//! use segy_rs::ByteOrder;
//!
//! let mut raw = [0u8; BinaryHeader::SIZE];
//! raw[20..22].copy_from_slice(&1500u16.to_be_bytes());
//! raw[24..26].copy_from_slice(&5u16.to_be_bytes());
//!
//! let header =
//!     BinaryHeader::decode(&raw, &Default::default(), &Default::default(), ByteOrder::Big)
//!         .unwrap();
//! assert_eq!(header.samples_per_trace(), 1500);
//! assert_eq!(header[binary_header::SAMPLE_FORMAT_CODE].as_i64(), 5);
//! ```

use std::io::{Read, Seek, SeekFrom};
use std::ops::Deref;

use crate::format::SampleFormat;
use crate::layout::{CompiledLayout, LayoutEdits, LayoutSchema};
use crate::record::{HeaderRecord, ValueOverrides};
use crate::text::TextHeader;
use crate::types::{ByteOrder, Primitive, Value};
use crate::{Result, SegyError};

pub const JOB_ID: &str = "JOB_ID";
pub const LINE_NO: &str = "LINE_NO";
pub const REEL_NO: &str = "REEL_NO";
pub const DATA_TRACES_PER_ENSEMBLE: &str = "DATA_TRACES_PER_ENSEMBLE";
pub const AUX_TRACES_PER_ENSEMBLE: &str = "AUX_TRACES_PER_ENSEMBLE";
pub const SAMPLE_INTERVAL: &str = "SAMPLE_INTERVAL";
pub const ORIGINAL_SAMPLE_INTERVAL: &str = "ORIGINAL_SAMPLE_INTERVAL";
pub const SAMPLES_PER_TRACE: &str = "SAMPLES_PER_TRACE";
pub const ORIGINAL_SAMPLES_PER_TRACE: &str = "ORIGINAL_SAMPLES_PER_TRACE";
pub const SAMPLE_FORMAT_CODE: &str = "SAMPLE_FORMAT_CODE";
pub const ENSEMBLE_FOLD: &str = "ENSEMBLE_FOLD";
pub const TRACE_SORT_CODE: &str = "TRACE_SORT_CODE";
pub const VERTICAL_SUM_CODE: &str = "VERTICAL_SUM_CODE";
pub const SWEEP_FREQ_START: &str = "SWEEP_FREQ_START";
pub const SWEEP_FREQ_END: &str = "SWEEP_FREQ_END";
pub const SWEEP_LENGTH: &str = "SWEEP_LENGTH";
pub const SWEEP_TYPE: &str = "SWEEP_TYPE";
pub const TRACE_NO_SWEEP_CHANNEL: &str = "TRACE_NO_SWEEP_CHANNEL";
pub const SWEEP_TRACE_TAPER_START: &str = "SWEEP_TRACE_TAPER_START";
pub const SWEEP_TRACE_TAPER_END: &str = "SWEEP_TRACE_TAPER_END";
pub const TAPER_TYPE: &str = "TAPER_TYPE";
pub const CORRELATED_DATA_TRACES: &str = "CORRELATED_DATA_TRACES";
pub const BINARY_GAIN_RECOVERED: &str = "BINARY_GAIN_RECOVERED";
pub const AMPLITUDE_RECOVERY_METHOD: &str = "AMPLITUDE_RECOVERY_METHOD";
pub const MEASUREMENT_SYSTEM: &str = "MEASUREMENT_SYSTEM";
pub const IMPULSE_SIGNAL_POLARITY: &str = "IMPULSE_SIGNAL_POLARITY";
pub const VIBRATORY_POLARITY_CODE: &str = "VIBRATORY_POLARITY_CODE";
pub const EXTENDED_DATA_TRACES_PER_ENSEMBLE: &str = "EXTENDED_DATA_TRACES_PER_ENSEMBLE";
pub const EXTENDED_AUX_TRACES_PER_ENSEMBLE: &str = "EXTENDED_AUX_TRACES_PER_ENSEMBLE";
pub const EXTENDED_SAMPLES_PER_TRACE: &str = "EXTENDED_SAMPLES_PER_TRACE";
pub const EXTENDED_SAMPLE_INTERVAL: &str = "EXTENDED_SAMPLE_INTERVAL";
pub const EXTENDED_ORIGINAL_SAMPLE_INTERVAL: &str = "EXTENDED_ORIGINAL_SAMPLE_INTERVAL";
pub const EXTENDED_ORIGINAL_SAMPLES_PER_TRACE: &str = "EXTENDED_ORIGINAL_SAMPLES_PER_TRACE";
pub const EXTENDED_ENSEMBLE_FOLD: &str = "EXTENDED_ENSEMBLE_FOLD";
pub const ENDIAN_CONSTANT: &str = "ENDIAN_CONSTANT";
pub const MAJOR_SEGY_REV_NO: &str = "MAJOR_SEGY_REV_NO";
pub const MINOR_SEGY_REV_NO: &str = "MINOR_SEGY_REV_NO";
pub const FIXED_LENGTH_TRACE_FLAG: &str = "FIXED_LENGTH_TRACE_FLAG";
pub const EXTENDED_TEXT_HEADER_COUNT: &str = "EXTENDED_TEXT_HEADER_COUNT";
pub const MAX_EXTENDED_TRACE_HEADERS: &str = "MAX_EXTENDED_TRACE_HEADERS";
pub const TIME_BASIS_CODE: &str = "TIME_BASIS_CODE";
pub const TRACES_IN_STREAM: &str = "TRACES_IN_STREAM";
pub const FIRST_TRACE_OFFSET: &str = "FIRST_TRACE_OFFSET";
pub const TRAILER_RECORDS: &str = "TRAILER_RECORDS";

/// Field table in schema order: `(name, offset, primitive)`.
pub static FIELDS: &[(&str, usize, Primitive)] = &[
    (JOB_ID, 0, Primitive::Int32),
    (LINE_NO, 4, Primitive::UInt32),
    (REEL_NO, 8, Primitive::UInt32),
    (DATA_TRACES_PER_ENSEMBLE, 12, Primitive::UInt16),
    (AUX_TRACES_PER_ENSEMBLE, 14, Primitive::UInt16),
    (SAMPLE_INTERVAL, 16, Primitive::UInt16),
    (ORIGINAL_SAMPLE_INTERVAL, 18, Primitive::UInt16),
    (SAMPLES_PER_TRACE, 20, Primitive::UInt16),
    (ORIGINAL_SAMPLES_PER_TRACE, 22, Primitive::UInt16),
    (SAMPLE_FORMAT_CODE, 24, Primitive::UInt16),
    (ENSEMBLE_FOLD, 26, Primitive::UInt16),
    (TRACE_SORT_CODE, 28, Primitive::Int16),
    (VERTICAL_SUM_CODE, 30, Primitive::UInt16),
    (SWEEP_FREQ_START, 32, Primitive::UInt16),
    (SWEEP_FREQ_END, 34, Primitive::UInt16),
    (SWEEP_LENGTH, 36, Primitive::UInt16),
    (SWEEP_TYPE, 38, Primitive::UInt16),
    (TRACE_NO_SWEEP_CHANNEL, 40, Primitive::UInt16),
    (SWEEP_TRACE_TAPER_START, 42, Primitive::UInt16),
    (SWEEP_TRACE_TAPER_END, 44, Primitive::UInt16),
    (TAPER_TYPE, 46, Primitive::UInt16),
    (CORRELATED_DATA_TRACES, 48, Primitive::UInt16),
    (BINARY_GAIN_RECOVERED, 50, Primitive::UInt16),
    (AMPLITUDE_RECOVERY_METHOD, 52, Primitive::UInt16),
    (MEASUREMENT_SYSTEM, 54, Primitive::UInt16),
    (IMPULSE_SIGNAL_POLARITY, 56, Primitive::UInt16),
    (VIBRATORY_POLARITY_CODE, 58, Primitive::UInt16),
    (EXTENDED_DATA_TRACES_PER_ENSEMBLE, 60, Primitive::UInt32),
    (EXTENDED_AUX_TRACES_PER_ENSEMBLE, 64, Primitive::UInt32),
    (EXTENDED_SAMPLES_PER_TRACE, 68, Primitive::UInt32),
    (EXTENDED_SAMPLE_INTERVAL, 72, Primitive::Float64),
    (EXTENDED_ORIGINAL_SAMPLE_INTERVAL, 80, Primitive::Float64),
    (EXTENDED_ORIGINAL_SAMPLES_PER_TRACE, 88, Primitive::UInt32),
    (EXTENDED_ENSEMBLE_FOLD, 92, Primitive::UInt32),
    (ENDIAN_CONSTANT, 96, Primitive::UInt32),
    (MAJOR_SEGY_REV_NO, 300, Primitive::UInt8),
    (MINOR_SEGY_REV_NO, 301, Primitive::UInt8),
    (FIXED_LENGTH_TRACE_FLAG, 302, Primitive::UInt16),
    (EXTENDED_TEXT_HEADER_COUNT, 304, Primitive::Int16),
    (MAX_EXTENDED_TRACE_HEADERS, 306, Primitive::UInt32),
    (TIME_BASIS_CODE, 310, Primitive::UInt16),
    (TRACES_IN_STREAM, 312, Primitive::UInt64),
    (FIRST_TRACE_OFFSET, 320, Primitive::UInt64),
    (TRAILER_RECORDS, 328, Primitive::Int32),
];

/// Decoded binary file header.
///
/// Dereferences to [`HeaderRecord`] for by-name access.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryHeader {
    record: HeaderRecord,
}

impl BinaryHeader {
    pub const SIZE: usize = 400;
    /// Byte offset of the binary header in the file.
    pub const OFFSET: u64 = TextHeader::SIZE as u64;

    /// The standard field table.
    pub fn schema() -> LayoutSchema {
        LayoutSchema::from_table(FIELDS)
    }

    /// Standard table with `edits` overlaid, compiled for `byte_order`.
    pub fn layout(edits: &LayoutEdits, byte_order: ByteOrder) -> Result<CompiledLayout> {
        Self::schema().with_edits(edits).compile(byte_order)
    }

    /// Decode a 400-byte binary header.
    pub fn decode(
        data: &[u8],
        edits: &LayoutEdits,
        overrides: &ValueOverrides,
        byte_order: ByteOrder,
    ) -> Result<Self> {
        let record = Self::layout(edits, byte_order)?.decode_with_overrides(data, overrides)?;
        Ok(Self { record })
    }

    /// Seek to byte 3200 and decode the binary header.
    pub fn from_reader<R: Read + Seek>(
        reader: &mut R,
        edits: &LayoutEdits,
        overrides: &ValueOverrides,
        byte_order: ByteOrder,
    ) -> Result<Self> {
        reader.seek(SeekFrom::Start(Self::OFFSET))?;
        let mut data = Vec::with_capacity(Self::SIZE);
        reader.take(Self::SIZE as u64).read_to_end(&mut data)?;
        Self::decode(&data, edits, overrides, byte_order)
    }

    pub fn record(&self) -> &HeaderRecord {
        &self.record
    }

    // Standard fields survive edits (edits replace or append, never
    // remove), so direct indexing below cannot miss.

    pub fn job_id(&self) -> i64 {
        self.record[JOB_ID].as_i64()
    }

    pub fn sample_interval(&self) -> i64 {
        self.record[SAMPLE_INTERVAL].as_i64()
    }

    /// Negative values read as zero.
    pub fn samples_per_trace(&self) -> u64 {
        unsigned(self.record[SAMPLES_PER_TRACE])
    }

    /// The raw code, which may lie outside `u16` after an edit or override.
    pub fn sample_format_code(&self) -> i64 {
        self.record[SAMPLE_FORMAT_CODE].as_i64()
    }

    /// Sample format of the trace payloads. Unknown codes fail with
    /// `UnsupportedFormat`.
    pub fn sample_format(&self) -> Result<SampleFormat> {
        let code = self.sample_format_code();
        match u16::try_from(code) {
            Ok(code) => SampleFormat::from_code(code),
            Err(_) => Err(SegyError::UnsupportedFormat {
                code,
                name: "UNKNOWN",
            }),
        }
    }

    pub fn major_revision(&self) -> i64 {
        self.record[MAJOR_SEGY_REV_NO].as_i64()
    }

    pub fn minor_revision(&self) -> i64 {
        self.record[MINOR_SEGY_REV_NO].as_i64()
    }

    /// Number of 3200-byte extended textual headers after the binary
    /// header. Only meaningful from revision 1 on; `-1` means variable.
    pub fn extended_text_header_count(&self) -> i64 {
        self.record[EXTENDED_TEXT_HEADER_COUNT].as_i64()
    }

    pub fn traces_in_stream(&self) -> u64 {
        unsigned(self.record[TRACES_IN_STREAM])
    }

    pub fn first_trace_offset(&self) -> u64 {
        unsigned(self.record[FIRST_TRACE_OFFSET])
    }
}

/// Counts and offsets: negatives clamp to zero, floats saturate.
fn unsigned(value: Value) -> u64 {
    match value {
        Value::Int(v) => v.max(0) as u64,
        Value::UInt(v) => v,
        Value::Float(v) => v as u64,
    }
}

impl Deref for BinaryHeader {
    type Target = HeaderRecord;

    fn deref(&self) -> &HeaderRecord {
        &self.record
    }
}
