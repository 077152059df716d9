//! Random access to trace headers by index.
//!
//! Traces sit at a fixed stride after the file headers, so the byte offset
//! of any trace is computed directly. Every call opens the file, reads what
//! it needs, and closes it again; nothing decoded is cached, and the indexer
//! holds no mutable state, so it can be shared freely between threads.

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::format::SampleFormat;
use crate::samples::{Samples, decode_samples};
use crate::trace_header::{TraceHeader, TraceLayout};
use crate::types::{ByteOrder, Value};
use crate::{Result, SegyError};

/// A `start`, `stop`, `step` selection of trace indices.
///
/// Unset bounds default to `0`, the trace count, and `1`. Negative indices
/// count from the end and are resolved per element, so `-3..0` with step
/// `1` selects the last three traces in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraceRange {
    pub start: Option<i64>,
    pub stop: Option<i64>,
    pub step: Option<i64>,
}

impl TraceRange {
    /// Every trace.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, start: i64) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_stop(mut self, stop: i64) -> Self {
        self.stop = Some(stop);
        self
    }

    pub fn with_step(mut self, step: i64) -> Self {
        self.step = Some(step);
        self
    }

    /// Indices selected for a file of `trace_count` traces, in request order.
    pub fn indices(&self, trace_count: u64) -> Result<impl Iterator<Item = i64>> {
        let start = self.start.unwrap_or(0);
        let stop = self.stop.unwrap_or(trace_count as i64);
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(SegyError::InvalidRange("step must not be zero"));
        }

        let mut next = Some(start);
        Ok(std::iter::from_fn(move || {
            let index = next?;
            let in_range = if step > 0 { index < stop } else { index > stop };
            if !in_range {
                next = None;
                return None;
            }
            next = index.checked_add(step);
            Some(index)
        }))
    }
}

impl From<Range<i64>> for TraceRange {
    fn from(r: Range<i64>) -> Self {
        Self::new().with_start(r.start).with_stop(r.end)
    }
}

impl From<RangeFrom<i64>> for TraceRange {
    fn from(r: RangeFrom<i64>) -> Self {
        Self::new().with_start(r.start)
    }
}

impl From<RangeTo<i64>> for TraceRange {
    fn from(r: RangeTo<i64>) -> Self {
        Self::new().with_stop(r.end)
    }
}

impl From<RangeFull> for TraceRange {
    fn from(_: RangeFull) -> Self {
        Self::new()
    }
}

/// Fixed-stride index over the traces of one file.
#[derive(Debug, Clone)]
pub struct TraceIndexer {
    path: PathBuf,
    start_offset: u64,
    stride: u64,
    trace_count: u64,
    layout: TraceLayout,
    format: SampleFormat,
}

impl TraceIndexer {
    /// `payload_len` is the byte length of one trace's samples; the stride
    /// is that plus the 240-byte trace header and must fit in a `u64`.
    pub fn new(
        path: impl Into<PathBuf>,
        start_offset: u64,
        payload_len: u64,
        trace_count: u64,
        layout: TraceLayout,
        format: SampleFormat,
    ) -> Result<Self> {
        let stride = payload_len
            .checked_add(TraceHeader::SIZE as u64)
            .ok_or_else(|| SegyError::ValueOutOfRange {
                field: "TRACE_SAMPLES".into(),
                value: Value::UInt(payload_len),
            })?;
        Ok(Self {
            path: path.into(),
            start_offset,
            stride,
            trace_count,
            layout,
            format,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn start_offset(&self) -> u64 {
        self.start_offset
    }

    /// Bytes from one trace header to the next.
    pub fn stride(&self) -> u64 {
        self.stride
    }

    pub fn len(&self) -> u64 {
        self.trace_count
    }

    pub fn is_empty(&self) -> bool {
        self.trace_count == 0
    }

    pub fn layout(&self) -> &TraceLayout {
        &self.layout
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.layout.byte_order()
    }

    /// File offset of trace `index`. Negative indices count from the end.
    pub fn offset_of(&self, index: i64) -> Result<u64> {
        let count = self.trace_count as i64;
        if index >= count || index < -count {
            return Err(SegyError::IndexOutOfRange {
                index,
                trace_count: self.trace_count,
            });
        }
        let position = if index >= 0 { index } else { index + count };
        self.stride
            .checked_mul(position as u64)
            .and_then(|offset| offset.checked_add(self.start_offset))
            .ok_or(SegyError::IndexOutOfRange {
                index,
                trace_count: self.trace_count,
            })
    }

    /// Read and decode the header of trace `index`.
    pub fn read_header(&self, index: i64) -> Result<TraceHeader> {
        // validate before touching the file
        self.offset_of(index)?;
        let mut reader = self.open()?;
        self.read_header_from(&mut reader, index)
    }

    /// Read the headers selected by `range`, in the order the range yields
    /// them. One file handle serves the whole range.
    pub fn read_range(&self, range: impl Into<TraceRange>) -> Result<Vec<TraceHeader>> {
        let range = range.into();
        let indices = range.indices(self.trace_count)?;
        let mut reader = self.open()?;
        let headers = indices
            .map(|index| self.read_header_from(&mut reader, index))
            .collect::<Result<Vec<_>>>()?;
        debug!(
            path = %self.path.display(),
            ?range,
            count = headers.len(),
            "read trace header range"
        );
        Ok(headers)
    }

    /// Read and decode the samples of trace `index`.
    pub fn read_samples(&self, index: i64) -> Result<Samples> {
        let offset = self.offset_of(index)? + TraceHeader::SIZE as u64;
        let payload_len = self.stride - TraceHeader::SIZE as u64;
        let mut reader = self.open()?;
        reader.seek(SeekFrom::Start(offset))?;
        let mut payload = Vec::with_capacity(payload_len as usize);
        reader.take(payload_len).read_to_end(&mut payload)?;
        if (payload.len() as u64) < payload_len {
            return Err(SegyError::BufferTooShort {
                field: "TRACE_SAMPLES".into(),
                needed: payload_len as usize,
                actual: payload.len(),
            });
        }
        decode_samples(&payload, self.format, self.byte_order())
    }

    fn open(&self) -> Result<BufReader<File>> {
        Ok(BufReader::with_capacity(
            TraceHeader::SIZE,
            File::open(&self.path)?,
        ))
    }

    fn read_header_from<R: Read + Seek>(&self, reader: &mut R, index: i64) -> Result<TraceHeader> {
        let offset = self.offset_of(index)?;
        trace!(index, offset, "reading trace header");
        reader.seek(SeekFrom::Start(offset))?;
        let mut buf = Vec::with_capacity(TraceHeader::SIZE);
        reader.take(TraceHeader::SIZE as u64).read_to_end(&mut buf)?;
        TraceHeader::decode(&self.layout, &buf)
    }
}
