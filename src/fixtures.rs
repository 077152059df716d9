//! Synthetic SEG-Y files for unit tests.

use std::io::Write;
use std::path::PathBuf;

use crate::binary_header::BinaryHeader;
use crate::text::TextHeader;
use crate::trace_header::TraceHeader;

/// Big-endian file description. Trace `i` (0-based) carries
/// `TRACE_NO_LINE = i + 1`, `CDP = 100 + i`, `SP = 10 * (i + 1)`,
/// `INLINE = 1000 + i`, `CROSSLINE = 2000 + i`, and coordinates
/// `CDP_X = 50_000 + 100 * i`, `CDP_Y = 70_000 - 100 * i`.
#[derive(Debug, Clone)]
pub(crate) struct SyntheticSegy {
    pub traces: u64,
    pub samples: u16,
    pub format_code: u16,
    pub coordinate_scalar: i16,
    pub sp_scalar: i16,
    pub major_revision: u8,
    pub extended_headers: i16,
    pub trailing_bytes: usize,
}

impl Default for SyntheticSegy {
    fn default() -> Self {
        Self {
            traces: 5,
            samples: 4,
            format_code: 3,
            coordinate_scalar: -100,
            sp_scalar: 0,
            major_revision: 1,
            extended_headers: 0,
            trailing_bytes: 0,
        }
    }
}

impl SyntheticSegy {
    pub fn sample_size(&self) -> usize {
        match self.format_code {
            3 | 11 => 2,
            6 | 9 | 12 => 8,
            7 | 13 => 3,
            8 | 14 => 1,
            _ => 4,
        }
    }

    pub fn binary_header(&self) -> Vec<u8> {
        let mut raw = vec![0u8; BinaryHeader::SIZE];
        raw[16..18].copy_from_slice(&2000u16.to_be_bytes());
        raw[20..22].copy_from_slice(&self.samples.to_be_bytes());
        raw[24..26].copy_from_slice(&self.format_code.to_be_bytes());
        raw[300] = self.major_revision;
        raw[304..306].copy_from_slice(&self.extended_headers.to_be_bytes());
        raw
    }

    pub fn trace_header(&self, trace: u64) -> Vec<u8> {
        let i = trace as i32;
        let mut raw = vec![0u8; TraceHeader::SIZE];
        raw[0..4].copy_from_slice(&(i + 1).to_be_bytes());
        raw[16..20].copy_from_slice(&(10 * (i + 1)).to_be_bytes());
        raw[20..24].copy_from_slice(&(100 + i).to_be_bytes());
        raw[70..72].copy_from_slice(&self.coordinate_scalar.to_be_bytes());
        raw[114..116].copy_from_slice(&(self.samples as i16).to_be_bytes());
        raw[180..184].copy_from_slice(&(50_000 + 100 * i).to_be_bytes());
        raw[184..188].copy_from_slice(&(70_000 - 100 * i).to_be_bytes());
        raw[188..192].copy_from_slice(&(1000 + i).to_be_bytes());
        raw[192..196].copy_from_slice(&(2000 + i).to_be_bytes());
        raw[200..202].copy_from_slice(&self.sp_scalar.to_be_bytes());
        raw
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend(std::iter::repeat_n(0x40u8, TextHeader::SIZE));
        data.extend(self.binary_header());
        if self.major_revision >= 1 && self.extended_headers > 0 {
            data.extend(std::iter::repeat_n(
                0x40u8,
                TextHeader::SIZE * self.extended_headers as usize,
            ));
        }
        let payload = self.samples as usize * self.sample_size();
        for trace in 0..self.traces {
            data.extend(self.trace_header(trace));
            data.extend(std::iter::repeat_n(trace as u8, payload));
        }
        data.extend(std::iter::repeat_n(0u8, self.trailing_bytes));
        data
    }

    /// Write the file into a fresh temporary directory.
    pub fn write(&self) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("synthetic.sgy");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&self.to_bytes()).unwrap();
        (dir, path)
    }
}
