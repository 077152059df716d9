//! Writes small SEG-Y files for the integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use segy_rs::ByteOrder;

pub const TEXT_HEADER_LEN: usize = 3200;
pub const BINARY_HEADER_LEN: usize = 400;
pub const TRACE_HEADER_LEN: usize = 240;

/// IBM encodings of 1.0, -1.0, 16.0 and -118.625.
pub const IBM_SAMPLES: [u32; 4] = [0x4110_0000, 0xC110_0000, 0x4210_0000, 0xC276_A000];

/// A file whose trace `i` carries `TRACE_NO_LINE = i + 1`, `CDP = 100 + i`,
/// `INLINE = 10 + i / 3`, `CROSSLINE = 20 + i % 3`,
/// `CDP_X = 400_000 + 25 * i` and `CDP_Y = 6_000_000 + 25 * i`, both
/// scaled by `coordinate_scalar`.
#[derive(Debug, Clone)]
pub struct SegyBuilder {
    pub byte_order: ByteOrder,
    pub traces: u32,
    pub samples: u16,
    pub format_code: u16,
    pub coordinate_scalar: i16,
    pub text: String,
}

impl Default for SegyBuilder {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::Big,
            traces: 12,
            samples: 4,
            format_code: 1,
            coordinate_scalar: -10,
            text: "C 1 CLIENT: SYNTHETIC SURVEY".to_string(),
        }
    }
}

impl SegyBuilder {
    fn put<const N: usize>(&self, buf: &mut [u8], at: usize, be: [u8; N]) {
        let mut bytes = be;
        if self.byte_order == ByteOrder::Little {
            bytes.reverse();
        }
        buf[at..at + N].copy_from_slice(&bytes);
    }

    fn text_header(&self) -> Vec<u8> {
        let mut raw = vec![b' '; TEXT_HEADER_LEN];
        let text = self.text.as_bytes();
        raw[..text.len()].copy_from_slice(text);
        raw
    }

    fn binary_header(&self) -> Vec<u8> {
        let mut raw = vec![0u8; BINARY_HEADER_LEN];
        self.put(&mut raw, 0, 7i32.to_be_bytes());
        self.put(&mut raw, 16, 4000u16.to_be_bytes());
        self.put(&mut raw, 20, self.samples.to_be_bytes());
        self.put(&mut raw, 24, self.format_code.to_be_bytes());
        raw[300] = 1;
        raw
    }

    pub fn trace_header(&self, trace: u32) -> Vec<u8> {
        let i = trace as i32;
        let mut raw = vec![0u8; TRACE_HEADER_LEN];
        self.put(&mut raw, 0, (i + 1).to_be_bytes());
        self.put(&mut raw, 20, (100 + i).to_be_bytes());
        self.put(&mut raw, 70, self.coordinate_scalar.to_be_bytes());
        self.put(&mut raw, 114, self.samples.to_be_bytes());
        self.put(&mut raw, 180, (400_000 + 25 * i).to_be_bytes());
        self.put(&mut raw, 184, (6_000_000 + 25 * i).to_be_bytes());
        self.put(&mut raw, 188, (10 + i / 3).to_be_bytes());
        self.put(&mut raw, 192, (20 + i % 3).to_be_bytes());
        raw
    }

    fn payload(&self) -> Vec<u8> {
        let mut raw = Vec::new();
        for n in 0..self.samples as usize {
            match self.format_code {
                1 => {
                    let mut b = IBM_SAMPLES[n % IBM_SAMPLES.len()].to_be_bytes();
                    if self.byte_order == ByteOrder::Little {
                        b.reverse();
                    }
                    raw.extend_from_slice(&b);
                }
                5 => {
                    let v = n as f32 * 0.5;
                    match self.byte_order {
                        ByteOrder::Big => raw.extend_from_slice(&v.to_be_bytes()),
                        ByteOrder::Little => raw.extend_from_slice(&v.to_le_bytes()),
                    }
                }
                3 => {
                    let v = n as i16 - 2;
                    match self.byte_order {
                        ByteOrder::Big => raw.extend_from_slice(&v.to_be_bytes()),
                        ByteOrder::Little => raw.extend_from_slice(&v.to_le_bytes()),
                    }
                }
                other => panic!("fixture does not write format {other}"),
            }
        }
        raw
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut data = self.text_header();
        data.extend(self.binary_header());
        let payload = self.payload();
        for trace in 0..self.traces {
            data.extend(self.trace_header(trace));
            data.extend_from_slice(&payload);
        }
        data
    }

    pub fn write(&self) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("survey.sgy");
        let mut file = std::fs::File::create(&path).expect("create segy file");
        file.write_all(&self.to_bytes()).expect("write segy file");
        (dir, path)
    }
}

/// Route library logs to the test output; safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("segy_rs=trace")
        .try_init();
}
