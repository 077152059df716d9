//! Decode trace sample payloads.

use crate::format::SampleFormat;
use crate::ibm::ibm_to_f64;
use crate::types::{ByteOrder, FromBytes};
use crate::{Result, SegyError};

/// Decoded sample data.
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    Int(Vec<i64>),
    UInt(Vec<u64>),
    Float(Vec<f32>),
    Double(Vec<f64>),
}

impl Samples {
    pub fn len(&self) -> usize {
        match self {
            Samples::Int(v) => v.len(),
            Samples::UInt(v) => v.len(),
            Samples::Float(v) => v.len(),
            Samples::Double(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Widen every sample to `f64`.
    pub fn to_f64(&self) -> Vec<f64> {
        match self {
            Samples::Int(v) => v.iter().map(|&s| s as f64).collect(),
            Samples::UInt(v) => v.iter().map(|&s| s as f64).collect(),
            Samples::Float(v) => v.iter().map(|&s| s as f64).collect(),
            Samples::Double(v) => v.clone(),
        }
    }
}

/// Decode as many whole samples as `data` holds.
///
/// IBM floats are converted to `f64`; other formats keep their native
/// width class. Trailing bytes that do not form a whole sample are ignored.
pub fn decode_samples(data: &[u8], format: SampleFormat, byte_order: ByteOrder) -> Result<Samples> {
    let size = format.sample_size()?;
    let count = data.len() / size;

    let samples = match format {
        SampleFormat::IbmFloat => Samples::Double(
            read_all::<u32>(data, count, byte_order)
                .map(ibm_to_f64)
                .collect(),
        ),
        SampleFormat::Int8 => Samples::Int(data.iter().map(|&b| b as i8 as i64).collect()),
        SampleFormat::Int16 => Samples::Int(
            read_all::<i16>(data, count, byte_order)
                .map(i64::from)
                .collect(),
        ),
        SampleFormat::Int32 => Samples::Int(
            read_all::<i32>(data, count, byte_order)
                .map(i64::from)
                .collect(),
        ),
        SampleFormat::Int64 => Samples::Int(read_all::<i64>(data, count, byte_order).collect()),
        SampleFormat::UInt8 => Samples::UInt(data.iter().map(|&b| b as u64).collect()),
        SampleFormat::UInt16 => Samples::UInt(
            read_all::<u16>(data, count, byte_order)
                .map(u64::from)
                .collect(),
        ),
        SampleFormat::UInt32 => Samples::UInt(
            read_all::<u32>(data, count, byte_order)
                .map(u64::from)
                .collect(),
        ),
        SampleFormat::UInt64 => Samples::UInt(read_all::<u64>(data, count, byte_order).collect()),
        SampleFormat::IeeeFloat => {
            Samples::Float(read_all::<f32>(data, count, byte_order).collect())
        }
        SampleFormat::IeeeDouble => {
            Samples::Double(read_all::<f64>(data, count, byte_order).collect())
        }
        SampleFormat::FixedPoint | SampleFormat::Int24 | SampleFormat::UInt24 => {
            let desc = format.descriptor();
            return Err(SegyError::UnsupportedFormat {
                code: desc.code.into(),
                name: desc.name,
            });
        }
    };
    Ok(samples)
}

fn read_all<T: FromBytes>(
    data: &[u8],
    count: usize,
    byte_order: ByteOrder,
) -> impl Iterator<Item = T> + '_ {
    let size = std::mem::size_of::<T>();
    (0..count).map(move |i| T::from_bytes(&data[i * size..], byte_order))
}
