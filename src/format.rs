//! Sample format codes from the binary header (bytes 3225-3226).

use std::fmt;

use crate::types::Primitive;
use crate::{Result, SegyError};

/// Sample encoding of the trace payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    /// 4-byte IBM floating point (code 1).
    IbmFloat,
    /// 4-byte two's complement integer (code 2).
    Int32,
    /// 2-byte two's complement integer (code 3).
    Int16,
    /// 4-byte fixed point with gain, obsolete (code 4).
    FixedPoint,
    /// 4-byte IEEE float (code 5).
    IeeeFloat,
    /// 8-byte IEEE double (code 6).
    IeeeDouble,
    /// 3-byte two's complement integer (code 7).
    Int24,
    /// 1-byte two's complement integer (code 8).
    Int8,
    /// 8-byte two's complement integer (code 9).
    Int64,
    /// 4-byte unsigned integer (code 10).
    UInt32,
    /// 2-byte unsigned integer (code 11).
    UInt16,
    /// 8-byte unsigned integer (code 12).
    UInt64,
    /// 3-byte unsigned integer (code 13).
    UInt24,
    /// 1-byte unsigned integer (code 14).
    UInt8,
}

/// Static description of one format code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleFormatDescriptor {
    pub code: u16,
    pub name: &'static str,
    /// Primitive each sample is read as; `None` when there is no codec.
    pub primitive: Option<Primitive>,
    pub byte_size: usize,
    pub supported: bool,
}

const fn supported(code: u16, name: &'static str, primitive: Primitive) -> SampleFormatDescriptor {
    SampleFormatDescriptor {
        code,
        name,
        primitive: Some(primitive),
        byte_size: primitive.size(),
        supported: true,
    }
}

const fn unsupported(code: u16, name: &'static str, byte_size: usize) -> SampleFormatDescriptor {
    SampleFormatDescriptor {
        code,
        name,
        primitive: None,
        byte_size,
        supported: false,
    }
}

/// Registry indexed by `code - 1`.
static DESCRIPTORS: [SampleFormatDescriptor; 14] = [
    supported(1, "IBM_FLOAT", Primitive::UInt32),
    supported(2, "INT32", Primitive::Int32),
    supported(3, "INT16", Primitive::Int16),
    unsupported(4, "FIXED_POINT", 4),
    supported(5, "IEEE_FLOAT", Primitive::Float32),
    supported(6, "IEEE_DOUBLE", Primitive::Float64),
    unsupported(7, "INT24", 3),
    supported(8, "CHAR", Primitive::Int8),
    supported(9, "INT64", Primitive::Int64),
    supported(10, "UINT32", Primitive::UInt32),
    supported(11, "UINT16", Primitive::UInt16),
    supported(12, "UINT64", Primitive::UInt64),
    unsupported(13, "UINT24", 3),
    supported(14, "UCHAR", Primitive::UInt8),
];

impl SampleFormat {
    /// Convert a raw format code to a `SampleFormat`.
    ///
    /// Codes outside 1-14 have no codec and are reported as unsupported.
    pub fn from_code(code: u16) -> Result<Self> {
        match code {
            1 => Ok(Self::IbmFloat),
            2 => Ok(Self::Int32),
            3 => Ok(Self::Int16),
            4 => Ok(Self::FixedPoint),
            5 => Ok(Self::IeeeFloat),
            6 => Ok(Self::IeeeDouble),
            7 => Ok(Self::Int24),
            8 => Ok(Self::Int8),
            9 => Ok(Self::Int64),
            10 => Ok(Self::UInt32),
            11 => Ok(Self::UInt16),
            12 => Ok(Self::UInt64),
            13 => Ok(Self::UInt24),
            14 => Ok(Self::UInt8),
            _ => Err(SegyError::UnsupportedFormat {
                code: code.into(),
                name: "UNKNOWN",
            }),
        }
    }

    pub fn to_code(self) -> u16 {
        match self {
            Self::IbmFloat => 1,
            Self::Int32 => 2,
            Self::Int16 => 3,
            Self::FixedPoint => 4,
            Self::IeeeFloat => 5,
            Self::IeeeDouble => 6,
            Self::Int24 => 7,
            Self::Int8 => 8,
            Self::Int64 => 9,
            Self::UInt32 => 10,
            Self::UInt16 => 11,
            Self::UInt64 => 12,
            Self::UInt24 => 13,
            Self::UInt8 => 14,
        }
    }

    pub fn descriptor(self) -> &'static SampleFormatDescriptor {
        &DESCRIPTORS[self.to_code() as usize - 1]
    }

    pub fn is_supported(self) -> bool {
        self.descriptor().supported
    }

    /// Primitive the samples are read as, or `UnsupportedFormat`.
    pub fn primitive(self) -> Result<Primitive> {
        let desc = self.descriptor();
        desc.primitive.ok_or(SegyError::UnsupportedFormat {
            code: desc.code.into(),
            name: desc.name,
        })
    }

    /// Bytes per sample on disk, known even for formats without a codec.
    pub fn byte_size(self) -> usize {
        self.descriptor().byte_size
    }

    /// Bytes per decodable sample. Fails for formats without a codec.
    pub fn sample_size(self) -> Result<usize> {
        self.primitive().map(Primitive::size)
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().name)
    }
}
