//! Shared types: [`ByteOrder`], [`Primitive`], and [`Value`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Byte order for multi-byte fields in a SEG-Y file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// SEG-Y standard byte order.
    #[default]
    Big,
    Little,
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Big => write!(f, "big-endian"),
            Self::Little => write!(f, "little-endian"),
        }
    }
}

/// Fixed-width primitive a header field or sample is stored as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float32,
    Float64,
}

impl Primitive {
    /// Size of one value in bytes.
    pub const fn size(self) -> usize {
        match self {
            Self::Int8 | Self::UInt8 => 1,
            Self::Int16 | Self::UInt16 => 2,
            Self::Int32 | Self::UInt32 | Self::Float32 => 4,
            Self::Int64 | Self::UInt64 | Self::Float64 => 8,
        }
    }

    /// Read one value from the start of `bytes`.
    ///
    /// The caller guarantees `bytes.len() >= self.size()`.
    pub fn read(self, bytes: &[u8], order: ByteOrder) -> Value {
        match self {
            Self::Int8 => Value::Int(bytes[0] as i8 as i64),
            Self::UInt8 => Value::UInt(bytes[0] as u64),
            Self::Int16 => Value::Int(i16::from_bytes(bytes, order) as i64),
            Self::UInt16 => Value::UInt(u16::from_bytes(bytes, order) as u64),
            Self::Int32 => Value::Int(i32::from_bytes(bytes, order) as i64),
            Self::UInt32 => Value::UInt(u32::from_bytes(bytes, order) as u64),
            Self::Int64 => Value::Int(i64::from_bytes(bytes, order)),
            Self::UInt64 => Value::UInt(u64::from_bytes(bytes, order)),
            Self::Float32 => Value::Float(f32::from_bytes(bytes, order) as f64),
            Self::Float64 => Value::Float(f64::from_bytes(bytes, order)),
        }
    }

    /// True for the 32-bit integer primitives that can carry a raw IBM float.
    pub const fn holds_ibm_float(self) -> bool {
        matches!(self, Self::Int32 | Self::UInt32)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int8 => "int8",
            Self::UInt8 => "uint8",
            Self::Int16 => "int16",
            Self::UInt16 => "uint16",
            Self::Int32 => "int32",
            Self::UInt32 => "uint32",
            Self::Int64 => "int64",
            Self::UInt64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
        };
        f.write_str(name)
    }
}

/// Fixed-size numbers readable in either byte order.
pub(crate) trait FromBytes: Sized {
    fn from_bytes(bytes: &[u8], order: ByteOrder) -> Self;
}

macro_rules! impl_from_bytes {
    ($($ty:ty),*) => {
        $(
            impl FromBytes for $ty {
                fn from_bytes(bytes: &[u8], order: ByteOrder) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$ty>()];
                    buf.copy_from_slice(&bytes[..std::mem::size_of::<$ty>()]);
                    match order {
                        ByteOrder::Big => <$ty>::from_be_bytes(buf),
                        ByteOrder::Little => <$ty>::from_le_bytes(buf),
                    }
                }
            }
        )*
    };
}

impl_from_bytes!(i16, u16, i32, u32, i64, u64, f32, f64);

/// A decoded header value.
///
/// Deserializes from a plain JSON number, trying `Int`, then `UInt`, then
/// `Float`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Value {
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::UInt(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// Integer view of the value. Floats are truncated toward zero.
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Int(v) => v,
            Self::UInt(v) => v as i64,
            Self::Float(v) => v as i64,
        }
    }

    /// The low 32 bits of an integer value, as stored on disk.
    pub(crate) fn as_u32_bits(self) -> u32 {
        match self {
            Self::Int(v) => v as u32,
            Self::UInt(v) => v as u32,
            Self::Float(v) => (v as f32).to_bits(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::UInt(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}
