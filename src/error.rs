//! Error types for SEG-Y decoding and trace indexing.

use thiserror::Error;

use crate::types::Value;

#[derive(Debug, Error)]
pub enum SegyError {
    #[error("layout schema has no fields")]
    EmptySchema,

    #[error("field `{0}` appears more than once in the layout")]
    DuplicateField(String),

    #[error("field `{0}` is flagged as IBM float but is not a 32-bit integer")]
    InvalidIbmField(String),

    #[error("no field named `{0}` in the layout")]
    UnknownField(String),

    #[error("buffer too short for field `{field}`: expected at least {needed} bytes, got {actual}")]
    BufferTooShort {
        field: String,
        needed: usize,
        actual: usize,
    },

    #[error("unsupported sample format {code} ({name})")]
    UnsupportedFormat { code: i64, name: &'static str },

    #[error("field `{field}` holds {value}, which is out of range")]
    ValueOutOfRange { field: String, value: Value },

    #[error("trace index {index} out of range for {trace_count} traces")]
    IndexOutOfRange { index: i64, trace_count: u64 },

    #[error("invalid trace range: {0}")]
    InvalidRange(&'static str),

    #[error("optional dependency `{0}` is not available")]
    MissingOptionalDependency(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl SegyError {
    /// True for errors caused by a malformed schema, a buffer that does not
    /// fit the schema, or a decoded value the file geometry cannot use.
    pub fn is_layout_error(&self) -> bool {
        matches!(
            self,
            Self::EmptySchema
                | Self::DuplicateField(_)
                | Self::InvalidIbmField(_)
                | Self::UnknownField(_)
                | Self::BufferTooShort { .. }
                | Self::ValueOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SegyError>;
