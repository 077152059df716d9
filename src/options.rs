//! Options accepted when opening a SEG-Y file.
//!
//! Build them in code with the `with_*` methods or load them from JSON:
//!
//! ```
//! use segy_rs::{ByteOrder, SegyOptions};
//!
//! let opts = SegyOptions::from_json_str(r#"{
//!     "byte_order": "little",
//!     "trace_edits": { "INLINE": { "offset": 8, "primitive": "int32" } },
//!     "binary_overrides": { "SAMPLE_FORMAT_CODE": 5 }
//! }"#).unwrap();
//!
//! assert_eq!(opts.byte_order, ByteOrder::Little);
//! assert_eq!(opts.text_encoding, "ebcdic-cp-be");
//! assert_eq!(opts.trace_edits.len(), 1);
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::Result;
use crate::layout::{FieldSpec, LayoutEdits};
use crate::record::ValueOverrides;
use crate::types::{ByteOrder, Value};

pub const DEFAULT_TEXT_ENCODING: &str = "ebcdic-cp-be";

/// Decode configuration for one file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SegyOptions {
    /// Encoding name handed to the textual header decoder.
    pub text_encoding: String,
    /// Overlay on the standard binary header table.
    pub binary_edits: LayoutEdits,
    /// Overlay on the standard trace header table.
    pub trace_edits: LayoutEdits,
    /// Values replacing decoded binary header fields.
    pub binary_overrides: ValueOverrides,
    /// Byte order of every header and sample.
    pub byte_order: ByteOrder,
}

impl SegyOptions {
    pub fn new() -> Self {
        Self {
            text_encoding: DEFAULT_TEXT_ENCODING.to_string(),
            binary_edits: LayoutEdits::new(),
            trace_edits: LayoutEdits::new(),
            binary_overrides: ValueOverrides::new(),
            byte_order: ByteOrder::Big,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn with_text_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.text_encoding = encoding.into();
        self
    }

    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Add or replace one binary header field definition.
    pub fn with_binary_edit(mut self, field: FieldSpec) -> Self {
        self.binary_edits = self.binary_edits.with_field(field);
        self
    }

    /// Add or replace one trace header field definition.
    pub fn with_trace_edit(mut self, field: FieldSpec) -> Self {
        self.trace_edits = self.trace_edits.with_field(field);
        self
    }

    /// Replace a decoded binary header value.
    pub fn with_binary_override(
        mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.binary_overrides = self.binary_overrides.with_value(name, value);
        self
    }
}

impl Default for SegyOptions {
    fn default() -> Self {
        Self::new()
    }
}
