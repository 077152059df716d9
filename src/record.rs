//! Decoded header records.
//!
//! [`HeaderRecord`] maps field names to [`Value`]s in schema order. It is
//! produced by [`CompiledLayout::decode`] and shares the name index of the
//! layout that produced it, so records are cheap to create and look up.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use crate::ibm::ibm_to_f64;
use crate::layout::CompiledLayout;
use crate::types::Value;
use crate::{Result, SegyError};

/// Name to slot mapping shared by a layout and every record it decodes.
#[derive(Debug)]
pub(crate) struct FieldIndex {
    names: Vec<String>,
    slots: HashMap<String, usize>,
}

impl FieldIndex {
    pub(crate) fn new(names: Vec<String>) -> Self {
        let slots = names
            .iter()
            .enumerate()
            .map(|(slot, name)| (name.clone(), slot))
            .collect();
        Self { names, slots }
    }

    pub(crate) fn names(&self) -> &[String] {
        &self.names
    }

    fn slot(&self, name: &str) -> Option<usize> {
        self.slots.get(name).copied()
    }
}

/// One decoded header: field name to value, in schema order.
#[derive(Debug, Clone)]
pub struct HeaderRecord {
    index: Arc<FieldIndex>,
    values: Vec<Value>,
}

impl HeaderRecord {
    pub fn get(&self, name: &str) -> Option<Value> {
        self.index.slot(name).map(|slot| self.values[slot])
    }

    /// Like [`get`](Self::get), but a missing field is an error.
    pub fn require(&self, name: &str) -> Result<Value> {
        self.get(name)
            .ok_or_else(|| SegyError::UnknownField(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.slot(name).is_some()
    }

    /// Replace the value of an existing field.
    pub fn set(&mut self, name: &str, value: Value) -> Result<()> {
        let slot = self
            .index
            .slot(name)
            .ok_or_else(|| SegyError::UnknownField(name.to_string()))?;
        self.values[slot] = value;
        Ok(())
    }

    /// Apply every override in `overrides`.
    pub fn apply_overrides(&mut self, overrides: &ValueOverrides) -> Result<()> {
        for (name, value) in &overrides.values {
            self.set(name, *value)?;
        }
        Ok(())
    }

    /// Iterate `(name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> + '_ {
        self.index
            .names()
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PartialEq for HeaderRecord {
    fn eq(&self, other: &Self) -> bool {
        self.index.names() == other.index.names() && self.values == other.values
    }
}

impl Index<&str> for HeaderRecord {
    type Output = Value;

    /// Panics if the field does not exist; use [`HeaderRecord::get`] to
    /// handle missing fields.
    fn index(&self, name: &str) -> &Value {
        match self.index.slot(name) {
            Some(slot) => &self.values[slot],
            None => panic!("no field named `{name}` in header record"),
        }
    }
}

impl fmt::Display for HeaderRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        f.write_str("}")
    }
}

/// Post-decode value replacements, keyed by field name.
///
/// Deserializes from a JSON object of field name to number.
#[derive(Debug, Clone, PartialEq, Default, serde::Deserialize)]
#[serde(transparent)]
pub struct ValueOverrides {
    values: BTreeMap<String, Value>,
}

impl ValueOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl CompiledLayout {
    /// Decode `buffer` against this layout.
    ///
    /// Each run is unpacked sequentially from its start offset. IBM float
    /// fields are converted once the whole record is assembled.
    pub fn decode(&self, buffer: &[u8]) -> Result<HeaderRecord> {
        let mut values = Vec::with_capacity(self.index.names().len());

        for run in &self.runs {
            let needed = run.end();
            if buffer.len() < needed {
                return Err(SegyError::BufferTooShort {
                    field: run.names[0].clone(),
                    needed,
                    actual: buffer.len(),
                });
            }
            let mut pos = run.start;
            for primitive in &run.primitives {
                values.push(primitive.read(&buffer[pos..], self.byte_order));
                pos += primitive.size();
            }
        }

        for &slot in &self.ibm_slots {
            values[slot] = Value::Float(ibm_to_f64(values[slot].as_u32_bits()));
        }

        Ok(HeaderRecord {
            index: Arc::clone(&self.index),
            values,
        })
    }

    /// Decode and then apply `overrides`.
    pub fn decode_with_overrides(
        &self,
        buffer: &[u8],
        overrides: &ValueOverrides,
    ) -> Result<HeaderRecord> {
        let mut record = self.decode(buffer)?;
        record.apply_overrides(overrides)?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{FieldSpec, LayoutSchema};
    use crate::types::{ByteOrder, Primitive};

    fn schema() -> LayoutSchema {
        LayoutSchema::new(vec![
            FieldSpec::new("A", 0, Primitive::Int16),
            FieldSpec::new("B", 2, Primitive::UInt32),
            FieldSpec::new("C", 10, Primitive::Float32),
        ])
    }

    fn buffer(order: ByteOrder) -> Vec<u8> {
        let mut buf = vec![0u8; 14];
        match order {
            ByteOrder::Big => {
                buf[0..2].copy_from_slice(&(-7i16).to_be_bytes());
                buf[2..6].copy_from_slice(&70_000u32.to_be_bytes());
                buf[10..14].copy_from_slice(&2.5f32.to_be_bytes());
            }
            ByteOrder::Little => {
                buf[0..2].copy_from_slice(&(-7i16).to_le_bytes());
                buf[2..6].copy_from_slice(&70_000u32.to_le_bytes());
                buf[10..14].copy_from_slice(&2.5f32.to_le_bytes());
            }
        }
        buf
    }

    #[test]
    fn test_decode_big_endian() {
        let layout = schema().compile(ByteOrder::Big).unwrap();
        let record = layout.decode(&buffer(ByteOrder::Big)).unwrap();
        assert_eq!(record["A"], Value::Int(-7));
        assert_eq!(record["B"], Value::UInt(70_000));
        assert_eq!(record["C"], Value::Float(2.5));
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_decode_little_endian() {
        let layout = schema().compile(ByteOrder::Little).unwrap();
        let record = layout.decode(&buffer(ByteOrder::Little)).unwrap();
        assert_eq!(record.get("A"), Some(Value::Int(-7)));
        assert_eq!(record.get("B"), Some(Value::UInt(70_000)));
    }

    #[test]
    fn test_short_buffer_names_first_field_of_run() {
        let layout = schema().compile(ByteOrder::Big).unwrap();
        let err = layout.decode(&[0u8; 12]).unwrap_err();
        match err {
            SegyError::BufferTooShort {
                field,
                needed,
                actual,
            } => {
                assert_eq!(field, "C");
                assert_eq!(needed, 14);
                assert_eq!(actual, 12);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ibm_fields_converted_after_decode() {
        let layout = LayoutSchema::new(vec![
            FieldSpec::new("N", 0, Primitive::Int32),
            FieldSpec::ibm("GAIN", 4),
        ])
        .compile(ByteOrder::Big)
        .unwrap();
        let mut buf = vec![0u8; 8];
        buf[0..4].copy_from_slice(&5i32.to_be_bytes());
        buf[4..8].copy_from_slice(&0xC276_A000u32.to_be_bytes());

        let record = layout.decode(&buf).unwrap();
        assert_eq!(record["N"], Value::Int(5));
        assert_eq!(record["GAIN"], Value::Float(-118.625));
    }

    #[test]
    fn test_overlapping_runs_decode_same_bytes() {
        let layout = LayoutSchema::new(vec![
            FieldSpec::new("HI", 0, Primitive::UInt32),
            FieldSpec::new("LO", 4, Primitive::UInt32),
            FieldSpec::new("WIDE", 0, Primitive::UInt64),
        ])
        .compile(ByteOrder::Big)
        .unwrap();
        let buf = 0x0000_0001_0000_0002u64.to_be_bytes();
        let record = layout.decode(&buf).unwrap();
        assert_eq!(record["HI"], Value::UInt(1));
        assert_eq!(record["LO"], Value::UInt(2));
        assert_eq!(record["WIDE"], Value::UInt(0x0000_0001_0000_0002));
    }

    #[test]
    fn test_overrides_replace_values() {
        let layout = schema().compile(ByteOrder::Big).unwrap();
        let overrides = ValueOverrides::new().with_value("B", 3u64);
        let record = layout
            .decode_with_overrides(&buffer(ByteOrder::Big), &overrides)
            .unwrap();
        assert_eq!(record["B"], Value::UInt(3));
        assert_eq!(record["A"], Value::Int(-7));
    }

    #[test]
    fn test_override_of_unknown_field_fails() {
        let layout = schema().compile(ByteOrder::Big).unwrap();
        let overrides = ValueOverrides::new().with_value("NOPE", 1i64);
        let err = layout
            .decode_with_overrides(&buffer(ByteOrder::Big), &overrides)
            .unwrap_err();
        assert!(matches!(err, SegyError::UnknownField(ref n) if n == "NOPE"));
    }

    #[test]
    fn test_iter_in_schema_order() {
        let layout = schema().compile(ByteOrder::Big).unwrap();
        let record = layout.decode(&buffer(ByteOrder::Big)).unwrap();
        let names: Vec<_> = record.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(record.to_string(), "{A: -7, B: 70000, C: 2.5}");
    }

    #[test]
    fn test_require_missing_field() {
        let layout = schema().compile(ByteOrder::Big).unwrap();
        let record = layout.decode(&buffer(ByteOrder::Big)).unwrap();
        assert!(record.require("A").is_ok());
        assert!(matches!(
            record.require("Z"),
            Err(SegyError::UnknownField(_))
        ));
        assert!(!record.contains("Z"));
    }
}
