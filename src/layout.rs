//! Declarative byte layouts and the run compiler.
//!
//! A [`LayoutSchema`] is an ordered list of named fields, each at a byte
//! offset inside a fixed-size header. [`LayoutSchema::compile`] groups the
//! fields into [`DecodeRun`]s: maximal stretches where each field starts
//! exactly where the previous one ended. Each run is unpacked with one
//! sequential read, and gaps between runs are skipped.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::record::FieldIndex;
use crate::types::{ByteOrder, Primitive};
use crate::{Result, SegyError};

/// Position and type of one named value inside a header blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub offset: usize,
    pub primitive: Primitive,
    /// Stored as a raw IBM float; converted after unpacking.
    pub ibm_float: bool,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, offset: usize, primitive: Primitive) -> Self {
        Self {
            name: name.into(),
            offset,
            primitive,
            ibm_float: false,
        }
    }

    /// A 32-bit IBM float field.
    pub fn ibm(name: impl Into<String>, offset: usize) -> Self {
        Self {
            name: name.into(),
            offset,
            primitive: Primitive::UInt32,
            ibm_float: true,
        }
    }

    /// First byte past the end of the field.
    pub fn end(&self) -> usize {
        self.offset + self.primitive.size()
    }
}

/// Ordered collection of fields describing one header type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayoutSchema {
    fields: Vec<FieldSpec>,
}

impl LayoutSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// Build a schema from a static `(name, offset, primitive)` table.
    pub fn from_table(table: &[(&str, usize, Primitive)]) -> Self {
        Self {
            fields: table
                .iter()
                .map(|&(name, offset, primitive)| FieldSpec::new(name, offset, primitive))
                .collect(),
        }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Return a copy of this schema with `edits` overlaid.
    ///
    /// An edit for an existing field replaces it in place; an edit for a new
    /// name is appended. `self` is left untouched.
    pub fn with_edits(&self, edits: &LayoutEdits) -> Self {
        let mut fields = self.fields.clone();
        for edit in &edits.fields {
            match fields.iter_mut().find(|f| f.name == edit.name) {
                Some(existing) => *existing = edit.clone(),
                None => fields.push(edit.clone()),
            }
        }
        Self { fields }
    }

    /// Compile into decode runs for the given byte order.
    ///
    /// Fields are walked in schema order without sorting. A field joins the
    /// active run only if it starts exactly at the run's cursor; a gap or an
    /// overlap (offset below the cursor) starts a new run at the field's own
    /// offset.
    pub fn compile(&self, byte_order: ByteOrder) -> Result<CompiledLayout> {
        let mut fields = self.fields.iter();
        let first = fields.next().ok_or(SegyError::EmptySchema)?;
        self.validate()?;

        let mut runs = Vec::new();
        let mut active = DecodeRun::starting_with(first);
        let mut cursor = first.end();

        for field in fields {
            if field.offset == cursor {
                active.primitives.push(field.primitive);
                active.names.push(field.name.clone());
            } else {
                runs.push(std::mem::replace(
                    &mut active,
                    DecodeRun::starting_with(field),
                ));
            }
            cursor = field.end();
        }
        runs.push(active);

        let ibm_slots = self
            .fields
            .iter()
            .enumerate()
            .filter(|(_, f)| f.ibm_float)
            .map(|(slot, _)| slot)
            .collect();

        Ok(CompiledLayout {
            runs,
            byte_order,
            ibm_slots,
            index: Arc::new(FieldIndex::new(
                self.fields.iter().map(|f| f.name.clone()).collect(),
            )),
        })
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.fields.len());
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SegyError::DuplicateField(field.name.clone()));
            }
            if field.ibm_float && !field.primitive.holds_ibm_float() {
                return Err(SegyError::InvalidIbmField(field.name.clone()));
            }
        }
        Ok(())
    }
}

/// A contiguous group of fields unpacked with one sequential read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeRun {
    pub start: usize,
    pub primitives: Vec<Primitive>,
    pub names: Vec<String>,
}

impl DecodeRun {
    fn starting_with(field: &FieldSpec) -> Self {
        Self {
            start: field.offset,
            primitives: vec![field.primitive],
            names: vec![field.name.clone()],
        }
    }

    /// Total bytes covered by the run.
    pub fn byte_len(&self) -> usize {
        self.primitives.iter().map(|p| p.size()).sum()
    }

    pub fn end(&self) -> usize {
        self.start + self.byte_len()
    }
}

impl fmt::Display for DecodeRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{} [", self.start)?;
        for (i, (name, prim)) in self.names.iter().zip(&self.primitives).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {prim}")?;
        }
        f.write_str("]")
    }
}

/// A schema compiled for one byte order. Immutable and cheap to share.
#[derive(Debug, Clone)]
pub struct CompiledLayout {
    pub(crate) runs: Vec<DecodeRun>,
    pub(crate) byte_order: ByteOrder,
    pub(crate) ibm_slots: Vec<usize>,
    pub(crate) index: Arc<FieldIndex>,
}

impl CompiledLayout {
    pub fn runs(&self) -> &[DecodeRun] {
        &self.runs
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Smallest buffer every run fits in.
    pub fn min_buffer_len(&self) -> usize {
        self.runs.iter().map(DecodeRun::end).max().unwrap_or(0)
    }

    pub fn field_names(&self) -> &[String] {
        self.index.names()
    }
}

/// Field overlay applied to a base schema before compilation.
///
/// Deserializes from a JSON object keyed by field name, keeping document
/// order:
///
/// ```
/// use segy_rs::layout::LayoutEdits;
///
/// let edits: LayoutEdits = serde_json::from_str(
///     r#"{ "INLINE": { "offset": 8, "primitive": "int32" },
///          "GAIN": { "offset": 236, "ibm_float": true } }"#,
/// ).unwrap();
/// assert_eq!(edits.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayoutEdits {
    fields: Vec<FieldSpec>,
}

impl LayoutEdits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the edit for `field.name`.
    pub fn with_field(mut self, field: FieldSpec) -> Self {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[derive(Deserialize)]
struct FieldEdit {
    offset: usize,
    primitive: Option<Primitive>,
    #[serde(default)]
    ibm_float: bool,
}

impl<'de> Deserialize<'de> for LayoutEdits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EditsVisitor;

        impl<'de> Visitor<'de> for EditsVisitor {
            type Value = LayoutEdits;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field name to {offset, primitive, ibm_float}")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<LayoutEdits, A::Error> {
                let mut edits = LayoutEdits::new();
                while let Some((name, edit)) = map.next_entry::<String, FieldEdit>()? {
                    edits = edits.with_field(FieldSpec {
                        name,
                        offset: edit.offset,
                        primitive: edit.primitive.unwrap_or(Primitive::UInt32),
                        ibm_float: edit.ibm_float,
                    });
                }
                Ok(edits)
            }
        }

        deserializer.deserialize_map(EditsVisitor)
    }
}
