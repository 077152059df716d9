//! Pure Rust SEG-Y header decoder with random-access trace indexing.
//!
//! Field layouts are compiled into contiguous decode runs, so a header is
//! read with one unpack per run rather than one per field. Trace headers
//! are located by stride arithmetic and read on demand; nothing is cached
//! and no file handle outlives a call.
//!
//! # Decoding a header layout
//!
//! ```
//! use segy_rs::{ByteOrder, FieldSpec, LayoutSchema, Primitive, Value};
//!
//! let schema = LayoutSchema::new(vec![
//!     FieldSpec::new("A", 0, Primitive::Int16),
//!     FieldSpec::new("B", 2, Primitive::UInt32),
//!     FieldSpec::ibm("C", 12),
//! ]);
//! let layout = schema.compile(ByteOrder::Big).unwrap();
//! assert_eq!(layout.runs().len(), 2);
//!
//! let mut buf = vec![0u8; 16];
//! buf[0..2].copy_from_slice(&(-7i16).to_be_bytes());
//! buf[2..6].copy_from_slice(&70_000u32.to_be_bytes());
//! buf[12..16].copy_from_slice(&0x4110_0000u32.to_be_bytes());
//!
//! let record = layout.decode(&buf).unwrap();
//! assert_eq!(record["A"], Value::Int(-7));
//! assert_eq!(record["B"], Value::UInt(70_000));
//! assert_eq!(record["C"], Value::Float(1.0));
//! ```
//!
//! # Sampling navigation from a file
//!
//! ```no_run
//! use segy_rs::{Nav2DOptions, SegY, SegyOptions};
//!
//! let file = SegY::open("line_001.sgy", SegyOptions::default())?;
//! println!("{} traces of {}", file.trace_count(), file.sample_format());
//!
//! let last = file.traces().read_header(-1)?;
//! println!("last CDP: {}", last.cdp());
//!
//! for nav in file.sampled_nav_2d(50, &Nav2DOptions::default())? {
//!     println!("{} {} {:.2} {:.2}", nav.trace, nav.sp, nav.x, nav.y);
//! }
//! # Ok::<(), segy_rs::SegyError>(())
//! ```

pub mod binary_header;
pub mod error;
pub mod format;
pub mod geometry;
pub mod ibm;
pub mod indexer;
pub mod layout;
pub mod nav;
pub mod options;
pub mod record;
pub mod samples;
pub mod segy;
pub mod text;
pub mod trace_header;
pub mod types;

#[cfg(test)]
mod fixtures;

pub use binary_header::BinaryHeader;
pub use error::{Result, SegyError};
pub use format::{SampleFormat, SampleFormatDescriptor};
pub use geometry::{Geometry, Point};
pub use ibm::{IBM_MAX, IBM_MIN, ibm_to_f64};
pub use indexer::{TraceIndexer, TraceRange};
pub use layout::{CompiledLayout, DecodeRun, FieldSpec, LayoutEdits, LayoutSchema};
pub use nav::{Nav2D, Nav2DOptions, Nav3D, Nav3DOptions, apply_scalar, sampled_headers};
pub use options::SegyOptions;
pub use record::{HeaderRecord, ValueOverrides};
pub use samples::{Samples, decode_samples};
pub use segy::SegY;
pub use text::{AsciiDecoder, TextDecoder, TextHeader};
pub use trace_header::{TraceHeader, TraceLayout};
pub use types::{ByteOrder, Primitive, Value};
