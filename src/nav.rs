//! Sampled navigation: a thinned-out set of trace headers with scaled
//! coordinates, for drawing a line or survey outline without reading every
//! trace.

use serde::Deserialize;

use crate::indexer::{TraceIndexer, TraceRange};
use crate::segy::SegY;
use crate::trace_header::{
    CDP, COORDINATE_SCALAR, CROSSLINE, INLINE, SP, SP_SCALAR, TRACE_NO_LINE, TraceHeader,
};
use crate::types::Value;
use crate::{Result, SegyError};

pub const DEFAULT_NAV_PREFIX: &str = "CDP";

/// Apply a SEG-Y scale factor: positive multiplies, negative divides by its
/// magnitude, zero leaves the value unchanged.
pub fn apply_scalar(value: f64, scalar: i64) -> f64 {
    match scalar {
        s if s > 0 => value * s as f64,
        s if s < 0 => value / -(s as f64),
        _ => value,
    }
}

/// Roughly `count` headers spread evenly over the file.
///
/// Every `trace_count / count`-th trace is read (at least every trace),
/// and the last trace is always included.
pub fn sampled_headers(indexer: &TraceIndexer, count: u64) -> Result<Vec<TraceHeader>> {
    if count == 0 {
        return Err(SegyError::InvalidRange("sample count must be positive"));
    }
    let total = indexer.len();
    if total == 0 {
        return Ok(Vec::new());
    }

    let interval = (total / count).max(1);
    let mut headers = indexer.read_range(TraceRange::new().with_step(interval as i64))?;
    let last = total - 1;
    if last % interval != 0 {
        headers.push(indexer.read_header(last as i64)?);
    }
    Ok(headers)
}

/// `<prefix>_X`, `<prefix>_Y`, scaled by `COORDINATE_SCALAR` if asked.
pub(crate) fn scaled_xy(
    header: &TraceHeader,
    prefix: &str,
    use_scalar: bool,
) -> Result<(f64, f64)> {
    let x = header.require(&format!("{prefix}_X"))?.as_f64();
    let y = header.require(&format!("{prefix}_Y"))?.as_f64();
    if !use_scalar {
        return Ok((x, y));
    }
    let scalar = header.require(COORDINATE_SCALAR)?.as_i64();
    Ok((apply_scalar(x, scalar), apply_scalar(y, scalar)))
}

/// Header keys and scaling used for 2D navigation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Nav2DOptions {
    pub trace_key: String,
    pub sp_key: String,
    pub cdp_key: String,
    /// Coordinates are read from `<nav_prefix>_X` and `<nav_prefix>_Y`.
    pub nav_prefix: String,
    pub use_nav_scalar: bool,
    pub use_sp_scalar: bool,
}

impl Nav2DOptions {
    pub fn new() -> Self {
        Self {
            trace_key: TRACE_NO_LINE.to_string(),
            sp_key: SP.to_string(),
            cdp_key: CDP.to_string(),
            nav_prefix: DEFAULT_NAV_PREFIX.to_string(),
            use_nav_scalar: true,
            use_sp_scalar: true,
        }
    }

    pub fn with_trace_key(mut self, key: impl Into<String>) -> Self {
        self.trace_key = key.into();
        self
    }

    pub fn with_sp_key(mut self, key: impl Into<String>) -> Self {
        self.sp_key = key.into();
        self
    }

    pub fn with_cdp_key(mut self, key: impl Into<String>) -> Self {
        self.cdp_key = key.into();
        self
    }

    pub fn with_nav_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.nav_prefix = prefix.into();
        self
    }

    pub fn with_nav_scalar(mut self, enabled: bool) -> Self {
        self.use_nav_scalar = enabled;
        self
    }

    pub fn with_sp_scalar(mut self, enabled: bool) -> Self {
        self.use_sp_scalar = enabled;
        self
    }
}

impl Default for Nav2DOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Header keys and scaling used for 3D navigation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Nav3DOptions {
    pub trace_key: String,
    pub inline_key: String,
    pub crossline_key: String,
    pub nav_prefix: String,
    pub use_nav_scalar: bool,
}

impl Nav3DOptions {
    pub fn new() -> Self {
        Self {
            trace_key: TRACE_NO_LINE.to_string(),
            inline_key: INLINE.to_string(),
            crossline_key: CROSSLINE.to_string(),
            nav_prefix: DEFAULT_NAV_PREFIX.to_string(),
            use_nav_scalar: true,
        }
    }

    pub fn with_trace_key(mut self, key: impl Into<String>) -> Self {
        self.trace_key = key.into();
        self
    }

    pub fn with_inline_key(mut self, key: impl Into<String>) -> Self {
        self.inline_key = key.into();
        self
    }

    pub fn with_crossline_key(mut self, key: impl Into<String>) -> Self {
        self.crossline_key = key.into();
        self
    }

    pub fn with_nav_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.nav_prefix = prefix.into();
        self
    }

    pub fn with_nav_scalar(mut self, enabled: bool) -> Self {
        self.use_nav_scalar = enabled;
        self
    }
}

impl Default for Nav3DOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// One 2D navigation point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nav2D {
    pub trace: Value,
    pub sp: f64,
    pub cdp: Value,
    pub x: f64,
    pub y: f64,
}

impl Nav2D {
    pub fn from_header(header: &TraceHeader, opts: &Nav2DOptions) -> Result<Self> {
        let trace = header.require(&opts.trace_key)?;
        let cdp = header.require(&opts.cdp_key)?;
        let mut sp = header.require(&opts.sp_key)?.as_f64();
        if opts.use_sp_scalar {
            sp = apply_scalar(sp, header.require(SP_SCALAR)?.as_i64());
        }
        let (x, y) = scaled_xy(header, &opts.nav_prefix, opts.use_nav_scalar)?;
        Ok(Self { trace, sp, cdp, x, y })
    }
}

/// One 3D navigation point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nav3D {
    pub trace: Value,
    pub inline: Value,
    pub crossline: Value,
    pub x: f64,
    pub y: f64,
}

impl Nav3D {
    pub fn from_header(header: &TraceHeader, opts: &Nav3DOptions) -> Result<Self> {
        let (x, y) = scaled_xy(header, &opts.nav_prefix, opts.use_nav_scalar)?;
        Ok(Self {
            trace: header.require(&opts.trace_key)?,
            inline: header.require(&opts.inline_key)?,
            crossline: header.require(&opts.crossline_key)?,
            x,
            y,
        })
    }
}

impl SegY {
    /// Roughly `count` trace headers spread over the file, always ending
    /// with the last trace.
    pub fn sampled_headers(&self, count: u64) -> Result<Vec<TraceHeader>> {
        sampled_headers(self.traces(), count)
    }

    pub fn sampled_nav_2d(&self, count: u64, opts: &Nav2DOptions) -> Result<Vec<Nav2D>> {
        self.sampled_headers(count)?
            .iter()
            .map(|header| Nav2D::from_header(header, opts))
            .collect()
    }

    pub fn sampled_nav_3d(&self, count: u64, opts: &Nav3DOptions) -> Result<Vec<Nav3D>> {
        self.sampled_headers(count)?
            .iter()
            .map(|header| Nav3D::from_header(header, opts))
            .collect()
    }
}
