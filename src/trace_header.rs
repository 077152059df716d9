//! The 240-byte trace header that precedes every trace payload.

use std::ops::Deref;

use crate::Result;
use crate::layout::{CompiledLayout, LayoutEdits, LayoutSchema};
use crate::record::HeaderRecord;
use crate::types::{ByteOrder, Primitive, Value};

pub const TRACE_NO_LINE: &str = "TRACE_NO_LINE";
pub const TRACE_NO_FILE: &str = "TRACE_NO_FILE";
pub const ORIGINAL_FIELD_RECORD_NO: &str = "ORIGINAL_FIELD_RECORD_NO";
pub const TRACE_NO_FIELD_RECORD: &str = "TRACE_NO_FIELD_RECORD";
pub const SP: &str = "SP";
pub const CDP: &str = "CDP";
pub const TRACE_NO_ENSEMBLE: &str = "TRACE_NO_ENSEMBLE";
pub const TRACE_ID_CODE: &str = "TRACE_ID_CODE";
pub const VERTICALLY_SUMMED_TRACES: &str = "VERTICALLY_SUMMED_TRACES";
pub const HORIZONTALLY_STACKED_TRACES: &str = "HORIZONTALLY_STACKED_TRACES";
pub const DATA_USE: &str = "DATA_USE";
pub const DISTANCE_FROM_SOURCE_TO_RECEIVER: &str = "DISTANCE_FROM_SOURCE_TO_RECEIVER";
pub const RECEIVER_ELEVATION: &str = "RECEIVER_ELEVATION";
pub const SURFACE_ELEVATION_AT_SOURCE: &str = "SURFACE_ELEVATION_AT_SOURCE";
pub const SOURCE_DEPTH_BELOW_SURFACE: &str = "SOURCE_DEPTH_BELOW_SURFACE";
pub const SEISMIC_DATUM_AT_RECEIVER: &str = "SEISMIC_DATUM_AT_RECEIVER";
pub const SEISMIC_DATUM_AT_SOURCE: &str = "SEISMIC_DATUM_AT_SOURCE";
pub const WATER_COLUMN_HEIGHT_AT_SOURCE: &str = "WATER_COLUMN_HEIGHT_AT_SOURCE";
pub const WATER_COLUMN_HEIGHT_AT_RECEIVER: &str = "WATER_COLUMN_HEIGHT_AT_RECEIVER";
pub const ELEVATION_SCALAR: &str = "ELEVATION_SCALAR";
pub const COORDINATE_SCALAR: &str = "COORDINATE_SCALAR";
pub const SOURCE_X: &str = "SOURCE_X";
pub const SOURCE_Y: &str = "SOURCE_Y";
pub const GROUP_X: &str = "GROUP_X";
pub const GROUP_Y: &str = "GROUP_Y";
pub const COORDINATE_UNIT: &str = "COORDINATE_UNIT";
pub const WEATHERING_VELOCITY: &str = "WEATHERING_VELOCITY";
pub const SUBWEATHERING_VELOCITY: &str = "SUBWEATHERING_VELOCITY";
pub const UPHOLE_TIME_SOURCE: &str = "UPHOLE_TIME_SOURCE";
pub const UPHOLE_TIME_GROUP: &str = "UPHOLE_TIME_GROUP";
pub const SOURCE_STATIC_CORRECTION: &str = "SOURCE_STATIC_CORRECTION";
pub const GROUP_STATIC_CORRECTION: &str = "GROUP_STATIC_CORRECTION";
pub const TOTAL_STATIC_CORRECTION: &str = "TOTAL_STATIC_CORRECTION";
pub const LAG_TIME_A: &str = "LAG_TIME_A";
pub const LAG_TIME_B: &str = "LAG_TIME_B";
pub const DELAY_RECORDING_TIME: &str = "DELAY_RECORDING_TIME";
pub const MUTE_START: &str = "MUTE_START";
pub const MUTE_END: &str = "MUTE_END";
pub const SAMPLE_COUNT: &str = "SAMPLE_COUNT";
pub const SAMPLE_INTERVAL: &str = "SAMPLE_INTERVAL";
pub const GAIN_TYPE: &str = "GAIN_TYPE";
pub const INSTRUMENT_GAIN_CONSTANT: &str = "INSTRUMENT_GAIN_CONSTANT";
pub const INSTRUMENT_INITIAL_GAIN: &str = "INSTRUMENT_INITIAL_GAIN";
pub const CORRELATED: &str = "CORRELATED";
pub const SWEEP_FREQUENCY_START: &str = "SWEEP_FREQUENCY_START";
pub const SWEEP_FREQUENCY_END: &str = "SWEEP_FREQUENCY_END";
pub const SWEEP_LENGTH: &str = "SWEEP_LENGTH";
pub const SWEEP_TYPE: &str = "SWEEP_TYPE";
pub const SWEEP_TRACE_TAPER_LENGTH_START: &str = "SWEEP_TRACE_TAPER_LENGTH_START";
pub const SWEEP_TRACE_TAPER_LENGTH_END: &str = "SWEEP_TRACE_TAPER_LENGTH_END";
pub const TAPER_TYPE: &str = "TAPER_TYPE";
pub const ALIAS_FILTER_FREQ: &str = "ALIAS_FILTER_FREQ";
pub const ALIAS_FILTER_SLOPE: &str = "ALIAS_FILTER_SLOPE";
pub const NOTCH_FILTER_FREQ: &str = "NOTCH_FILTER_FREQ";
pub const NOTCH_FILTER_SLOPE: &str = "NOTCH_FILTER_SLOPE";
pub const LCF_FREQ: &str = "LCF_FREQ";
pub const HCF_FREQ: &str = "HCF_FREQ";
pub const LCF_SLOPE: &str = "LCF_SLOPE";
pub const HCF_SLOPE: &str = "HCF_SLOPE";
pub const YEAR_RECORDED: &str = "YEAR_RECORDED";
pub const DAY_RECORDED: &str = "DAY_RECORDED";
pub const HOUR_RECORDED: &str = "HOUR_RECORDED";
pub const MINUTE_RECORDED: &str = "MINUTE_RECORDED";
pub const SECOND_RECORDED: &str = "SECOND_RECORDED";
pub const TIME_BASIS_CODE: &str = "TIME_BASIS_CODE";
pub const TRACE_WEIGHTING_FACTOR: &str = "TRACE_WEIGHTING_FACTOR";
pub const GEOPHONE_GROUP_NO_RSP1: &str = "GEOPHONE_GROUP_NO_RSP1";
pub const GEOPHONE_GROUP_NO_FIRST_TRACE: &str = "GEOPHONE_GROUP_NO_FIRST_TRACE";
pub const GEOPHONE_GROUP_NO_LAST_TRACE: &str = "GEOPHONE_GROUP_NO_LAST_TRACE";
pub const GAP_SIZE: &str = "GAP_SIZE";
pub const TAPER_OVER_TRAVEL: &str = "TAPER_OVER_TRAVEL";
pub const CDP_X: &str = "CDP_X";
pub const CDP_Y: &str = "CDP_Y";
pub const INLINE: &str = "INLINE";
pub const CROSSLINE: &str = "CROSSLINE";
pub const SP_NO: &str = "SP_NO";
pub const SP_SCALAR: &str = "SP_SCALAR";
pub const TRACE_VALUE_MEASUREMENT_UNIT: &str = "TRACE_VALUE_MEASUREMENT_UNIT";
pub const TRANSDUCTION_CONSTANT: &str = "TRANSDUCTION_CONSTANT";
pub const TRANSDUCTION_CONSTANT_EXPONENT: &str = "TRANSDUCTION_CONSTANT_EXPONENT";
pub const TRANSDUCTION_UNITS: &str = "TRANSDUCTION_UNITS";
pub const DEVICE_IDENTIFIER: &str = "DEVICE_IDENTIFIER";
pub const TIME_SCALAR: &str = "TIME_SCALAR";
pub const SOURCE_TYPE: &str = "SOURCE_TYPE";
pub const SOURCE_DIRECTION_VERTICAL: &str = "SOURCE_DIRECTION_VERTICAL";
pub const SOURCE_DIRECTION_CROSSLINE: &str = "SOURCE_DIRECTION_CROSSLINE";
pub const SOURCE_DIRECTION_INLINE: &str = "SOURCE_DIRECTION_INLINE";
pub const SOURCE_MEASUREMENT: &str = "SOURCE_MEASUREMENT";
pub const SOURCE_MEASUREMENT_EXPONENT: &str = "SOURCE_MEASUREMENT_EXPONENT";
pub const SOURCE_MEASUREMENT_UNIT: &str = "SOURCE_MEASUREMENT_UNIT";

/// Field table in schema order: `(name, offset, primitive)`.
pub static FIELDS: &[(&str, usize, Primitive)] = &[
    (TRACE_NO_LINE, 0, Primitive::Int32),
    (TRACE_NO_FILE, 4, Primitive::Int32),
    (ORIGINAL_FIELD_RECORD_NO, 8, Primitive::Int32),
    (TRACE_NO_FIELD_RECORD, 12, Primitive::Int32),
    (SP, 16, Primitive::Int32),
    (CDP, 20, Primitive::Int32),
    (TRACE_NO_ENSEMBLE, 24, Primitive::Int32),
    (TRACE_ID_CODE, 28, Primitive::Int16),
    (VERTICALLY_SUMMED_TRACES, 30, Primitive::Int16),
    (HORIZONTALLY_STACKED_TRACES, 32, Primitive::Int16),
    (DATA_USE, 34, Primitive::Int16),
    (DISTANCE_FROM_SOURCE_TO_RECEIVER, 36, Primitive::Int32),
    (RECEIVER_ELEVATION, 40, Primitive::Int32),
    (SURFACE_ELEVATION_AT_SOURCE, 44, Primitive::Int32),
    (SOURCE_DEPTH_BELOW_SURFACE, 48, Primitive::Int32),
    (SEISMIC_DATUM_AT_RECEIVER, 52, Primitive::Int32),
    (SEISMIC_DATUM_AT_SOURCE, 56, Primitive::Int32),
    (WATER_COLUMN_HEIGHT_AT_SOURCE, 60, Primitive::Int32),
    (WATER_COLUMN_HEIGHT_AT_RECEIVER, 64, Primitive::Int32),
    (ELEVATION_SCALAR, 68, Primitive::Int16),
    (COORDINATE_SCALAR, 70, Primitive::Int16),
    (SOURCE_X, 72, Primitive::Int32),
    (SOURCE_Y, 76, Primitive::Int32),
    (GROUP_X, 80, Primitive::Int32),
    (GROUP_Y, 84, Primitive::Int32),
    (COORDINATE_UNIT, 88, Primitive::Int16),
    (WEATHERING_VELOCITY, 90, Primitive::Int16),
    (SUBWEATHERING_VELOCITY, 92, Primitive::Int16),
    (UPHOLE_TIME_SOURCE, 94, Primitive::Int16),
    (UPHOLE_TIME_GROUP, 96, Primitive::Int16),
    (SOURCE_STATIC_CORRECTION, 98, Primitive::Int16),
    (GROUP_STATIC_CORRECTION, 100, Primitive::Int16),
    (TOTAL_STATIC_CORRECTION, 102, Primitive::Int16),
    (LAG_TIME_A, 104, Primitive::Int16),
    (LAG_TIME_B, 106, Primitive::Int16),
    (DELAY_RECORDING_TIME, 108, Primitive::Int16),
    (MUTE_START, 110, Primitive::Int16),
    (MUTE_END, 112, Primitive::Int16),
    (SAMPLE_COUNT, 114, Primitive::Int16),
    (SAMPLE_INTERVAL, 116, Primitive::Int16),
    (GAIN_TYPE, 118, Primitive::Int16),
    (INSTRUMENT_GAIN_CONSTANT, 120, Primitive::Int16),
    (INSTRUMENT_INITIAL_GAIN, 122, Primitive::Int16),
    (CORRELATED, 124, Primitive::Int16),
    (SWEEP_FREQUENCY_START, 126, Primitive::Int16),
    (SWEEP_FREQUENCY_END, 128, Primitive::Int16),
    (SWEEP_LENGTH, 130, Primitive::Int16),
    (SWEEP_TYPE, 132, Primitive::Int16),
    (SWEEP_TRACE_TAPER_LENGTH_START, 134, Primitive::Int16),
    (SWEEP_TRACE_TAPER_LENGTH_END, 136, Primitive::Int16),
    (TAPER_TYPE, 138, Primitive::Int16),
    (ALIAS_FILTER_FREQ, 140, Primitive::Int16),
    (ALIAS_FILTER_SLOPE, 142, Primitive::Int16),
    (NOTCH_FILTER_FREQ, 144, Primitive::Int16),
    (NOTCH_FILTER_SLOPE, 146, Primitive::Int16),
    (LCF_FREQ, 148, Primitive::Int16),
    (HCF_FREQ, 150, Primitive::Int16),
    (LCF_SLOPE, 152, Primitive::Int16),
    (HCF_SLOPE, 154, Primitive::Int16),
    (YEAR_RECORDED, 156, Primitive::Int16),
    (DAY_RECORDED, 158, Primitive::Int16),
    (HOUR_RECORDED, 160, Primitive::Int16),
    (MINUTE_RECORDED, 162, Primitive::Int16),
    (SECOND_RECORDED, 164, Primitive::Int16),
    (TIME_BASIS_CODE, 166, Primitive::Int16),
    (TRACE_WEIGHTING_FACTOR, 168, Primitive::Int16),
    (GEOPHONE_GROUP_NO_RSP1, 170, Primitive::Int16),
    (GEOPHONE_GROUP_NO_FIRST_TRACE, 172, Primitive::Int16),
    (GEOPHONE_GROUP_NO_LAST_TRACE, 174, Primitive::Int16),
    (GAP_SIZE, 176, Primitive::Int16),
    (TAPER_OVER_TRAVEL, 178, Primitive::Int16),
    (CDP_X, 180, Primitive::Int32),
    (CDP_Y, 184, Primitive::Int32),
    (INLINE, 188, Primitive::Int32),
    (CROSSLINE, 192, Primitive::Int32),
    (SP_NO, 196, Primitive::Int32),
    (SP_SCALAR, 200, Primitive::Int16),
    (TRACE_VALUE_MEASUREMENT_UNIT, 202, Primitive::Int16),
    (TRANSDUCTION_CONSTANT, 204, Primitive::Int32),
    (TRANSDUCTION_CONSTANT_EXPONENT, 208, Primitive::Int16),
    (TRANSDUCTION_UNITS, 210, Primitive::Int16),
    (DEVICE_IDENTIFIER, 212, Primitive::Int16),
    (TIME_SCALAR, 214, Primitive::Int16),
    (SOURCE_TYPE, 216, Primitive::Int16),
    (SOURCE_DIRECTION_VERTICAL, 218, Primitive::Int16),
    (SOURCE_DIRECTION_CROSSLINE, 220, Primitive::Int16),
    (SOURCE_DIRECTION_INLINE, 222, Primitive::Int16),
    (SOURCE_MEASUREMENT, 224, Primitive::Int32),
    (SOURCE_MEASUREMENT_EXPONENT, 228, Primitive::Int16),
    (SOURCE_MEASUREMENT_UNIT, 230, Primitive::Int16),
];

/// A compiled trace header layout that always holds the standard fields.
///
/// Only [`TraceHeader::layout`] builds one. Edits replace or append
/// fields but never remove them, so every [`TraceHeader`] decoded with it
/// answers the typed accessors.
#[derive(Debug, Clone)]
pub struct TraceLayout(CompiledLayout);

impl Deref for TraceLayout {
    type Target = CompiledLayout;

    fn deref(&self) -> &CompiledLayout {
        &self.0
    }
}

/// Decoded trace header.
///
/// Dereferences to [`HeaderRecord`] for by-name access.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceHeader {
    record: HeaderRecord,
}

impl TraceHeader {
    pub const SIZE: usize = 240;

    /// The standard field table.
    pub fn schema() -> LayoutSchema {
        LayoutSchema::from_table(FIELDS)
    }

    /// Standard table with `edits` overlaid, compiled for `byte_order`.
    pub fn layout(edits: &LayoutEdits, byte_order: ByteOrder) -> Result<TraceLayout> {
        Self::schema()
            .with_edits(edits)
            .compile(byte_order)
            .map(TraceLayout)
    }

    /// Decode a trace header with an already compiled layout. Arbitrary
    /// layouts go through [`CompiledLayout::decode`] instead.
    pub fn decode(layout: &TraceLayout, data: &[u8]) -> Result<Self> {
        Ok(Self {
            record: layout.decode(data)?,
        })
    }

    pub fn record(&self) -> &HeaderRecord {
        &self.record
    }

    pub fn into_record(self) -> HeaderRecord {
        self.record
    }

    // The layout is a `TraceLayout`, so direct indexing cannot miss.

    pub fn trace_no_line(&self) -> Value {
        self.record[TRACE_NO_LINE]
    }

    pub fn cdp(&self) -> Value {
        self.record[CDP]
    }

    pub fn inline(&self) -> Value {
        self.record[INLINE]
    }

    pub fn crossline(&self) -> Value {
        self.record[CROSSLINE]
    }

    pub fn cdp_x(&self) -> Value {
        self.record[CDP_X]
    }

    pub fn cdp_y(&self) -> Value {
        self.record[CDP_Y]
    }

    pub fn coordinate_scalar(&self) -> i64 {
        self.record[COORDINATE_SCALAR].as_i64()
    }

    pub fn sp_scalar(&self) -> i64 {
        self.record[SP_SCALAR].as_i64()
    }

    pub fn sample_count(&self) -> i64 {
        self.record[SAMPLE_COUNT].as_i64()
    }
}

impl Deref for TraceHeader {
    type Target = HeaderRecord;

    fn deref(&self) -> &HeaderRecord {
        &self.record
    }
}
