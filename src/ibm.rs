//! IBM System/360 single-precision floating point.
//!
//! Layout of the 32-bit word: bit 31 sign, bits 24-30 a base-16 exponent
//! biased by 64, bits 0-23 an unnormalised fraction in units of 2^-24.

/// Largest magnitude representable as an IBM float.
pub const IBM_MAX: f64 = (1.0 - 1.0 / 16_777_216.0) * 7.237_005_577_332_262e75;

/// Smallest positive normalised IBM float, 16^-65.
pub const IBM_MIN: f64 = 5.397_605_346_934_028e-79;

/// Convert a raw IBM float word to `f64`.
///
/// No range or NaN checks: every bit pattern yields a finite value, since
/// the IBM range lies inside the `f64` range.
pub fn ibm_to_f64(raw: u32) -> f64 {
    let sign = if raw >> 31 == 0 { 1.0 } else { -1.0 };
    let exponent = ((raw >> 24) & 0x7F) as i32 - 64;
    let fraction = (raw & 0x00FF_FFFF) as f64 / 16_777_216.0;
    sign * 16f64.powi(exponent) * fraction
}
