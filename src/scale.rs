//! Mapping of BMI values onto the fixed display scale.
//!
//! The visual scale runs from BMI 16 to BMI 40. The markers shown along it
//! ([`SCALE_MARKERS`]) are display labels only; the position formula uses
//! nothing but the two endpoints. In particular the markers intentionally
//! do not coincide with the classification bands, which span four equal
//! quarters of the display regardless of their BMI widths.

/// BMI value at the left edge of the display scale.
pub const SCALE_MIN: f64 = 16.0;

/// BMI value at the right edge of the display scale.
pub const SCALE_MAX: f64 = 40.0;

/// Tick labels shown under the display scale, left to right.
pub const SCALE_MARKERS: [f64; 5] = [16.0, 18.5, 25.0, 30.0, 40.0];

/// Map a BMI value to a position on the display scale, in percent.
///
/// Values below [`SCALE_MIN`] map to 0, values above [`SCALE_MAX`] map to
/// 100, and everything in between interpolates linearly. The result is
/// always within `[0, 100]`, and the mapping is monotonic.
///
/// NaN input is a caller bug: debug builds assert, release builds return
/// NaN unchanged.
///
/// # Example
///
/// ```
/// use bmi_core::scale_position;
///
/// assert!((scale_position(16.0) - 0.0).abs() < 1e-10);
/// assert!((scale_position(28.0) - 50.0).abs() < 1e-10);
/// assert!((scale_position(40.0) - 100.0).abs() < 1e-10);
/// assert!((scale_position(55.0) - 100.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn scale_position(bmi: f64) -> f64 {
    debug_assert!(!bmi.is_nan(), "scale_position requires a numeric BMI");
    (((bmi - SCALE_MIN) / (SCALE_MAX - SCALE_MIN)) * 100.0).clamp(0.0, 100.0)
}
