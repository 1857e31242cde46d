//! BMI formula and calculation entry point.

use tracing::debug;

use crate::assessment::BmiAssessment;
use crate::category::BmiCategory;
use crate::error::{BmiError, BmiResult, InputField};
use crate::measurement::Measurement;
use crate::scale::scale_position;
use crate::units::{UnitSystem, CM_PER_METER, IMPERIAL_BMI_FACTOR};

/// Compute the BMI for a height and weight, rounded to one decimal place.
///
/// - Metric: `weight_kg / (height_cm / 100)²`
/// - Imperial: `(weight_lb / height_in²) × 703`
///
/// Rounding is half-away-from-zero ([`f64::round`] semantics), so a raw
/// BMI of 24.25 rounds to 24.3.
///
/// Inputs are checked for finiteness and positivity only; the plausible
/// range table belongs to [`Measurement::validate`]. The formula can
/// therefore never divide by zero or produce NaN.
///
/// # Errors
///
/// Returns a field-level [`BmiError`] if height or weight is non-finite
/// or non-positive.
///
/// # Example
///
/// ```
/// use bmi_core::{compute_bmi, UnitSystem};
///
/// let bmi = compute_bmi(170.0, 70.0, UnitSystem::Metric).unwrap();
/// assert!((bmi - 24.2).abs() < 1e-10);
///
/// let bmi = compute_bmi(66.0, 150.0, UnitSystem::Imperial).unwrap();
/// assert!((bmi - 24.2).abs() < 1e-10);
/// ```
pub fn compute_bmi(height: f64, weight: f64, units: UnitSystem) -> BmiResult<f64> {
    Ok(round_to_tenth(raw_bmi(height, weight, units)?))
}

/// Compute the unrounded BMI.
///
/// Classification and scale position are derived from this value so that
/// a raw BMI of 24.95 (which displays as 25.0) still classifies as
/// normal weight.
fn raw_bmi(height: f64, weight: f64, units: UnitSystem) -> BmiResult<f64> {
    check_positive(InputField::Height, height)?;
    check_positive(InputField::Weight, weight)?;

    let bmi = match units {
        UnitSystem::Metric => {
            let height_m = height / CM_PER_METER;
            weight / (height_m * height_m)
        }
        UnitSystem::Imperial => (weight / (height * height)) * IMPERIAL_BMI_FACTOR,
    };
    Ok(bmi)
}

fn check_positive(field: InputField, value: f64) -> BmiResult<()> {
    if !value.is_finite() {
        return Err(BmiError::not_finite(field));
    }
    if value <= 0.0 {
        return Err(BmiError::not_positive(field, value));
    }
    Ok(())
}

/// Round half-away-from-zero to one decimal place.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Calculate a full BMI assessment from a measurement.
///
/// This is the sole entry point presentation layers should call. It
/// re-validates the measurement defensively, computes the BMI once, and
/// derives the category and scale position from the same unrounded value,
/// so the three fields of the result can never disagree. The returned
/// `value` is rounded to one decimal for display.
///
/// The calculation is pure: identical input yields a bitwise-identical
/// assessment.
///
/// # Errors
///
/// Returns a field-level [`BmiError`] if the measurement fails
/// validation (non-finite, non-positive, or outside the plausible range
/// for its unit system).
///
/// # Example
///
/// ```
/// use bmi_core::{calculate, BmiCategory, Measurement, UnitSystem};
///
/// let m = Measurement::new(160.0, 45.0, UnitSystem::Metric).unwrap();
/// let assessment = calculate(&m).unwrap();
///
/// assert!((assessment.value - 17.6).abs() < 1e-10);
/// assert_eq!(assessment.category, BmiCategory::Underweight);
/// ```
pub fn calculate(measurement: &Measurement) -> BmiResult<BmiAssessment> {
    measurement.validate()?;

    let bmi = raw_bmi(measurement.height, measurement.weight, measurement.units)?;
    let category = BmiCategory::classify(bmi);
    let position = scale_position(bmi);

    debug!(
        units = %measurement.units,
        bmi = format!("{bmi:.3}"),
        category = %category,
        position = format!("{position:.1}"),
        "BMI calculated"
    );

    Ok(BmiAssessment {
        value: round_to_tenth(bmi),
        category,
        position,
    })
}
