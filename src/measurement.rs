//! Measurement input type and validation.

use crate::error::{BmiError, BmiResult, InputField};
use crate::units::UnitSystem;

/// A height/weight measurement in a given unit system.
///
/// Created per calculation request, never persisted. Callers are expected
/// to validate before invoking the core, but [`crate::calculate`]
/// re-validates defensively so an invalid measurement can never reach the
/// formula.
///
/// # Example
///
/// ```
/// use bmi_core::{Measurement, UnitSystem};
///
/// let m = Measurement::new(170.0, 70.0, UnitSystem::Metric).unwrap();
/// assert!((m.height - 170.0).abs() < f64::EPSILON);
///
/// // Out of the plausible range for metric height
/// assert!(Measurement::new(10.0, 70.0, UnitSystem::Metric).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    /// Height in the unit system's height unit (cm or in).
    pub height: f64,
    /// Weight in the unit system's weight unit (kg or lb).
    pub weight: f64,
    /// Unit system the values are expressed in.
    pub units: UnitSystem,
}

impl Measurement {
    /// Creates a validated measurement.
    ///
    /// # Errors
    ///
    /// Returns a field-level [`BmiError`] if height or weight is
    /// non-finite, non-positive, or outside the plausible range for
    /// `units` (see [`UnitSystem::height_range`] and
    /// [`UnitSystem::weight_range`]).
    pub fn new(height: f64, weight: f64, units: UnitSystem) -> BmiResult<Self> {
        let m = Self {
            height,
            weight,
            units,
        };
        m.validate()?;
        Ok(m)
    }

    /// Validates this measurement against the range table.
    ///
    /// Checks each field for finiteness and positivity first, then the
    /// per-unit-system plausible range. The first failing check wins, so
    /// a NaN height reports as not-finite rather than out-of-range.
    ///
    /// # Errors
    ///
    /// Returns a field-level [`BmiError`] describing the first invalid
    /// field.
    pub fn validate(&self) -> BmiResult<()> {
        validate_field(InputField::Height, self.height, self.units)?;
        validate_field(InputField::Weight, self.weight, self.units)?;
        Ok(())
    }
}

fn validate_field(field: InputField, value: f64, units: UnitSystem) -> BmiResult<()> {
    if !value.is_finite() {
        return Err(BmiError::not_finite(field));
    }
    if value <= 0.0 {
        return Err(BmiError::not_positive(field, value));
    }
    let range = match field {
        InputField::Height => units.height_range(),
        InputField::Weight => units.weight_range(),
    };
    if !range.contains(&value) {
        return Err(BmiError::out_of_range(field, value, units));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_metric() {
        let m = Measurement::new(170.0, 70.0, UnitSystem::Metric);
        assert!(m.is_ok());
    }

    #[test]
    fn valid_imperial() {
        let m = Measurement::new(66.0, 150.0, UnitSystem::Imperial);
        assert!(m.is_ok());
    }

    #[test]
    fn rejects_nan_height() {
        let err = Measurement::new(f64::NAN, 70.0, UnitSystem::Metric).unwrap_err();
        assert_eq!(err, BmiError::not_finite(InputField::Height));
    }

    #[test]
    fn rejects_infinite_weight() {
        let err = Measurement::new(170.0, f64::INFINITY, UnitSystem::Metric).unwrap_err();
        assert_eq!(err, BmiError::not_finite(InputField::Weight));
    }

    #[test]
    fn rejects_non_positive() {
        let err = Measurement::new(0.0, 70.0, UnitSystem::Metric).unwrap_err();
        assert_eq!(err.field(), InputField::Height);

        let err = Measurement::new(170.0, -1.0, UnitSystem::Metric).unwrap_err();
        assert_eq!(err.field(), InputField::Weight);
    }

    #[test]
    fn rejects_out_of_range() {
        // 10 cm is positive but implausible
        let err = Measurement::new(10.0, 70.0, UnitSystem::Metric).unwrap_err();
        assert!(matches!(err, BmiError::OutOfRange { .. }));

        // 2000 lb exceeds the imperial weight range
        let err = Measurement::new(66.0, 2000.0, UnitSystem::Imperial).unwrap_err();
        assert!(matches!(err, BmiError::OutOfRange { .. }));
    }

    #[test]
    fn accepts_range_boundaries() {
        // Lower bounds are inclusive
        assert!(Measurement::new(20.0, 45.0, UnitSystem::Imperial).is_ok());
        assert!(Measurement::new(30.0, 46.0, UnitSystem::Imperial).is_ok());
        // Upper bounds are inclusive too
        assert!(Measurement::new(250.0, 500.0, UnitSystem::Metric).is_ok());
    }

    #[test]
    fn height_checked_before_weight() {
        // Both invalid: height reported first
        let err = Measurement::new(f64::NAN, -1.0, UnitSystem::Metric).unwrap_err();
        assert_eq!(err.field(), InputField::Height);
    }
}
