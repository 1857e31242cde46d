//! Error types for BMI calculation.

use thiserror::Error;

use crate::units::UnitSystem;

/// Result type alias for BMI operations.
pub type BmiResult<T> = Result<T, BmiError>;

/// The input field an error refers to.
///
/// Validation errors are field-level so a form layer can attach the
/// message to the right input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InputField {
    /// The height input.
    Height,
    /// The weight input.
    Weight,
}

impl InputField {
    /// Lowercase field name for messages and form bindings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Height => "height",
            Self::Weight => "weight",
        }
    }
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur when validating a measurement.
///
/// All variants are recoverable by re-input; none is fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BmiError {
    /// Input is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite {
        /// The offending field.
        field: InputField,
    },

    /// Input is zero or negative.
    #[error("{field} must be positive")]
    NotPositive {
        /// The offending field.
        field: InputField,
        /// The rejected value.
        value: f64,
    },

    /// Input is outside the plausible range for its unit system.
    #[error("{field} must be between {min} and {max} {unit}, got {value}")]
    OutOfRange {
        /// The offending field.
        field: InputField,
        /// The rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
        /// Unit label for the field (e.g. "cm", "lb").
        unit: &'static str,
    },
}

impl BmiError {
    /// Creates a not-finite error.
    #[must_use]
    pub const fn not_finite(field: InputField) -> Self {
        Self::NotFinite { field }
    }

    /// Creates a not-positive error.
    #[must_use]
    pub const fn not_positive(field: InputField, value: f64) -> Self {
        Self::NotPositive { field, value }
    }

    /// Creates an out-of-range error from the range table for `units`.
    #[must_use]
    pub fn out_of_range(field: InputField, value: f64, units: UnitSystem) -> Self {
        let range = match field {
            InputField::Height => units.height_range(),
            InputField::Weight => units.weight_range(),
        };
        let unit = match field {
            InputField::Height => units.height_unit(),
            InputField::Weight => units.weight_unit(),
        };
        Self::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
            unit,
        }
    }

    /// The field this error refers to.
    #[must_use]
    pub const fn field(&self) -> InputField {
        match self {
            Self::NotFinite { field }
            | Self::NotPositive { field, .. }
            | Self::OutOfRange { field, .. } => *field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BmiError::not_finite(InputField::Height);
        assert!(format!("{err}").contains("height"));
        assert!(format!("{err}").contains("finite"));

        let err = BmiError::not_positive(InputField::Weight, -3.0);
        assert!(format!("{err}").contains("weight"));
        assert!(format!("{err}").contains("positive"));
    }

    #[test]
    fn test_out_of_range_uses_range_table() {
        let err = BmiError::out_of_range(InputField::Height, 10.0, UnitSystem::Metric);
        let msg = format!("{err}");
        assert!(msg.contains("50"));
        assert!(msg.contains("250"));
        assert!(msg.contains("cm"));

        let err = BmiError::out_of_range(InputField::Weight, 2000.0, UnitSystem::Imperial);
        let msg = format!("{err}");
        assert!(msg.contains("45"));
        assert!(msg.contains("1100"));
        assert!(msg.contains("lb"));
    }

    #[test]
    fn test_error_field() {
        let err = BmiError::not_finite(InputField::Height);
        assert_eq!(err.field(), InputField::Height);

        let err = BmiError::not_positive(InputField::Weight, 0.0);
        assert_eq!(err.field(), InputField::Weight);
    }
}
