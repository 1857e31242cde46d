//! Unit systems and measurement ranges.
//!
//! Provides the metric/imperial distinction, the unit labels shown next to
//! inputs, and the plausible-range table enforced during validation.

use std::ops::RangeInclusive;

/// Centimeters per meter.
pub const CM_PER_METER: f64 = 100.0;

/// Conversion factor for the imperial BMI formula (lb/in² to kg/m²).
pub const IMPERIAL_BMI_FACTOR: f64 = 703.0;

/// Unit system for height and weight inputs.
///
/// Determines both the BMI formula and the valid input ranges.
///
/// # Example
///
/// ```
/// use bmi_core::UnitSystem;
///
/// let metric = UnitSystem::Metric;
/// assert_eq!(metric.height_unit(), "cm");
/// assert!(metric.height_range().contains(&170.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UnitSystem {
    /// Height in centimeters, weight in kilograms.
    #[default]
    Metric,
    /// Height in inches, weight in pounds.
    Imperial,
}

impl UnitSystem {
    /// Unit label for height inputs.
    #[must_use]
    pub const fn height_unit(self) -> &'static str {
        match self {
            Self::Metric => "cm",
            Self::Imperial => "in",
        }
    }

    /// Unit label for weight inputs.
    #[must_use]
    pub const fn weight_unit(self) -> &'static str {
        match self {
            Self::Metric => "kg",
            Self::Imperial => "lb",
        }
    }

    /// Plausible height range (inclusive) for this unit system.
    #[must_use]
    pub const fn height_range(self) -> RangeInclusive<f64> {
        match self {
            Self::Metric => 50.0..=250.0,
            Self::Imperial => 20.0..=100.0,
        }
    }

    /// Plausible weight range (inclusive) for this unit system.
    #[must_use]
    pub const fn weight_range(self) -> RangeInclusive<f64> {
        match self {
            Self::Metric => 20.0..=500.0,
            Self::Imperial => 45.0..=1100.0,
        }
    }

    /// Lowercase name used on the wire ("metric" / "imperial").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
