//! Result type for a completed BMI assessment.

use crate::category::BmiCategory;

/// Display unit for BMI values.
pub const BMI_UNIT: &str = "kg/m²";

/// Result of a BMI calculation.
///
/// Produced fresh on every [`crate::calculate`] call; has no identity or
/// persistence of its own. The stored `value` is rounded to one decimal
/// for display, while `category` and `position` were derived from the
/// unrounded BMI so they stay consistent with each other at boundaries.
///
/// # Example
///
/// ```
/// use bmi_core::{calculate, BmiCategory, Measurement, UnitSystem};
///
/// let m = Measurement::new(170.0, 70.0, UnitSystem::Metric).unwrap();
/// let assessment = calculate(&m).unwrap();
///
/// assert!((assessment.value - 24.2).abs() < 1e-10);
/// assert_eq!(assessment.category, BmiCategory::Normal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BmiAssessment {
    /// BMI value rounded to one decimal place, in kg/m².
    pub value: f64,
    /// Health category the BMI falls into.
    pub category: BmiCategory,
    /// Position on the display scale, 0-100 percent.
    pub position: f64,
}

impl BmiAssessment {
    /// Whether the BMI falls in the normal-weight band.
    #[must_use]
    pub fn is_normal(&self) -> bool {
        self.category == BmiCategory::Normal
    }

    /// Scale position formatted as a CSS-style percentage string.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{:.1}%", self.position)
    }

    /// Rounded value with its display unit, e.g. `"24.2 kg/m²"`.
    #[must_use]
    pub fn value_label(&self) -> String {
        format!("{:.1} {BMI_UNIT}", self.value)
    }
}

impl std::fmt::Display for BmiAssessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "BMI Assessment:")?;
        writeln!(f, "  BMI: {}", self.value_label())?;
        writeln!(f, "  Category: {}", self.category)?;
        writeln!(f, "  Scale position: {}", self.position_label())?;
        Ok(())
    }
}
