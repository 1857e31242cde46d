//! BMI health categories and classification.
//!
//! The four categories are static reference data: each variant owns its
//! bounds, color tag, descriptive paragraph, and recommendations as
//! `'static` data compiled into the binary. The enum makes the
//! contiguous-and-exhaustive boundary invariant checkable at compile time.

/// Color tag associated with a category, for presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorTag {
    /// Underweight band.
    Blue,
    /// Normal band.
    Green,
    /// Overweight band.
    Yellow,
    /// Obese band.
    Red,
}

impl ColorTag {
    /// Lowercase color name ("blue", "green", "yellow", "red").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

impl std::fmt::Display for ColorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// BMI health category.
///
/// Bounds are inclusive below and exclusive above, contiguous over
/// `[0, +inf)`: every non-negative BMI maps to exactly one category, and a
/// value exactly on a boundary belongs to the higher category.
///
/// | Category | Lower (incl.) | Upper (excl.) | Color |
/// |---|---|---|---|
/// | Underweight | 0 | 18.5 | blue |
/// | Normal | 18.5 | 25 | green |
/// | Overweight | 25 | 30 | yellow |
/// | Obese | 30 | +inf | red |
///
/// # Example
///
/// ```
/// use bmi_core::BmiCategory;
///
/// assert_eq!(BmiCategory::classify(24.2), BmiCategory::Normal);
/// assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
/// assert_eq!(BmiCategory::Normal.color().as_str(), "green");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BmiCategory {
    /// BMI below 18.5.
    Underweight,
    /// BMI from 18.5 up to (but not including) 25.
    Normal,
    /// BMI from 25 up to (but not including) 30.
    Overweight,
    /// BMI of 30 or above.
    Obese,
}

impl BmiCategory {
    /// All categories in ascending order of upper bound.
    pub const ALL: [Self; 4] = [Self::Underweight, Self::Normal, Self::Overweight, Self::Obese];

    /// Classify a BMI value into its category.
    ///
    /// Scans the categories in ascending order and returns the first whose
    /// upper bound strictly exceeds `bmi`. `Obese` is unbounded above, so
    /// any value of 30 or more falls through to it; there is no
    /// missing-match case.
    ///
    /// Negative or non-finite input is a caller bug, not a runtime
    /// condition: debug builds assert, release builds still return a
    /// category (negative values classify as `Underweight`).
    #[must_use]
    pub fn classify(bmi: f64) -> Self {
        debug_assert!(
            bmi.is_finite() && bmi >= 0.0,
            "classify requires a finite, non-negative BMI, got {bmi}"
        );
        for category in Self::ALL {
            if bmi < category.upper_bound() {
                return category;
            }
        }
        Self::Obese
    }

    /// Display name of the category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Color tag for presentation.
    #[must_use]
    pub const fn color(self) -> ColorTag {
        match self {
            Self::Underweight => ColorTag::Blue,
            Self::Normal => ColorTag::Green,
            Self::Overweight => ColorTag::Yellow,
            Self::Obese => ColorTag::Red,
        }
    }

    /// Inclusive lower bound of the category's BMI band.
    #[must_use]
    pub const fn lower_bound(self) -> f64 {
        match self {
            Self::Underweight => 0.0,
            Self::Normal => 18.5,
            Self::Overweight => 25.0,
            Self::Obese => 30.0,
        }
    }

    /// Exclusive upper bound of the category's BMI band.
    ///
    /// `Obese` returns `f64::INFINITY`.
    #[must_use]
    pub const fn upper_bound(self) -> f64 {
        match self {
            Self::Underweight => 18.5,
            Self::Normal => 25.0,
            Self::Overweight => 30.0,
            Self::Obese => f64::INFINITY,
        }
    }

    /// Whether `bmi` falls inside this category's band.
    #[must_use]
    pub fn contains(self, bmi: f64) -> bool {
        bmi >= self.lower_bound() && bmi < self.upper_bound()
    }

    /// Fixed position (percent) at which a legend label for this category
    /// sits on the display scale.
    ///
    /// The display scale shows four equal bands; these are the band
    /// midpoints, unrelated to the BMI bounds.
    #[must_use]
    pub const fn label_position(self) -> f64 {
        match self {
            Self::Underweight => 12.5,
            Self::Normal => 37.5,
            Self::Overweight => 62.5,
            Self::Obese => 87.5,
        }
    }

    /// Short human-readable band description for legend rendering.
    #[must_use]
    pub const fn range_label(self) -> &'static str {
        match self {
            Self::Underweight => "BMI below 18.5",
            Self::Normal => "BMI between 18.5 and 24.9",
            Self::Overweight => "BMI between 25 and 29.9",
            Self::Obese => "BMI of 30 or above",
        }
    }

    /// Descriptive paragraph explaining what the category means.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Underweight => {
                "Your BMI indicates you are below the weight considered healthy. \
                 This can be associated with health problems such as nutritional \
                 deficiencies, a weakened immune system, or hormonal issues."
            }
            Self::Normal => {
                "Your BMI indicates a normal weight. Maintaining a healthy weight \
                 can reduce the risk of chronic diseases associated with \
                 overweight and obesity."
            }
            Self::Overweight => {
                "Your BMI indicates overweight. This can increase the risk of \
                 developing health conditions such as type 2 diabetes, heart \
                 disease, and high blood pressure."
            }
            Self::Obese => {
                "Your BMI indicates obesity. This significantly increases the \
                 risk of several health problems including type 2 diabetes, \
                 heart disease, sleep apnea, and certain types of cancer."
            }
        }
    }

    /// Three fixed recommendations for the category.
    #[must_use]
    pub const fn recommendations(self) -> [&'static str; 3] {
        match self {
            Self::Underweight => [
                "Consult a health professional for an evaluation",
                "Consider increasing caloric intake with nutritious foods",
                "Incorporate muscle-strengthening exercises",
            ],
            Self::Normal => [
                "Maintain a balanced and varied diet",
                "Get at least 150 minutes of moderate physical activity per week",
                "Monitor your weight regularly",
            ],
            Self::Overweight => [
                "Gradually reduce caloric intake",
                "Increase physical activity to 150-300 minutes per week",
                "Focus on sustainable habits, not crash diets",
            ],
            Self::Obese => [
                "Consult a health professional for a personalized plan",
                "Set small, achievable weight-loss goals",
                "Combine dietary changes with regular physical activity",
            ],
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_contiguous() {
        // Each category's upper bound is the next category's lower bound
        for pair in BmiCategory::ALL.windows(2) {
            assert!((pair[0].upper_bound() - pair[1].lower_bound()).abs() < f64::EPSILON);
        }
        assert!((BmiCategory::ALL[0].lower_bound()).abs() < f64::EPSILON);
        assert!(BmiCategory::ALL[3].upper_bound().is_infinite());
    }

    #[test]
    fn classify_boundary_values_go_to_higher_category() {
        assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(30.0), BmiCategory::Obese);
    }

    #[test]
    fn classify_interior_values() {
        assert_eq!(BmiCategory::classify(0.0), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(17.6), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(24.2), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(24.95), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(29.99), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(30.9), BmiCategory::Obese);
        assert_eq!(BmiCategory::classify(80.0), BmiCategory::Obese);
    }

    #[test]
    fn classify_is_exhaustive() {
        // Every tenth from 0 to 60 lands in exactly one category
        let mut bmi = 0.0;
        while bmi < 60.0 {
            let matching = BmiCategory::ALL
                .iter()
                .filter(|c| c.contains(bmi))
                .count();
            assert_eq!(matching, 1, "bmi {bmi} matched {matching} categories");
            bmi += 0.1;
        }
    }

    #[test]
    fn classify_agrees_with_contains() {
        for bmi in [0.0, 10.0, 18.5, 20.0, 24.9, 25.0, 29.9, 30.0, 55.0] {
            assert!(BmiCategory::classify(bmi).contains(bmi));
        }
    }

    #[test]
    fn names_and_colors() {
        assert_eq!(BmiCategory::Underweight.name(), "Underweight");
        assert_eq!(BmiCategory::Underweight.color(), ColorTag::Blue);
        assert_eq!(BmiCategory::Normal.color(), ColorTag::Green);
        assert_eq!(BmiCategory::Overweight.color(), ColorTag::Yellow);
        assert_eq!(BmiCategory::Obese.color(), ColorTag::Red);
        assert_eq!(ColorTag::Red.as_str(), "red");
    }

    #[test]
    fn static_tables_complete() {
        for category in BmiCategory::ALL {
            assert!(!category.description().is_empty());
            assert_eq!(category.recommendations().len(), 3);
            for rec in category.recommendations() {
                assert!(!rec.is_empty());
            }
            assert!(!category.range_label().is_empty());
        }
    }

    #[test]
    fn label_positions_ascend() {
        let positions: Vec<f64> = BmiCategory::ALL.iter().map(|c| c.label_position()).collect();
        for pair in positions.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!((BmiCategory::Underweight.label_position() - 12.5).abs() < f64::EPSILON);
        assert!((BmiCategory::Obese.label_position() - 87.5).abs() < f64::EPSILON);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(format!("{}", BmiCategory::Normal), "Normal weight");
    }

    #[test]
    #[should_panic(expected = "finite, non-negative")]
    #[cfg(debug_assertions)]
    fn classify_negative_panics_in_debug() {
        let _ = BmiCategory::classify(-1.0);
    }
}
