//! Unit-aware Body Mass Index computation, classification, and scale
//! mapping.
//!
//! BMI is a coarse health screening metric: weight divided by height
//! squared. This crate is the calculation core behind a BMI form — it
//! computes the value, classifies it into one of four health categories,
//! and maps it onto a fixed 16-40 visual scale. Form rendering, widgets,
//! and layout are the caller's business; the crate takes validated
//! numeric inputs and returns a structured result.
//!
//! # Unit Systems
//!
//! - [`UnitSystem::Metric`]: height in cm, weight in kg,
//!   `BMI = kg / m²`
//! - [`UnitSystem::Imperial`]: height in in, weight in lb,
//!   `BMI = lb / in² × 703`
//!
//! Each system carries its own plausible input ranges, shared between the
//! caller's form validation and the core's defensive re-validation.
//!
//! # Categories
//!
//! Four contiguous bands cover `[0, +inf)`: [`BmiCategory::Underweight`]
//! (below 18.5), [`BmiCategory::Normal`] (18.5-25),
//! [`BmiCategory::Overweight`] (25-30), and [`BmiCategory::Obese`] (30+).
//! Boundaries are inclusive below and exclusive above. Each category owns
//! static descriptive text, recommendations, and a color tag.
//!
//! # Example
//!
//! ```
//! use bmi_core::{calculate, BmiCategory, Measurement, UnitSystem};
//!
//! let measurement = Measurement::new(170.0, 70.0, UnitSystem::Metric)?;
//! let assessment = calculate(&measurement)?;
//!
//! assert!((assessment.value - 24.2).abs() < 1e-10);
//! assert_eq!(assessment.category, BmiCategory::Normal);
//! assert_eq!(assessment.category.color().as_str(), "green");
//! # Ok::<(), bmi_core::BmiError>(())
//! ```
//!
//! # Design
//!
//! Every operation is a pure, synchronous function; all reference data is
//! `'static`. There is no I/O, no shared mutable state, and no
//! platform-dependent behavior beyond IEEE 754 arithmetic, so concurrent
//! use needs no coordination. Enable the `serde` feature to serialize the
//! public types.

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod assessment;
mod calc;
mod category;
mod error;
mod measurement;
mod scale;
mod units;

// Re-export core types
pub use assessment::{BmiAssessment, BMI_UNIT};
pub use calc::{calculate, compute_bmi};
pub use category::{BmiCategory, ColorTag};
pub use error::{BmiError, BmiResult, InputField};
pub use measurement::Measurement;
pub use scale::{scale_position, SCALE_MARKERS, SCALE_MAX, SCALE_MIN};
pub use units::{UnitSystem, CM_PER_METER, IMPERIAL_BMI_FACTOR};
