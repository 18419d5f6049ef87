#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::{Deserialize, Serialize};

use super::error::PlanError;
use crate::gpa::GpaSnapshot;

/// Alert text for a target GPA that cannot be reached.
pub const NOT_POSSIBLE: &str = "not possible with that amount of credits";

/// Most decimals an `f64` result is ever shown with.
pub const MAX_PRECISION: usize = 17;

/// Tolerance used when checking that a grade sits on a scale step.
const STEP_EPSILON: f64 = 1e-9;

/// The grade-point scale results and expected grades are judged against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeScale {
    /// Highest attainable grade point.
    max_grade_point: f64,
    /// Increment between valid grade points.
    step:            f64,
    /// Decimals shown when a result is displayed.
    precision:       usize,
}

impl Default for GradeScale {
    fn default() -> Self {
        Self {
            max_grade_point: 4.0,
            step:            0.5,
            precision:       2,
        }
    }
}

impl GradeScale {
    /// Creates a new scale -
    /// * `max_grade_point` - highest attainable grade point
    /// * `step` - increment between valid grade points
    /// * `precision` - decimals shown for results, capped at
    ///   [`MAX_PRECISION`]
    pub fn new(max_grade_point: f64, step: f64, precision: usize) -> Self {
        Self {
            max_grade_point,
            step,
            precision: precision.min(MAX_PRECISION),
        }
    }

    /// Returns the highest attainable grade point.
    pub fn max_grade_point(&self) -> f64 {
        self.max_grade_point
    }

    /// Returns the increment between valid grade points.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the number of decimals shown for results.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Whether `value` is finite and inside `[0, max_grade_point]`.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && (0.0..=self.max_grade_point).contains(&value)
    }

    /// Whether `value` is inside the scale and a whole number of steps.
    pub fn is_grade_point(&self, value: f64) -> bool {
        if !self.contains(value) {
            return false;
        }
        let steps = value / self.step;
        (steps - steps.round()).abs() < STEP_EPSILON
    }

    /// Sorts a computed projection into reachable or not.
    pub fn classify(&self, value: f64) -> Feasibility {
        if self.contains(value) {
            Feasibility::Achievable(value)
        } else {
            Feasibility::NotPossible(value)
        }
    }

    /// Formats `value` with the configured precision.
    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }

    /// Checks that a student's standing is usable as a projection start:
    /// a finite GPA on the scale and a finite, non-negative credit count.
    pub fn check_snapshot(&self, snapshot: &GpaSnapshot) -> Result<GpaSnapshot, PlanError> {
        let credits = snapshot.credits_earned;
        if self.contains(snapshot.cumulative_gpa) && credits.is_finite() && credits >= 0.0 {
            Ok(*snapshot)
        } else {
            Err(PlanError::SnapshotOutOfRange {
                gpa: snapshot.cumulative_gpa,
                credits,
                max: self.max_grade_point,
            })
        }
    }

    /// Checks that an already parsed expected grade for `course` is on the
    /// scale.
    pub fn check_grade_point(&self, course: &str, value: f64) -> Result<f64, PlanError> {
        if self.is_grade_point(value) {
            Ok(value)
        } else {
            Err(PlanError::GradeOffScale {
                course: course.to_string(),
                value,
                max: self.max_grade_point,
                step: self.step,
            })
        }
    }
}

/// Whether a projected value can actually be obtained on the grade scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Feasibility {
    /// Finite and inside the scale.
    Achievable(f64),
    /// Outside the scale or not finite.
    NotPossible(f64),
}

impl Feasibility {
    /// Returns the raw projected value.
    pub fn value(&self) -> f64 {
        match self {
            Feasibility::Achievable(v) | Feasibility::NotPossible(v) => *v,
        }
    }

    /// Returns true for [`Feasibility::Achievable`].
    pub fn is_achievable(&self) -> bool {
        matches!(self, Feasibility::Achievable(_))
    }
}

/// Returns the trimmed contents of a form field, or `None` when it is blank.
pub fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

/// Parses a form field into a finite number.
///
/// * `field`: name used in the error message
/// * `raw`: the entered text
pub fn parse_number(field: &'static str, raw: &str) -> Result<f64, PlanError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| PlanError::NotNumeric {
            field,
            value: raw.to_string(),
        })
}
