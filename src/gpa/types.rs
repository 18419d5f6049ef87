#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::engine::{project_future_gpa, project_semester_gpa};

/// A student's academic standing before a projection is made.
#[derive(Debug, Clone, Copy, Default, PartialEq, Builder, Serialize, Deserialize)]
pub struct GpaSnapshot {
    /// Credit-weighted average of all grade points earned so far.
    #[builder(getter)]
    pub cumulative_gpa: f64,
    /// Credits counted towards `cumulative_gpa`.
    #[builder(getter)]
    pub credits_earned: f64,
}

impl GpaSnapshot {
    /// Creates a new snapshot -
    /// * `cumulative_gpa` - current cumulative GPA
    /// * `credits_earned` - credits behind that GPA
    pub fn new(cumulative_gpa: f64, credits_earned: f64) -> Self {
        Self {
            cumulative_gpa,
            credits_earned,
        }
    }

    /// Grade points accumulated so far (`gpa * credits`).
    pub fn grade_points(&self) -> f64 {
        self.cumulative_gpa * self.credits_earned
    }

    /// Average grade point needed over `additional_credits` to finish at
    /// `desired_gpa`. See [`project_future_gpa`].
    pub fn future_average_needed(&self, additional_credits: f64, desired_gpa: f64) -> f64 {
        project_future_gpa(
            self.cumulative_gpa,
            self.credits_earned,
            additional_credits,
            desired_gpa,
        )
    }

    /// Cumulative GPA once `course_load` is completed. See
    /// [`project_semester_gpa`].
    pub fn after_semester(&self, course_load: &[CourseLoadEntry]) -> f64 {
        project_semester_gpa(course_load, self.cumulative_gpa, self.credits_earned)
    }
}

/// One in-progress course and the grade point the student expects from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Builder, Serialize, Deserialize)]
pub struct CourseLoadEntry {
    /// Credit weight of the course.
    #[builder(getter)]
    pub credits:              f64,
    /// Expected grade point, normally on the half-point scale.
    #[builder(getter)]
    pub expected_grade_point: f64,
}

impl CourseLoadEntry {
    /// Creates a new course load entry -
    /// * `credits` - credit weight of the course
    /// * `expected_grade_point` - expected grade point for the course
    pub fn new(credits: f64, expected_grade_point: f64) -> Self {
        Self {
            credits,
            expected_grade_point,
        }
    }

    /// Grade points this course contributes (`credits * grade point`).
    pub fn grade_points(&self) -> f64 {
        self.credits * self.expected_grade_point
    }
}

impl From<(f64, f64)> for CourseLoadEntry {
    fn from((credits, expected_grade_point): (f64, f64)) -> Self {
        Self::new(credits, expected_grade_point)
    }
}
