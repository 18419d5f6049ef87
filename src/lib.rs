//! # coursecraft
//!
//! GPA projection for the CourseCraft course manager: a pure calculation
//! core, the input and result policy the student screens apply around it,
//! and read access to student accounts and enrollments.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Environment-driven configuration
pub mod config;
/// The pure GPA projection engine
pub mod gpa;
/// Validation and result policy around the engine
pub mod planner;
/// Python bindings
#[cfg(feature = "python")]
pub mod python;
/// Student accounts and enrollments
pub mod student;

pub use gpa::{CourseLoadEntry, GpaSnapshot, project_future_gpa, project_semester_gpa};
pub use planner::{
    CourseLoadRow, Feasibility, FuturePlan, GradeScale, PlanError, SemesterPlan, plan_future_gpa,
    plan_semester_gpa,
};
pub use student::{Enrollment, Major, Roster, StudentAccount, StudentStore, semester_rows};
