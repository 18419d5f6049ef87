#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Input checks and result policy applied around the GPA engine: the
//! engine computes, this module decides what a student is allowed to ask
//! and how the answer is shown.

/// Rejection reasons for planner requests.
pub mod error;
/// Future-GPA form handling.
pub mod future;
/// Grade scale, feasibility, and field parsing.
pub mod policy;
/// Tabular rendering of semester plans.
pub mod report;
/// Semester table handling.
pub mod semester;

pub use error::PlanError;
pub use future::{FuturePlan, plan_future_gpa};
pub use policy::{Feasibility, GradeScale, NOT_POSSIBLE};
pub use semester::{CourseLoadRow, SemesterPlan, plan_semester_gpa};
