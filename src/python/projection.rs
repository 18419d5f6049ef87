use std::path::PathBuf;

use pyo3::prelude::*;

use super::error::{anyhow_to_py, plan_result_to_py};
use crate::{
    config,
    gpa::{self, CourseLoadEntry, GpaSnapshot},
    planner::{self, CourseLoadRow},
    student::{Roster, StudentStore},
};

/// Average grade point needed over `additional_credits` to end at
/// `desired_gpa`. Unchecked; may be negative, above the scale, or inf.
#[pyfunction]
pub fn project_future_gpa(
    current_gpa: f64,
    current_credits: f64,
    additional_credits: f64,
    desired_gpa: f64,
) -> f64 {
    gpa::project_future_gpa(current_gpa, current_credits, additional_credits, desired_gpa)
}

/// Cumulative GPA after a course load of `(credits, grade_point)` pairs.
/// Unchecked; NaN when there are no credits at all.
#[pyfunction]
pub fn project_semester_gpa(
    course_load: Vec<(f64, f64)>,
    current_gpa: f64,
    current_credits: f64,
) -> f64 {
    let entries: Vec<CourseLoadEntry> = course_load.into_iter().map(Into::into).collect();
    gpa::project_semester_gpa(&entries, current_gpa, current_credits)
}

/// Validates the future-GPA form and returns the alert text.
#[pyfunction]
#[pyo3(signature = (current_gpa, current_credits, credits_wanted=None, desired_gpa=None))]
pub fn plan_future_gpa(
    current_gpa: f64,
    current_credits: f64,
    credits_wanted: Option<String>,
    desired_gpa: Option<String>,
) -> PyResult<String> {
    let snapshot = GpaSnapshot::new(current_gpa, current_credits);
    let plan = plan_result_to_py(planner::plan_future_gpa(
        &snapshot,
        credits_wanted.as_deref(),
        desired_gpa.as_deref(),
        &config::grade_scale(),
    ))?;
    Ok(plan.to_string())
}

/// Validates semester rows of `(class_name, course_credits, likely_grade)`
/// and returns the alert text.
#[pyfunction]
pub fn plan_semester_gpa(
    rows: Vec<(String, Option<String>, Option<String>)>,
    current_gpa: f64,
    current_credits: f64,
) -> PyResult<String> {
    let rows: Vec<CourseLoadRow> = rows
        .into_iter()
        .map(|(class_name, course_credits, likely_grade)| CourseLoadRow {
            class_name,
            course_credits,
            likely_grade,
        })
        .collect();
    let snapshot = GpaSnapshot::new(current_gpa, current_credits);
    let plan = plan_result_to_py(planner::plan_semester_gpa(
        &snapshot,
        &rows,
        &config::grade_scale(),
    ))?;
    Ok(plan.to_string())
}

/// Returns `(gpa, credits_earned)` for a student on a roster file.
#[pyfunction]
pub fn roster_snapshot(roster: PathBuf, student_id: u64) -> PyResult<(f64, f64)> {
    let account = Roster::load(&roster)
        .and_then(|r| r.account(student_id))
        .map_err(anyhow_to_py)?;
    let snapshot = account.snapshot();
    Ok((snapshot.cumulative_gpa, snapshot.credits_earned))
}
