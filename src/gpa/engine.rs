#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use super::types::CourseLoadEntry;

/// Returns the average grade point a student must earn over
/// `additional_credits` so that their cumulative GPA ends up at
/// `desired_gpa`.
///
/// * `current_gpa`: cumulative GPA so far
/// * `current_credits`: credits behind `current_gpa`
/// * `additional_credits`: credits still to be taken
/// * `desired_gpa`: cumulative GPA the student wants to reach
///
/// Inputs are not checked. A result below `0` or above the top of the grade
/// scale means the target cannot be reached with that many credits, and
/// `additional_credits == 0` yields a non-finite value. Callers decide what
/// to do with either.
pub fn project_future_gpa(
    current_gpa: f64,
    current_credits: f64,
    additional_credits: f64,
    desired_gpa: f64,
) -> f64 {
    let current_points = current_gpa * current_credits;
    let desired_points = desired_gpa * (current_credits + additional_credits);

    (desired_points - current_points) / additional_credits
}

/// Returns the cumulative GPA after every course in `course_load` is
/// completed at its expected grade point.
///
/// * `course_load`: in-progress courses, in any order
/// * `current_gpa`: cumulative GPA so far
/// * `current_credits`: credits behind `current_gpa`
///
/// Zero-credit courses leave the GPA untouched. With no credits at all the
/// result is NaN; callers must refuse that case before displaying anything.
pub fn project_semester_gpa(
    course_load: &[CourseLoadEntry],
    current_gpa: f64,
    current_credits: f64,
) -> f64 {
    let (semester_points, semester_credits) = course_load
        .iter()
        .fold((0.0, 0.0), |(points, credits), entry| {
            (points + entry.grade_points(), credits + entry.credits)
        });

    let total_points = current_gpa * current_credits + semester_points;
    let total_credits = current_credits + semester_credits;

    total_points / total_credits
}
