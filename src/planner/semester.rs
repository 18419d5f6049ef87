#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::{
    error::PlanError,
    policy::{Feasibility, GradeScale, parse_number, present},
};
use crate::gpa::{CourseLoadEntry, GpaSnapshot, project_semester_gpa};

/// One row of the semester table as the student filled it in.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct CourseLoadRow {
    /// Name of the enrolled class.
    pub class_name:     String,
    /// Entered credit weight, if any.
    pub course_credits: Option<String>,
    /// Entered expected grade, if any.
    pub likely_grade:   Option<String>,
}

impl CourseLoadRow {
    /// Creates a row with both cells filled in.
    pub fn filled(
        class_name: impl Into<String>,
        course_credits: impl Into<String>,
        likely_grade: impl Into<String>,
    ) -> Self {
        Self {
            class_name:     class_name.into(),
            course_credits: Some(course_credits.into()),
            likely_grade:   Some(likely_grade.into()),
        }
    }
}

/// Outcome of a "what will my GPA be after this semester" request.
#[derive(Debug, Clone, Serialize)]
pub struct SemesterPlan {
    /// Standing the projection started from.
    snapshot:    GpaSnapshot,
    /// Class names, parallel to `course_load`.
    courses:     Vec<String>,
    /// Parsed course load handed to the engine.
    course_load: Vec<CourseLoadEntry>,
    /// Projected cumulative GPA.
    feasibility: Feasibility,
    /// Scale used to judge and format the result.
    #[serde(skip)]
    scale:       GradeScale,
}

impl SemesterPlan {
    /// Returns the snapshot the projection started from.
    pub fn snapshot(&self) -> &GpaSnapshot {
        &self.snapshot
    }

    /// Returns the class names in table order.
    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    /// Returns the parsed course load.
    pub fn course_load(&self) -> &[CourseLoadEntry] {
        &self.course_load
    }

    /// Returns the projected cumulative GPA.
    pub fn projected_gpa(&self) -> f64 {
        self.feasibility.value()
    }

    /// Returns whether the projection is on the grade scale.
    pub fn feasibility(&self) -> Feasibility {
        self.feasibility
    }

    /// Returns the scale the plan was judged against.
    pub fn scale(&self) -> &GradeScale {
        &self.scale
    }

    /// Total credits the course load adds.
    pub fn semester_credits(&self) -> f64 {
        self.course_load.iter().map(|e| e.credits).sum()
    }
}

impl Display for SemesterPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.feasibility {
            Feasibility::Achievable(v) => write!(f, "{}", self.scale.format(v)),
            Feasibility::NotPossible(v) => write!(
                f,
                "Projected GPA {} is outside the 0 -> {} scale",
                self.scale.format(v),
                self.scale.max_grade_point()
            ),
        }
    }
}

/// Validates the semester table and, if it passes, runs the projection.
///
/// Rows are checked in passes (missing cells, then numbers, then credit
/// signs, then the grade scale) so the first problem reported is the most
/// basic one.
///
/// * `snapshot`: the student's current standing
/// * `rows`: one row per enrolled class
/// * `scale`: grade scale expected grades must sit on
pub fn plan_semester_gpa(
    snapshot: &GpaSnapshot,
    rows: &[CourseLoadRow],
    scale: &GradeScale,
) -> Result<SemesterPlan, PlanError> {
    build(snapshot, rows, scale)
        .inspect_err(|e| tracing::warn!(reason = %e, "Rejected semester GPA request"))
}

/// Does the work for [`plan_semester_gpa`] without logging rejections.
fn build(
    snapshot: &GpaSnapshot,
    rows: &[CourseLoadRow],
    scale: &GradeScale,
) -> Result<SemesterPlan, PlanError> {
    let cells = rows
        .iter()
        .map(|row| {
            match (
                present(row.course_credits.as_deref()),
                present(row.likely_grade.as_deref()),
            ) {
                (Some(credits), Some(grade)) => Ok((row.class_name.as_str(), credits, grade)),
                _ => Err(PlanError::MissingCell {
                    course: row.class_name.clone(),
                }),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    let parsed = cells
        .into_iter()
        .map(|(course, credits, grade)| -> Result<_, PlanError> {
            let numeric = |raw: &str| {
                parse_number("Course credits", raw).map_err(|_| PlanError::InvalidCell {
                    course: course.to_string(),
                    value:  raw.to_string(),
                })
            };
            Ok((course, numeric(credits)?, numeric(grade)?))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if let Some((course, ..)) = parsed.iter().find(|(_, credits, _)| *credits < 0.0) {
        return Err(PlanError::NegativeCredits {
            course: course.to_string(),
        });
    }

    let mut courses = Vec::with_capacity(parsed.len());
    let mut course_load = Vec::with_capacity(parsed.len());
    for (course, credits, grade) in parsed {
        let grade = scale.check_grade_point(course, grade)?;
        courses.push(course.to_string());
        course_load.push(CourseLoadEntry::new(credits, grade));
    }

    let semester_credits: f64 = course_load.iter().map(|e| e.credits).sum();
    if snapshot.credits_earned + semester_credits <= 0.0 {
        return Err(PlanError::NoCredits);
    }

    let projected = project_semester_gpa(
        &course_load,
        snapshot.cumulative_gpa,
        snapshot.credits_earned,
    );
    tracing::debug!(
        current_gpa = snapshot.cumulative_gpa,
        current_credits = snapshot.credits_earned,
        courses = course_load.len(),
        semester_credits,
        projected,
        "Projected semester GPA"
    );

    Ok(SemesterPlan {
        snapshot: *snapshot,
        courses,
        course_load,
        feasibility: scale.classify(projected),
        scale: *scale,
    })
}
