#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{collections::HashMap, fmt::Display, fs, path::Path};

use anyhow::{Context, Result, anyhow};
use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{gpa::GpaSnapshot, planner::CourseLoadRow};

/// Majors a student can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Major {
    /// Computer science.
    Cs,
    /// Mathematics.
    Math,
    /// Biology.
    Biology,
    /// Physics.
    Physics,
    /// Chemistry.
    Chemistry,
    /// English.
    English,
}

impl Display for Major {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Major::Cs => "CS",
            Major::Math => "MATH",
            Major::Biology => "BIOLOGY",
            Major::Physics => "PHYSICS",
            Major::Chemistry => "CHEMISTRY",
            Major::English => "ENGLISH",
        };
        write!(f, "{name}")
    }
}

/// A student record as kept by the account store.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct StudentAccount {
    /// Account id.
    pub id:             u64,
    /// Login email.
    pub email:          String,
    /// Display name.
    pub name:           String,
    /// Declared major.
    pub major:          Major,
    /// Cumulative GPA.
    #[builder(default)]
    pub gpa:            f64,
    /// Credits completed and counted in `gpa`.
    #[builder(default)]
    pub credits_earned: f64,
    /// Credits currently enrolled in.
    #[builder(default)]
    #[serde(default)]
    pub credits_taking: f64,
    /// Grade points earned so far.
    #[builder(default)]
    #[serde(default)]
    pub gpa_credits:    f64,
}

impl StudentAccount {
    /// The standing GPA projections start from.
    pub fn snapshot(&self) -> GpaSnapshot {
        GpaSnapshot::new(self.gpa, self.credits_earned)
    }
}

/// A student's registration in a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Enrolled student.
    pub student_id: u64,
    /// Class the student is enrolled in.
    pub class_name: String,
}

/// Read access to accounts and enrollments.
pub trait StudentStore {
    /// Looks up a student account by id.
    fn account(&self, id: u64) -> Result<StudentAccount>;

    /// Returns the classes a student is enrolled in.
    fn enrolled_courses(&self, id: u64) -> Result<Vec<Enrollment>>;
}

/// An in-memory store, usually loaded from a JSON roster file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    /// All known student accounts.
    #[serde(default)]
    students:    Vec<StudentAccount>,
    /// All enrollments.
    #[serde(default)]
    enrollments: Vec<Enrollment>,
}

impl Roster {
    /// Builds a roster from already loaded records.
    pub fn new(students: Vec<StudentAccount>, enrollments: Vec<Enrollment>) -> Self {
        Self {
            students,
            enrollments,
        }
    }

    /// Parses a roster from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse roster JSON")
    }

    /// Reads and parses the roster at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster: {}", path.display()))?;
        let roster = Self::from_json(&json)
            .with_context(|| format!("Invalid roster: {}", path.display()))?;
        tracing::info!(
            students = roster.students.len(),
            enrollments = roster.enrollments.len(),
            "Loaded roster from {}",
            path.display()
        );
        Ok(roster)
    }

    /// Returns every student on the roster.
    pub fn students(&self) -> &[StudentAccount] {
        &self.students
    }
}

impl StudentStore for Roster {
    fn account(&self, id: u64) -> Result<StudentAccount> {
        self.students
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| anyhow!("No student with id {id} on the roster"))
    }

    fn enrolled_courses(&self, id: u64) -> Result<Vec<Enrollment>> {
        Ok(self
            .enrollments
            .iter()
            .filter(|e| e.student_id == id)
            .cloned()
            .collect())
    }
}

/// Builds the semester table for a student: one row per enrolled class,
/// filled from `entered` (class name to `(credits, grade)`). Classes the
/// student did not fill in keep empty cells.
///
/// * `store`: where enrollments come from
/// * `student_id`: whose table to build
/// * `entered`: the cells the student typed in
pub fn semester_rows(
    store: &impl StudentStore,
    student_id: u64,
    entered: &HashMap<String, (String, String)>,
) -> Result<Vec<CourseLoadRow>> {
    let enrolled = store
        .enrolled_courses(student_id)
        .with_context(|| format!("Failed to load enrollments for student {student_id}"))?;

    for name in entered.keys() {
        if !enrolled.iter().any(|e| &e.class_name == name) {
            tracing::warn!("Student {student_id} is not enrolled in {name}; ignoring it");
        }
    }

    Ok(enrolled
        .into_iter()
        .map(|e| {
            let cells = entered.get(&e.class_name);
            CourseLoadRow {
                course_credits: cells.map(|(credits, _)| credits.clone()),
                likely_grade:   cells.map(|(_, grade)| grade.clone()),
                class_name:     e.class_name,
            }
        })
        .collect())
}
