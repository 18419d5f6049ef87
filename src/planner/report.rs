#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, Width, object::Rows},
};

use super::semester::SemesterPlan;

/// A single line of the semester overview table.
#[derive(Tabled)]
struct CourseLine {
    #[tabled(rename = "Course")]
    /// * `course`: enrolled class name
    course:  String,
    #[tabled(rename = "Credits")]
    /// * `credits`: credit weight
    credits: String,
    #[tabled(rename = "Expected Grade")]
    /// * `grade`: expected grade point
    grade:   String,
}

impl SemesterPlan {
    /// Renders the course load and the projected GPA as a table.
    pub fn table(&self) -> String {
        let scale = self.scale();
        let lines: Vec<CourseLine> = self
            .courses()
            .iter()
            .zip(self.course_load())
            .map(|(course, entry)| CourseLine {
                course:  course.clone(),
                credits: format!("{}", entry.credits),
                grade:   scale.format(entry.expected_grade_point),
            })
            .collect();

        let snapshot = self.snapshot();
        let header = format!(
            "Current GPA: {} over {} credits",
            scale.format(snapshot.cumulative_gpa),
            snapshot.credits_earned
        );
        let footer = format!(
            "Projected GPA: {} over {} credits",
            scale.format(self.projected_gpa()),
            snapshot.credits_earned + self.semester_credits()
        );

        Table::new(&lines)
            .with(Panel::header(header))
            .with(Panel::footer(footer))
            .with(Modify::new(Rows::new(1..)).with(Width::wrap(48).keep_words(true)))
            .with(
                Modify::new(Rows::first())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(
                Modify::new(Rows::last())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(Style::modern())
            .to_string()
    }
}
