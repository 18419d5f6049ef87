#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Reasons a projection request is refused before it reaches the engine.
///
/// The `Display` text is what gets shown to the student.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// Neither the credit count nor the desired GPA was entered.
    #[error("Please enter credits and desired gpa")]
    MissingCreditsAndGpa,
    /// The credit count was not entered.
    #[error("Please enter credits")]
    MissingCredits,
    /// The desired GPA was not entered.
    #[error("Please enter desired gpa")]
    MissingDesiredGpa,
    /// A form field held something other than a finite number.
    #[error("{field} must be numeric")]
    NotNumeric {
        /// Human readable name of the field.
        field: &'static str,
        /// The rejected input.
        value: String,
    },
    /// Additional credits must be strictly positive.
    #[error("Credits must be greater than zero")]
    NonPositiveCredits(f64),
    /// A course row is missing its credits or its expected grade.
    #[error("one of your grades or credits is null")]
    MissingCell {
        /// Course the empty cell belongs to.
        course: String,
    },
    /// A course row holds a non-numeric credits or grade cell.
    #[error("one of your grades or credit is not numeric")]
    InvalidCell {
        /// Course the cell belongs to.
        course: String,
        /// The rejected input.
        value:  String,
    },
    /// A course row has a negative credit weight.
    #[error("Credits cannot be negative")]
    NegativeCredits {
        /// Course the cell belongs to.
        course: String,
    },
    /// An expected grade is not a step of the grade scale.
    #[error("Only 0 -> {max} are valid entries in {step} intervals")]
    GradeOffScale {
        /// Course the grade belongs to.
        course: String,
        /// The rejected grade.
        value:  f64,
        /// Top of the grade scale.
        max:    f64,
        /// Scale increment.
        step:   f64,
    },
    /// The starting GPA or credit count is outside what a student can have.
    #[error(
        "Current GPA must be between 0 and {max} and credits cannot be negative (got GPA {gpa}, \
         {credits} credits)"
    )]
    SnapshotOutOfRange {
        /// Rejected GPA.
        gpa:     f64,
        /// Rejected credit count.
        credits: f64,
        /// Top of the grade scale.
        max:     f64,
    },
    /// Current and semester credits add up to zero.
    #[error("Enter at least one credit to calculate a GPA")]
    NoCredits,
}
