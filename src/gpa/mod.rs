#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Pure GPA projection arithmetic. Nothing in here validates, logs, or
//! touches global state.

/// The two projection functions.
pub mod engine;
/// Snapshot and course load inputs.
pub mod types;

pub use engine::{project_future_gpa, project_semester_gpa};
pub use types::{CourseLoadEntry, GpaSnapshot};
