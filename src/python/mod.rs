#![allow(unsafe_op_in_unsafe_fn)]

use pyo3::{Bound, prelude::*, types::PyModule};

mod error;
mod projection;

use error::{CourseCraftError, CourseCraftInputError};
use projection::{
    plan_future_gpa, plan_semester_gpa, project_future_gpa, project_semester_gpa,
    roster_snapshot,
};

/// PyO3 entry module exposing the projection engine and planners to the
/// web layer.
#[pymodule]
pub fn coursecraft(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("CourseCraftError", py.get_type::<CourseCraftError>())?;
    m.add("CourseCraftInputError", py.get_type::<CourseCraftInputError>())?;

    m.add_function(wrap_pyfunction!(project_future_gpa, m)?)?;
    m.add_function(wrap_pyfunction!(project_semester_gpa, m)?)?;
    m.add_function(wrap_pyfunction!(plan_future_gpa, m)?)?;
    m.add_function(wrap_pyfunction!(plan_semester_gpa, m)?)?;
    m.add_function(wrap_pyfunction!(roster_snapshot, m)?)?;

    Ok(())
}
