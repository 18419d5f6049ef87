use pyo3::{PyErr, create_exception, exceptions::PyException};

use crate::planner::PlanError;

create_exception!(coursecraft, CourseCraftError, PyException);
create_exception!(coursecraft, CourseCraftInputError, CourseCraftError);

pub(crate) fn anyhow_to_py(err: anyhow::Error) -> PyErr {
    PyErr::new::<CourseCraftError, _>(format!("{err:#}"))
}

pub(crate) fn plan_error_to_py(err: PlanError) -> PyErr {
    PyErr::new::<CourseCraftInputError, _>(err.to_string())
}

pub(crate) fn plan_result_to_py<T>(result: Result<T, PlanError>) -> Result<T, PyErr> {
    result.map_err(plan_error_to_py)
}
