// src/lib.rs

// Publieke modules voor gebruik binnen de Rust-crate
pub mod error;
pub mod experiment;
pub mod generators;
pub mod graph;
pub mod params;
pub mod walk;

// Her-exporteer de belangrijkste types voor Rust-gebruikers
pub use error::{ExperimentError, ParamsError, WalkError};
pub use generators::{complete_graph, cycle_graph, random_graph, Topology};
pub use graph::{MultiGraph, Neighbourhood};
pub use params::Params;
pub use walk::{Walk, WalkMode, DEFAULT_START};

#[cfg(feature = "python")]
mod python {
    use crate::{
        error::{ExperimentError, WalkError},
        experiment, Params,
    };
    use pyo3::exceptions::{PyIOError, PyRuntimeError, PyValueError};
    use pyo3::prelude::*;

    type PyReport = (usize, u64, u64, u64, usize, usize, u64, bool);

    fn to_py_err(err: ExperimentError) -> PyErr {
        match err {
            ExperimentError::Params(_) | ExperimentError::Walk(WalkError::StartOutOfRange { .. }) => {
                PyErr::new::<PyValueError, _>(err.to_string())
            }
            ExperimentError::Walk(_) => PyErr::new::<PyRuntimeError, _>(err.to_string()),
            ExperimentError::Load { .. } => PyErr::new::<PyIOError, _>(err.to_string()),
        }
    }

    fn snapshot(py: Python<'_>, py_params: &Py<Params>) -> Params {
        py_params.borrow(py).clone()
    }

    /// Python-binding: voert alle runs uit en geeft per run
    /// `(n, m, trace_before, trace_after, cover, t, edges_left, completed)` terug.
    #[pyfunction]
    #[pyo3(signature = (py_params))]
    fn run_walk_py(py: Python<'_>, py_params: Py<Params>) -> PyResult<Vec<PyReport>> {
        let p = snapshot(py, &py_params);
        let reports = experiment::run(&p).map_err(to_py_err)?;
        Ok(reports
            .into_iter()
            .map(|r| {
                (
                    r.n,
                    r.edges,
                    r.trace_before,
                    r.trace_after,
                    r.cover,
                    r.time,
                    r.edges_left,
                    r.completed,
                )
            })
            .collect())
    }

    /// Python-binding voor de cover-tijd van één run.
    #[pyfunction]
    #[pyo3(signature = (py_params))]
    fn cover_time_py(py: Python<'_>, py_params: Py<Params>) -> PyResult<usize> {
        let p = snapshot(py, &py_params);
        experiment::cover_time(&p).map_err(to_py_err)
    }

    /// Helperfunctie om een DIMACS-bestand te parsen en (n, m) terug te geven.
    #[pyfunction]
    fn parse_dimacs_py(instance_path: String) -> PyResult<(usize, u64)> {
        let graph = experiment::load_instance(&instance_path).map_err(to_py_err)?;
        Ok((graph.n(), graph.total_edges()))
    }

    /// Definieert de Python-module `_native`.
    #[pymodule]
    fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_class::<Params>()?;
        m.add_function(wrap_pyfunction!(run_walk_py, m)?)?;
        m.add_function(wrap_pyfunction!(cover_time_py, m)?)?;
        m.add_function(wrap_pyfunction!(parse_dimacs_py, m)?)?;
        Ok(())
    }
}
