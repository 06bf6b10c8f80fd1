//! Python bindings, enabled with the `python` feature.

use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use crate::error::RankError;

impl From<RankError> for PyErr {
    fn from(err: RankError) -> Self {
        if err.is_index_error() {
            PyIndexError::new_err(err.to_string())
        } else {
            PyValueError::new_err(err.to_string())
        }
    }
}

/// Compute the next rank vector of a personalized random walk.
///
/// # Arguments
///
/// * `rank` - Current rank vector
/// * `u` - Restart vertex
/// * `degrees` - Out-degree of each vertex
/// * `row` - Source vertex of each edge
/// * `col` - Destination vertex of each edge
/// * `edge_weights` - Weight of each edge
/// * `alpha` - Restart probability (default: 0.85)
///
/// # Returns
///
/// List with the new rank of each vertex.
///
/// # Example
///
/// ```python
/// rank_update([1.0, 0.0, 0.0], 0, [1, 1, 0], [0, 1], [1, 2], [1.0, 1.0], 0.15)
/// # [0.15, 0.85, 0.0]
/// ```
#[pyfunction]
#[allow(clippy::too_many_arguments)]
#[pyo3(signature = (rank, u, degrees, row, col, edge_weights, alpha=crate::config::DEFAULT_ALPHA))]
fn rank_update(
    py: Python<'_>,
    rank: Vec<f64>,
    u: usize,
    degrees: Vec<usize>,
    row: Vec<usize>,
    col: Vec<usize>,
    edge_weights: Vec<f64>,
    alpha: f64,
) -> PyResult<Vec<f64>> {
    // Release GIL during computation
    let next = py.allow_threads(|| {
        crate::rank_update(&rank, u, &degrees, &row, &col, &edge_weights, alpha)
    })?;

    Ok(next)
}

/// Compare two rank vectors.
///
/// # Returns
///
/// Tuple `(converged, max_delta)` where `converged` is `max_delta < epsilon`.
#[pyfunction]
#[pyo3(signature = (x1, x2, epsilon=crate::config::DEFAULT_EPSILON))]
fn check_convergence(
    py: Python<'_>,
    x1: Vec<f64>,
    x2: Vec<f64>,
    epsilon: f64,
) -> PyResult<(bool, f64)> {
    let result = py.allow_threads(|| crate::check_convergence(&x1, &x2, epsilon))?;

    Ok(result.into())
}

/// Out-degree of each vertex given the source ids of an edge list.
#[pyfunction]
fn out_degrees(num_nodes: usize, row: Vec<usize>) -> PyResult<Vec<usize>> {
    Ok(crate::out_degrees(num_nodes, &row)?)
}

/// Uniform starting rank vector over `n` vertices.
#[pyfunction]
fn uniform_rank(n: usize) -> Vec<f64> {
    crate::uniform_rank(n)
}

/// Python module definition.
#[pymodule]
fn _srw_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(rank_update, m)?)?;
    m.add_function(wrap_pyfunction!(check_convergence, m)?)?;
    m.add_function(wrap_pyfunction!(out_degrees, m)?)?;
    m.add_function(wrap_pyfunction!(uniform_rank, m)?)?;

    // Version info
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
