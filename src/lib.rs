//! hiervar — numerical kernels for hierarchical Bayesian variance models.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the core numerical routines to Python via the `_hiervar`
//! extension module. The crate implements the stateless primitive layer a
//! hierarchical variance sampler is built on: a truncated SVD wrapper, the
//! gamma-family special functions, cross-product sufficient statistics,
//! gamma/inverse-gamma log-densities and draws, HPD-style credible
//! intervals, and the variance-component matrix builders.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`linalg`, `special`, `density`,
//!   `intervals`, `variance`) as the public crate surface.
//! - Define `#[pyfunction]` wrappers and the `#[pymodule]` initializer for
//!   the `_hiervar` Python extension when the `python-bindings` feature is
//!   enabled.
//! - Create and register Python submodules (`special`, `variance`) under
//!   `hiervar` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work is implemented in the inner Rust modules;
//!   this file performs only FFI glue, input extraction, and error mapping.
//! - Every routine is pure aside from writing its returned containers (and
//!   advancing a caller-supplied RNG for the draw helpers); calls are safe
//!   to issue concurrently with distinct inputs.
//! - Errors from core Rust code are propagated as the per-subtree error
//!   enums internally and converted to `PyValueError` at the PyO3
//!   boundary.
//!
//! Conventions
//! -----------
//! - Results are returned as owned values (structs and arrays), never
//!   written through output parameters; the caller owns every container a
//!   call produces.
//! - Prior families are a closed enum in Rust; the Python surface accepts
//!   the configuration spellings and raises `ValueError` for anything
//!   else.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on the inner modules and can
//!   ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_hiervar` module defined here
//!   and wraps its functions in user-facing APIs.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by the cross-module pipeline test in
//!   `tests/integration_variance_pipeline.rs`.
//! - The PyO3 layer is thin extraction/dispatch glue and is expected to be
//!   exercised by Python-level smoke tests.

pub mod density;
pub mod intervals;
pub mod linalg;
pub mod special;
pub mod utils;
pub mod variance;

#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

#[cfg(feature = "python-bindings")]
use crate::{
    utils::{extract_f64_array, extract_f64_matrix, matrix_to_rows},
    variance::{VariancePrior, VarianceStructure},
};

// ---- special ---------------------------------------------------------------

/// Gamma function Γ(x), or ln Γ(x) when `log_scale` is true.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "gamma_func", signature = (x, log_scale = false))]
fn py_gamma_func(x: f64, log_scale: bool) -> PyResult<f64> {
    Ok(crate::special::gamma_func(x, log_scale)?)
}

/// Digamma function ψ(x).
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "digamma_func")]
fn py_digamma_func(x: f64) -> PyResult<f64> {
    Ok(crate::special::digamma_func(x)?)
}

/// Beta function B(a, b), or ln B(a, b) when `log_scale` is true.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "beta_func", signature = (a, b, log_scale = false))]
fn py_beta_func(a: f64, b: f64, log_scale: bool) -> PyResult<f64> {
    Ok(crate::special::beta_func(a, b, log_scale)?)
}

// ---- variance --------------------------------------------------------------

/// HPD interval matrix: row j is [mu[j] − qz·sigma[j], mu[j] + qz·sigma[j]].
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "hpd_intervals")]
fn py_hpd_intervals<'py>(
    py: Python<'py>, mu: &Bound<'py, PyAny>, sigma: &Bound<'py, PyAny>, qz: f64, j: usize,
) -> PyResult<Vec<Vec<f64>>> {
    let mu_ro = extract_f64_array(py, mu)?;
    let sigma_ro = extract_f64_array(py, sigma)?;
    let bounds = crate::intervals::hpd_intervals(mu_ro.as_array(), sigma_ro.as_array(), qz, j)?;
    Ok(matrix_to_rows(&bounds))
}

/// Conditional-rate (mixing weight) matrix for the variance update.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "mixing_weight_matrix")]
#[allow(clippy::too_many_arguments)]
fn py_mixing_weight_matrix<'py>(
    py: Python<'py>, globalvar: bool, priorvar: &str, w2: &Bound<'py, PyAny>,
    betatau: &Bound<'py, PyAny>, j: usize, d: usize, alphatau: &Bound<'py, PyAny>, jd: usize,
) -> PyResult<Vec<Vec<f64>>> {
    let prior: VariancePrior = priorvar.parse()?;
    let structure = VarianceStructure::new(globalvar, prior, j, d, jd)?;
    let w2_ro = extract_f64_matrix(py, w2)?;
    let betatau_ro = extract_f64_array(py, betatau)?;
    let alphatau_ro = extract_f64_array(py, alphatau)?;
    let f = structure.mixing_weights(
        w2_ro.as_array(),
        betatau_ro.as_array(),
        alphatau_ro.as_array(),
    )?;
    Ok(matrix_to_rows(&f))
}

/// Expected log-variance matrix derived from the mixing weights.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "log_variance_matrix")]
fn py_log_variance_matrix<'py>(
    py: Python<'py>, globalvar: bool, j: usize, d: usize, f: &Bound<'py, PyAny>, priorvar: &str,
    tau: &Bound<'py, PyAny>, alphatau: &Bound<'py, PyAny>,
) -> PyResult<Vec<Vec<f64>>> {
    let prior: VariancePrior = priorvar.parse()?;
    let structure = VarianceStructure::new(globalvar, prior, j, d, j * d)?;
    let f_ro = extract_f64_matrix(py, f)?;
    let tau_ro = extract_f64_matrix(py, tau)?;
    let alphatau_ro = extract_f64_array(py, alphatau)?;
    let logvar =
        structure.log_variances(f_ro.as_array(), tau_ro.as_array(), alphatau_ro.as_array())?;
    Ok(matrix_to_rows(&logvar))
}

// ---- module wiring ---------------------------------------------------------

/// _hiervar — PyO3 module initializer for the Python extension.
///
/// Creates the `special` and `variance` submodules, attaches them to the
/// parent `_hiervar` module, and registers them in `sys.modules` so they
/// are importable via dotted paths from Python.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _hiervar<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let special_mod = PyModule::new(_py, "special")?;
    let variance_mod = PyModule::new(_py, "variance")?;
    special(_py, m, &special_mod)?;
    variance(_py, m, &variance_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("hiervar.special", special_mod)?;

    _py.import("sys")?.getattr("modules")?.set_item("hiervar.variance", variance_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn special<'py>(
    _py: Python, hiervar: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_gamma_func, m)?)?;
    m.add_function(wrap_pyfunction!(py_digamma_func, m)?)?;
    m.add_function(wrap_pyfunction!(py_beta_func, m)?)?;
    hiervar.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn variance<'py>(
    _py: Python, hiervar: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_hpd_intervals, m)?)?;
    m.add_function(wrap_pyfunction!(py_mixing_weight_matrix, m)?)?;
    m.add_function(wrap_pyfunction!(py_log_variance_matrix, m)?)?;
    hiervar.add_submodule(m)?;
    Ok(())
}
