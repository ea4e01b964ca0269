//! utils — Python input-extraction helpers for the binding layer.
//!
//! Purpose
//! -------
//! Convert Python-side array-likes (numpy arrays, pandas objects, plain
//! sequences) into the contiguous `f64` containers the core routines
//! consume. All items are gated behind the `python-bindings` feature; the
//! pure-Rust surface never touches this module.
//!
//! Key behaviors
//! -------------
//! - Accept a `numpy.ndarray` directly when it is contiguous `float64`.
//! - Fall back to calling `to_numpy` for pandas Series/DataFrame inputs.
//! - Fall back to extracting plain Python sequences and copying them into
//!   a fresh numpy array.
//!
//! Conventions
//! -----------
//! - Extraction failures raise `TypeError` with a message naming the
//!   accepted input kinds; shape and value validation is left to the core
//!   routines, which raise `ValueError` through their error enums.

#[cfg(feature = "python-bindings")]
use ndarray::Array2;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1, PyReadonlyArray2,
};

/// Extract a 1-D contiguous `float64` array from a Python object.
///
/// Accepts a `numpy.ndarray`, anything exposing `to_numpy` (e.g. a pandas
/// `Series`), or a plain sequence of floats.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Extract a 2-D `float64` matrix from a Python object.
///
/// Accepts a `numpy.ndarray`, anything exposing `to_numpy` (e.g. a pandas
/// `DataFrame`), or a rectangular sequence of float sequences.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrix<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray2<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray2<f64>>() {
        return Ok(arr_ro);
    }

    if let Ok(obj) = raw_data.call_method0("to_numpy") {
        if let Ok(frame_ro) = obj.extract::<PyReadonlyArray2<f64>>() {
            return Ok(frame_ro);
        }
    }

    let rows: Vec<Vec<f64>> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 2-D numpy.ndarray, pandas.DataFrame, or sequence of float64 rows",
        )
    })?;
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|r| r.len() != ncols) {
        return Err(pyo3::exceptions::PyValueError::new_err(
            "matrix rows must all have the same length",
        ));
    }
    let mut flat = Vec::with_capacity(nrows * ncols);
    for row in &rows {
        flat.extend_from_slice(row);
    }
    let arr = Array2::from_shape_vec((nrows, ncols), flat)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
    Ok(arr.into_pyarray(py).readonly())
}

/// Copy an `ndarray` matrix into row-major nested vectors for Python.
#[cfg(feature = "python-bindings")]
pub fn matrix_to_rows(m: &Array2<f64>) -> Vec<Vec<f64>> {
    let (nrows, _ncols) = m.dim();
    let mut out = Vec::with_capacity(nrows);
    for i in 0..nrows {
        out.push(m.row(i).to_vec());
    }
    out
}
