//! Python bindings for the FFT engine

use numpy::{Complex64, PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::spectrum::fft;

/// Forward FFT of a real signal
///
/// Args:
///     samples: Input signal as numpy array (zero-padded to a power of two)
///
/// Returns:
///     Complex spectrum with the padded length
#[pyfunction]
pub fn forward<'py>(
    py: Python<'py>,
    samples: PyReadonlyArray1<f64>,
) -> PyResult<&'py PyArray1<Complex64>> {
    let spectrum = fft::forward(samples.as_slice()?);
    Ok(PyArray1::from_vec(py, spectrum))
}

/// Inverse FFT
///
/// Args:
///     spectrum: Complex spectrum as numpy array
///
/// Returns:
///     Complex signal; take `.real` for the time-domain samples
#[pyfunction]
pub fn inverse<'py>(
    py: Python<'py>,
    spectrum: PyReadonlyArray1<Complex64>,
) -> PyResult<&'py PyArray1<Complex64>> {
    let signal = fft::inverse(spectrum.as_slice()?);
    Ok(PyArray1::from_vec(py, signal))
}
