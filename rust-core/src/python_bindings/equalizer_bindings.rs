//! Python bindings for the equalizer

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::create_exception;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::equalizer::{self, ModeSettings, SliderSpec};
use crate::error::{EqualizerError, SettingsError};

create_exception!(spectral_equalizer, LengthMismatchError, PyValueError);

impl From<EqualizerError> for PyErr {
    fn from(err: EqualizerError) -> Self {
        match err {
            EqualizerError::LengthMismatch { .. } => LengthMismatchError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

impl From<SettingsError> for PyErr {
    fn from(err: SettingsError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Equalizer slider exposed to Python
#[pyclass(name = "SliderSpec")]
#[derive(Clone)]
pub struct PySliderSpec {
    inner: SliderSpec,
}

#[pymethods]
impl PySliderSpec {
    /// Create a slider
    ///
    /// Args:
    ///     name: Display name
    ///     bands: List of (low_hz, high_hz) pairs
    #[new]
    fn new(name: String, bands: Vec<(f64, f64)>) -> PyResult<Self> {
        Ok(Self {
            inner: SliderSpec::from_ranges(name, &bands)?,
        })
    }

    #[getter]
    fn name(&self) -> String {
        self.inner.name.clone()
    }

    #[getter]
    fn bands(&self) -> Vec<(f64, f64)> {
        self.inner.bands.iter().map(|&band| band.into()).collect()
    }

    fn __repr__(&self) -> String {
        format!("SliderSpec(name={:?}, bands={:?})", self.inner.name, self.bands())
    }
}

/// Apply slider gains and renormalize to unit peak
///
/// Args:
///     signal: Mono samples as numpy array
///     slider_specs: List of SliderSpec
///     gains: One gain per slider
///     sample_rate: Sample rate in Hz
///
/// Returns:
///     Processed signal (padded to a power of two)
///
/// Raises:
///     LengthMismatchError: if len(slider_specs) != len(gains)
#[pyfunction]
pub fn apply_equalizer<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<f64>,
    slider_specs: Vec<PySliderSpec>,
    gains: Vec<f64>,
    sample_rate: u32,
) -> PyResult<&'py PyArray1<f64>> {
    let specs: Vec<SliderSpec> = slider_specs.into_iter().map(|s| s.inner).collect();
    let output = equalizer::apply_equalizer(signal.as_slice()?, &specs, &gains, sample_rate)?;
    Ok(PyArray1::from_vec(py, output))
}

/// Built-in sliders for "instruments", "animals" or "voices"
#[pyfunction]
pub fn default_sliders(mode: &str) -> PyResult<Vec<PySliderSpec>> {
    let settings = ModeSettings::for_mode(mode)?;
    Ok(settings
        .sliders
        .into_iter()
        .map(|inner| PySliderSpec { inner })
        .collect())
}
