//! Python bindings for spectrograms and plot payloads

use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::SpectrogramError;
use crate::spectrum::{Spectrogram, SpectrogramBuilder, SpectrogramConfig, WindowType};
use crate::visualization::{FrequencyScale, SignalPreview, SpectrogramView};

impl From<SpectrogramError> for PyErr {
    fn from(err: SpectrogramError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Window type enum exposed to Python
#[pyclass(name = "WindowType")]
#[derive(Clone)]
pub enum PyWindowType {
    Hann,
    Hamming,
    Blackman,
    Rectangular,
}

impl From<PyWindowType> for WindowType {
    fn from(py_win: PyWindowType) -> Self {
        match py_win {
            PyWindowType::Hann => WindowType::Hann,
            PyWindowType::Hamming => WindowType::Hamming,
            PyWindowType::Blackman => WindowType::Blackman,
            PyWindowType::Rectangular => WindowType::Rectangular,
        }
    }
}

type SpectrogramArrays<'py> = (&'py PyArray2<f64>, &'py PyArray1<f64>, &'py PyArray1<f64>);

fn to_arrays(py: Python<'_>, spectrogram: Spectrogram) -> SpectrogramArrays<'_> {
    let (matrix, times, frequencies) = spectrogram.into_parts();
    (
        matrix.into_pyarray(py),
        PyArray1::from_vec(py, times),
        PyArray1::from_vec(py, frequencies),
    )
}

fn parse_scale(scale: &str) -> PyResult<FrequencyScale> {
    match scale.to_ascii_lowercase().as_str() {
        "linear" => Ok(FrequencyScale::Linear),
        "audiogram" => Ok(FrequencyScale::Audiogram),
        other => Err(PyValueError::new_err(format!("Unknown frequency scale: {}", other))),
    }
}

/// Reusable spectrogram builder exposed to Python
#[pyclass(name = "SpectrogramBuilder")]
pub struct PySpectrogramBuilder {
    builder: SpectrogramBuilder,
}

#[pymethods]
impl PySpectrogramBuilder {
    /// Create a new builder
    ///
    /// Args:
    ///     window_size: Frame length in samples
    ///     hop_size: Frame advance in samples
    ///     sample_rate: Sample rate in Hz
    ///     window_type: Window applied to each frame
    #[new]
    #[pyo3(signature = (window_size=1024, hop_size=512, sample_rate=44100, window_type=PyWindowType::Hann))]
    fn new(
        window_size: usize,
        hop_size: usize,
        sample_rate: u32,
        window_type: PyWindowType,
    ) -> PyResult<Self> {
        let config = SpectrogramConfig::new(window_size, hop_size, sample_rate)
            .with_window_type(window_type.into());

        Ok(Self {
            builder: SpectrogramBuilder::new(config)?,
        })
    }

    /// Build a spectrogram
    ///
    /// Returns:
    ///     Tuple of (matrix[freq_bin, frame], time_axis, freq_axis)
    fn build<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<SpectrogramArrays<'py>> {
        let spectrogram = self.builder.build(signal.as_slice()?);
        Ok(to_arrays(py, spectrogram))
    }

    /// Number of frames produced for a signal of the given length
    fn frame_count(&self, signal_len: usize) -> usize {
        self.builder.config().frame_count(signal_len)
    }
}

/// Hann-windowed magnitude spectrogram
///
/// Returns:
///     Tuple of (matrix[freq_bin, frame], time_axis, freq_axis)
#[pyfunction]
#[pyo3(signature = (signal, window_size=1024, hop_size=512, sample_rate=44100))]
pub fn build_spectrogram<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<f64>,
    window_size: usize,
    hop_size: usize,
    sample_rate: u32,
) -> PyResult<SpectrogramArrays<'py>> {
    let spectrogram =
        crate::spectrum::build_spectrogram(signal.as_slice()?, window_size, hop_size, sample_rate)?;
    Ok(to_arrays(py, spectrogram))
}

/// Spectrogram serialized as {"frequencies": [...], "magnitudes": [[...]]}
#[pyfunction]
#[pyo3(signature = (signal, window_size=1024, hop_size=512, sample_rate=44100, scale="linear"))]
pub fn spectrogram_json(
    signal: PyReadonlyArray1<f64>,
    window_size: usize,
    hop_size: usize,
    sample_rate: u32,
    scale: &str,
) -> PyResult<String> {
    let scale = parse_scale(scale)?;
    let spectrogram =
        crate::spectrum::build_spectrogram(signal.as_slice()?, window_size, hop_size, sample_rate)?;
    let view = SpectrogramView::new(&spectrogram, scale);

    serde_json::to_string(&view).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Decimated waveform serialized as {"time": [...], "amplitude": [...]}
#[pyfunction]
pub fn signal_preview_json(signal: PyReadonlyArray1<f64>, sample_rate: u32) -> PyResult<String> {
    let preview = SignalPreview::new(signal.as_slice()?, sample_rate);
    serde_json::to_string(&preview).map_err(|e| PyValueError::new_err(e.to_string()))
}
