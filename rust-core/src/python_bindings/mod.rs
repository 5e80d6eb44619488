//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod transform_bindings;
mod equalizer_bindings;
mod spectrum_bindings;

/// Python module definition
#[pymodule]
fn spectral_equalizer(py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(transform_bindings::forward, m)?)?;
    m.add_function(wrap_pyfunction!(transform_bindings::inverse, m)?)?;

    m.add_class::<equalizer_bindings::PySliderSpec>()?;
    m.add_function(wrap_pyfunction!(equalizer_bindings::apply_equalizer, m)?)?;
    m.add_function(wrap_pyfunction!(equalizer_bindings::default_sliders, m)?)?;
    m.add(
        "LengthMismatchError",
        py.get_type::<equalizer_bindings::LengthMismatchError>(),
    )?;

    m.add_class::<spectrum_bindings::PyWindowType>()?;
    m.add_class::<spectrum_bindings::PySpectrogramBuilder>()?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::build_spectrogram, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::spectrogram_json, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::signal_preview_json, m)?)?;

    Ok(())
}
