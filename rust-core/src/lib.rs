//! Spectral Equalizer - Frequency-Domain DSP Core
//! 
//! Radix-2 FFT, multi-band equalizer and STFT spectrogram for whole-buffer
//! audio processing, with optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod error;
pub mod utils;
pub mod spectrum;
pub mod equalizer;
pub mod signal;
pub mod visualization;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{EqualizerError, SettingsError, SignalError, SpectrogramError};
pub use spectrum::{build_spectrogram, forward, inverse, FftEngine, Spectrogram, SpectrogramConfig, WindowType};
pub use equalizer::{apply_equalizer, Band, Equalizer, FrequencyMask, GainSet, Mode, ModeSettings, SliderSpec};
pub use signal::Signal;
