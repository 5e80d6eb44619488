//! Spectral analysis: FFT engine, windows and spectrograms

pub mod fft;
pub mod windowing;
pub mod spectrogram;

pub use fft::{forward, forward_complex, inverse, FftEngine};
pub use windowing::{apply_window, generate_window, WindowType};
pub use spectrogram::{build_spectrogram, Spectrogram, SpectrogramBuilder, SpectrogramConfig};
