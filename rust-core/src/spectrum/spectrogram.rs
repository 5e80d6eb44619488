//! Short-time Fourier transform magnitude spectrogram
//!
//! Frames the signal into overlapping windows, transforms every frame with a
//! single planned [`FftEngine`] and stacks the positive-frequency magnitudes
//! column by column.

use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use super::fft::FftEngine;
use super::windowing::{generate_window, multiply_window, WindowType};
use crate::error::SpectrogramError;
use crate::utils::zero_pad;

/// Spectrogram configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrogramConfig {
    /// Frame length in samples
    pub window_size: usize,

    /// Distance between consecutive frame starts in samples
    pub hop_size: usize,

    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Window applied to every frame
    pub window_type: WindowType,
}

impl Default for SpectrogramConfig {
    fn default() -> Self {
        Self {
            window_size: 1024,
            hop_size: 512,
            sample_rate: 44100,
            window_type: WindowType::Hann,
        }
    }
}

impl SpectrogramConfig {
    pub fn new(window_size: usize, hop_size: usize, sample_rate: u32) -> Self {
        Self {
            window_size,
            hop_size,
            sample_rate,
            ..Self::default()
        }
    }

    pub fn with_window_type(mut self, window_type: WindowType) -> Self {
        self.window_type = window_type;
        self
    }

    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn validate(&self) -> Result<(), SpectrogramError> {
        if self.window_size == 0 {
            return Err(SpectrogramError::InvalidWindowSize(self.window_size));
        }
        if self.hop_size == 0 {
            return Err(SpectrogramError::InvalidHopSize);
        }
        if self.sample_rate == 0 {
            return Err(SpectrogramError::InvalidSampleRate(self.sample_rate));
        }
        Ok(())
    }

    /// Number of frames produced for a signal of `signal_len` samples
    ///
    /// Signals shorter than one window count as exactly one window.
    pub fn frame_count(&self, signal_len: usize) -> usize {
        let len = signal_len.max(self.window_size);
        (len - self.window_size) / self.hop_size + 1
    }

    /// Number of frequency rows (window_size / 2)
    ///
    /// Frames are transformed at the padded length, but only the first
    /// window_size / 2 magnitudes are kept and row `j` is labeled `j·sr/W`.
    pub fn num_bins(&self) -> usize {
        self.window_size / 2
    }
}

/// Time-frequency magnitude matrix with its axes
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrogram {
    /// Magnitudes indexed `[frequency_bin, frame]`
    magnitudes: Array2<f64>,

    /// Start time of each frame in seconds
    times: Vec<f64>,

    /// Frequency of each row in Hz
    frequencies: Vec<f64>,
}

impl Spectrogram {
    pub fn magnitudes(&self) -> &Array2<f64> {
        &self.magnitudes
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn num_bins(&self) -> usize {
        self.magnitudes.nrows()
    }

    pub fn num_frames(&self) -> usize {
        self.magnitudes.ncols()
    }

    /// Magnitudes of a single frame (one column)
    pub fn frame(&self, index: usize) -> ArrayView1<'_, f64> {
        self.magnitudes.column(index)
    }

    /// Split into `(matrix, time_axis, freq_axis)`
    pub fn into_parts(self) -> (Array2<f64>, Vec<f64>, Vec<f64>) {
        (self.magnitudes, self.times, self.frequencies)
    }
}

/// Reusable spectrogram builder (planned FFT + cached window)
#[derive(Debug, Clone)]
pub struct SpectrogramBuilder {
    config: SpectrogramConfig,
    fft_engine: FftEngine,
    window: Vec<f64>,
}

impl SpectrogramBuilder {
    pub fn new(config: SpectrogramConfig) -> Result<Self, SpectrogramError> {
        config.validate()?;

        Ok(Self {
            config,
            fft_engine: FftEngine::new(config.window_size),
            window: generate_window(config.window_type, config.window_size),
        })
    }

    /// Build the spectrogram of `signal`
    pub fn build(&self, signal: &[f64]) -> Spectrogram {
        let SpectrogramConfig {
            window_size,
            hop_size,
            sample_rate,
            ..
        } = self.config;

        let padded;
        let signal = if signal.len() < window_size {
            padded = zero_pad(signal, window_size);
            &padded[..]
        } else {
            signal
        };

        let num_frames = self.config.frame_count(signal.len());
        let num_bins = self.config.num_bins();
        let mut magnitudes = Array2::zeros((num_bins, num_frames));

        for frame in 0..num_frames {
            let start = frame * hop_size;
            let windowed = multiply_window(&signal[start..start + window_size], &self.window);
            let spectrum = self.fft_engine.compute_magnitude(&windowed);

            for (cell, mag) in magnitudes.column_mut(frame).iter_mut().zip(spectrum) {
                *cell = mag;
            }
        }

        let rate = sample_rate as f64;
        let times = (0..num_frames)
            .map(|i| (i * hop_size) as f64 / rate)
            .collect();
        let frequencies = (0..num_bins)
            .map(|j| j as f64 * rate / window_size as f64)
            .collect();

        log::debug!(
            "spectrogram: {} samples -> {} bins x {} frames",
            signal.len(),
            num_bins,
            num_frames
        );

        Spectrogram {
            magnitudes,
            times,
            frequencies,
        }
    }

    pub fn config(&self) -> &SpectrogramConfig {
        &self.config
    }
}

/// Build a Hann-windowed magnitude spectrogram
///
/// # Arguments
/// * `signal` - Mono samples (zero-padded to one window if shorter)
/// * `window_size` - Frame length (default 1024, zero-padded to a power of two per frame)
/// * `hop_size` - Frame advance (default 512)
/// * `sample_rate` - Sample rate in Hz (default 44100)
pub fn build_spectrogram(
    signal: &[f64],
    window_size: usize,
    hop_size: usize,
    sample_rate: u32,
) -> Result<Spectrogram, SpectrogramError> {
    let config = SpectrogramConfig::new(window_size, hop_size, sample_rate);
    Ok(SpectrogramBuilder::new(config)?.build(signal))
}
