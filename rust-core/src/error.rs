//! Error types for the signal, equalizer, spectrogram and settings layers

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    #[error("Sample rate must be positive (found: {0} Hz)")]
    InvalidSampleRate(u32),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EqualizerError {
    #[error("Got {gains} gains for {sliders} sliders")]
    LengthMismatch { sliders: usize, gains: usize },

    #[error("Gain #{index} must be finite and non-negative (found: {gain})")]
    InvalidGain { index: usize, gain: f64 },

    #[error("Invalid frequency band [{low}, {high}] Hz")]
    InvalidBand { low: f64, high: f64 },

    #[error("Mask has {mask} bins but the spectrum has {spectrum}")]
    MaskLengthMismatch { mask: usize, spectrum: usize },

    #[error("Sample rate must be positive (found: {0} Hz)")]
    InvalidSampleRate(u32),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpectrogramError {
    #[error("Window size must be at least one sample (found: {0})")]
    InvalidWindowSize(usize),

    #[error("Hop size must be positive")]
    InvalidHopSize,

    #[error("Sample rate must be positive (found: {0} Hz)")]
    InvalidSampleRate(u32),
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown equalizer mode: {0}")]
    UnknownMode(String),

    #[error(transparent)]
    Band(#[from] EqualizerError),
}
