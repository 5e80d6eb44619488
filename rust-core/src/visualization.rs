//! JSON-ready payloads for the plotting client

use serde::{Deserialize, Serialize};

use crate::spectrum::Spectrogram;

/// Every n-th sample is kept in waveform previews
pub const DEFAULT_PREVIEW_STRIDE: usize = 10;

/// Frequency axis scale for spectrogram views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyScale {
    #[default]
    Linear,

    /// Approximate hearing scale: 20 * 2^(f / 1200)
    Audiogram,
}

impl FrequencyScale {
    pub fn map(&self, frequency: f64) -> f64 {
        match self {
            FrequencyScale::Linear => frequency,
            FrequencyScale::Audiogram => 20.0 * 2.0_f64.powf(frequency / 1200.0),
        }
    }
}

/// Spectrogram as nested lists: one magnitude row per frequency
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpectrogramView {
    pub frequencies: Vec<f64>,
    pub magnitudes: Vec<Vec<f64>>,
}

impl SpectrogramView {
    pub fn new(spectrogram: &Spectrogram, scale: FrequencyScale) -> Self {
        let frequencies = spectrogram
            .frequencies()
            .iter()
            .map(|&f| scale.map(f))
            .collect();
        let magnitudes = spectrogram
            .magnitudes()
            .rows()
            .into_iter()
            .map(|row| row.to_vec())
            .collect();

        Self {
            frequencies,
            magnitudes,
        }
    }
}

/// Decimated waveform with its time axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalPreview {
    pub time: Vec<f64>,
    pub amplitude: Vec<f64>,
}

impl SignalPreview {
    pub fn new(samples: &[f64], sample_rate: u32) -> Self {
        Self::with_stride(samples, sample_rate, DEFAULT_PREVIEW_STRIDE)
    }

    /// Keep every `stride`-th point of the waveform
    ///
    /// The time axis runs from 0 to len/sample_rate inclusive, evenly spaced
    /// over the full signal before decimation.
    pub fn with_stride(samples: &[f64], sample_rate: u32, stride: usize) -> Self {
        let stride = stride.max(1);
        let len = samples.len();
        let end = len as f64 / sample_rate.max(1) as f64;
        let step = if len > 1 { end / (len - 1) as f64 } else { 0.0 };

        let time = (0..len).step_by(stride).map(|i| i as f64 * step).collect();
        let amplitude = samples.iter().step_by(stride).copied().collect();

        Self { time, amplitude }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::build_spectrogram;

    #[test]
    fn test_spectrogram_view_layout() {
        let signal: Vec<f64> = (0..2048).map(|i| (i as f64 * 0.2).sin()).collect();
        let spectrogram = build_spectrogram(&signal, 256, 128, 8000).unwrap();
        let view = SpectrogramView::new(&spectrogram, FrequencyScale::Linear);

        assert_eq!(view.frequencies.len(), 128);
        assert_eq!(view.magnitudes.len(), 128);
        assert_eq!(view.magnitudes[0].len(), spectrogram.num_frames());
        assert_eq!(view.magnitudes[5][3], spectrogram.magnitudes()[[5, 3]]);
        assert_eq!(view.frequencies[1], 8000.0 / 256.0);

        let json = serde_json::to_value(&view).unwrap();
        assert!(json["frequencies"].is_array());
        assert!(json["magnitudes"][0].is_array());
    }

    #[test]
    fn test_audiogram_scale() {
        assert_eq!(FrequencyScale::Audiogram.map(0.0), 20.0);
        assert!((FrequencyScale::Audiogram.map(1200.0) - 40.0).abs() < 1e-12);
        assert_eq!(FrequencyScale::Linear.map(440.0), 440.0);

        let scale: FrequencyScale = serde_json::from_str("\"audiogram\"").unwrap();
        assert_eq!(scale, FrequencyScale::Audiogram);
    }

    #[test]
    fn test_signal_preview() {
        let samples: Vec<f64> = (0..101).map(|i| i as f64).collect();
        let preview = SignalPreview::new(&samples, 100);

        assert_eq!(preview.amplitude.len(), 11);
        assert_eq!(preview.time.len(), 11);
        assert_eq!(preview.amplitude[1], 10.0);
        assert_eq!(preview.time[0], 0.0);

        // Last kept point is the final sample at t = len / sample_rate
        assert!((preview.time[10] - 1.01).abs() < 1e-12);
    }

    #[test]
    fn test_empty_inputs() {
        let preview = SignalPreview::new(&[], 44100);
        assert!(preview.time.is_empty());
        assert!(preview.amplitude.is_empty());

        let single = SignalPreview::with_stride(&[0.5], 44100, 0);
        assert_eq!(single.time, vec![0.0]);
        assert_eq!(single.amplitude, vec![0.5]);
    }
}
