//! Mono sample buffers tagged with their sample rate

use std::f64::consts::PI;

use crate::equalizer::{Equalizer, SliderSpec};
use crate::equalizer::processor::check_gain_count;
use crate::error::{EqualizerError, SignalError, SpectrogramError};
use crate::spectrum::{Spectrogram, SpectrogramBuilder, SpectrogramConfig};
use crate::utils::normalize_peak;
use crate::visualization::SignalPreview;

/// Mono signal (samples nominally in [-1, 1])
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    samples: Vec<f64>,
    sample_rate: u32,
}

impl Signal {
    pub fn new(samples: Vec<f64>, sample_rate: u32) -> Result<Self, SignalError> {
        if sample_rate == 0 {
            return Err(SignalError::InvalidSampleRate(sample_rate));
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Synthetic test signal
    ///
    /// Each frequency contributes its fundamental plus 2nd (0.3) and 3rd
    /// (0.1) harmonics; the sum is normalized to unit peak.
    pub fn test_tones(
        frequencies: &[f64],
        duration_secs: f64,
        sample_rate: u32,
    ) -> Result<Self, SignalError> {
        if sample_rate == 0 {
            return Err(SignalError::InvalidSampleRate(sample_rate));
        }

        let rate = sample_rate as f64;
        let len = (rate * duration_secs.max(0.0)).floor() as usize;

        let mut samples: Vec<f64> = (0..len)
            .map(|i| {
                let t = i as f64 / rate;
                frequencies
                    .iter()
                    .map(|&f| {
                        (2.0 * PI * f * t).sin()
                            + 0.3 * (2.0 * PI * 2.0 * f * t).sin()
                            + 0.1 * (2.0 * PI * 3.0 * f * t).sin()
                    })
                    .sum::<f64>()
            })
            .collect();
        normalize_peak(&mut samples);

        Self::new(samples, sample_rate)
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Equalize with the given sliders and gains
    ///
    /// Unlike [`crate::equalizer::apply_equalizer`], the result is truncated
    /// back to this signal's length.
    pub fn equalize(&self, sliders: &[SliderSpec], gains: &[f64]) -> Result<Signal, EqualizerError> {
        check_gain_count(sliders, gains)?;
        let equalizer = Equalizer::new(sliders.to_vec(), self.sample_rate)?;
        let mut samples = equalizer.apply(&self.samples, gains)?;
        samples.truncate(self.samples.len());

        Ok(Self {
            samples,
            sample_rate: self.sample_rate,
        })
    }

    /// Hann spectrogram at this signal's sample rate
    pub fn spectrogram(&self, window_size: usize, hop_size: usize) -> Result<Spectrogram, SpectrogramError> {
        self.spectrogram_with(SpectrogramConfig::new(window_size, hop_size, self.sample_rate))
    }

    /// Spectrogram with a custom configuration (sample rate taken from the signal)
    pub fn spectrogram_with(&self, config: SpectrogramConfig) -> Result<Spectrogram, SpectrogramError> {
        let builder = SpectrogramBuilder::new(config.with_sample_rate(self.sample_rate))?;
        Ok(builder.build(&self.samples))
    }

    /// Decimated waveform for plotting
    pub fn preview(&self) -> SignalPreview {
        SignalPreview::new(&self.samples, self.sample_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equalizer::Band;
    use crate::spectrum::WindowType;
    use crate::utils::peak_amplitude;

    #[test]
    fn test_rejects_zero_sample_rate() {
        assert_eq!(
            Signal::new(vec![0.0; 4], 0),
            Err(SignalError::InvalidSampleRate(0))
        );
        assert_eq!(
            Signal::test_tones(&[440.0], 1.0, 0),
            Err(SignalError::InvalidSampleRate(0))
        );
    }

    #[test]
    fn test_test_tones() {
        let signal = Signal::test_tones(&[100.0, 500.0, 1000.0], 0.5, 8000).unwrap();

        assert_eq!(signal.len(), 4000);
        assert!((signal.duration_secs() - 0.5).abs() < 1e-12);
        assert!((peak_amplitude(signal.samples()) - 1.0).abs() < 1e-12);
        assert_eq!(signal.samples()[0], 0.0);

        let silent = Signal::test_tones(&[], 0.1, 8000).unwrap();
        assert!(silent.samples().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_equalize_keeps_length() {
        let signal = Signal::test_tones(&[440.0], 0.25, 8000).unwrap();
        let sliders = vec![SliderSpec::new("Tone", [Band::new(400.0, 500.0).unwrap()])];

        let output = signal.equalize(&sliders, &[0.5]).unwrap();
        assert_eq!(output.len(), 2000);
        assert_eq!(output.sample_rate(), 8000);

        assert!(matches!(
            signal.equalize(&sliders, &[]),
            Err(EqualizerError::LengthMismatch { sliders: 1, gains: 0 })
        ));
    }

    #[test]
    fn test_spectrogram_uses_signal_rate() {
        let signal = Signal::test_tones(&[1000.0], 1.0, 16000).unwrap();

        let spectrogram = signal.spectrogram(512, 256).unwrap();
        assert_eq!(spectrogram.num_bins(), 256);
        assert!((spectrogram.frequencies()[1] - 16000.0 / 512.0).abs() < 1e-9);

        let config = SpectrogramConfig::default().with_window_type(WindowType::Blackman);
        let custom = signal.spectrogram_with(config).unwrap();
        assert_eq!(custom.num_frames(), (16000 - 1024) / 512 + 1);
        assert!((custom.times()[1] - 512.0 / 16000.0).abs() < 1e-12);
    }
}
