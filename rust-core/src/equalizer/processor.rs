//! Frequency-domain equalizer
//!
//! Transforms the whole buffer, multiplies the spectrum by a slider mask,
//! transforms back and renormalizes to unit peak.

use super::bands::{GainSet, SliderSpec};
use super::mask::FrequencyMask;
use crate::error::EqualizerError;
use crate::spectrum::fft::FftEngine;
use crate::utils::{normalize_peak, transform_len};

/// Slider layout bound to a sample rate
#[derive(Debug, Clone, PartialEq)]
pub struct Equalizer {
    sliders: Vec<SliderSpec>,
    sample_rate: u32,
}

impl Equalizer {
    pub fn new(sliders: Vec<SliderSpec>, sample_rate: u32) -> Result<Self, EqualizerError> {
        if sample_rate == 0 {
            return Err(EqualizerError::InvalidSampleRate(sample_rate));
        }
        Ok(Self {
            sliders,
            sample_rate,
        })
    }

    /// Equalize and renormalize `signal`
    ///
    /// The output has the padded transform length; truncate to the input
    /// length if needed.
    pub fn apply(&self, signal: &[f64], gains: &[f64]) -> Result<Vec<f64>, EqualizerError> {
        let mut output = self.reconstruct(signal, gains)?;
        let peak = normalize_peak(&mut output);
        log::debug!("equalizer output normalized by peak {:.6}", peak);
        Ok(output)
    }

    /// Equalize without the final peak normalization
    pub fn reconstruct(&self, signal: &[f64], gains: &[f64]) -> Result<Vec<f64>, EqualizerError> {
        let mask = self.build_mask(transform_len(signal.len()), gains)?;
        apply_frequency_filter(signal, &mask)
    }

    /// Mask for a transform of `transform_len` points at the given gains
    pub fn build_mask(&self, transform_len: usize, gains: &[f64]) -> Result<FrequencyMask, EqualizerError> {
        check_gain_count(&self.sliders, gains)?;
        let gains = GainSet::new(gains.to_vec())?;

        Ok(FrequencyMask::build(
            transform_len,
            self.sample_rate,
            self.sliders
                .iter()
                .zip(gains.as_slice())
                .map(|(slider, &gain)| (slider.bands.as_slice(), gain)),
        ))
    }

    pub fn sliders(&self) -> &[SliderSpec] {
        &self.sliders
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

/// One gain per slider; checked before anything else is validated or computed
pub(crate) fn check_gain_count(sliders: &[SliderSpec], gains: &[f64]) -> Result<(), EqualizerError> {
    if gains.len() != sliders.len() {
        return Err(EqualizerError::LengthMismatch {
            sliders: sliders.len(),
            gains: gains.len(),
        });
    }
    Ok(())
}

/// Filter `signal` through `mask` and return the real part of the result
///
/// The mask must have the padded transform length of `signal`.
pub fn apply_frequency_filter(signal: &[f64], mask: &FrequencyMask) -> Result<Vec<f64>, EqualizerError> {
    let engine = FftEngine::new(signal.len());
    if mask.len() != engine.fft_size() {
        return Err(EqualizerError::MaskLengthMismatch {
            mask: mask.len(),
            spectrum: engine.fft_size(),
        });
    }

    let mut spectrum = engine.transform(signal);
    mask.apply(&mut spectrum)?;

    Ok(engine.inverse(&spectrum).into_iter().map(|c| c.re).collect())
}

/// Apply slider gains to `signal` and renormalize to unit peak
///
/// # Arguments
/// * `signal` - Mono samples
/// * `slider_specs` - Slider layout
/// * `gains` - One gain per slider (same length as `slider_specs`)
/// * `sample_rate` - Sample rate in Hz
///
/// # Returns
/// Processed signal with the padded transform length
pub fn apply_equalizer(
    signal: &[f64],
    slider_specs: &[SliderSpec],
    gains: &[f64],
    sample_rate: u32,
) -> Result<Vec<f64>, EqualizerError> {
    check_gain_count(slider_specs, gains)?;
    Equalizer::new(slider_specs.to_vec(), sample_rate)?.apply(signal, gains)
}
