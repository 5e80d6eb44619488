//! Per-bin complex gain masks for frequency-domain equalization

use num_complex::Complex64;

use super::bands::Band;
use crate::error::EqualizerError;
use crate::spectrum::fft::bin_frequency;

/// Complex multiplier for every bin of a transform
///
/// Bins are matched on |f(k)|, so a bin and its mirror (N - k) always receive
/// the same gain and the mask stays conjugate-symmetric.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyMask {
    bins: Vec<Complex64>,
}

impl FrequencyMask {
    /// Pass-through mask (every multiplier 1.0)
    pub fn unity(transform_len: usize) -> Self {
        Self {
            bins: vec![Complex64::new(1.0, 0.0); transform_len],
        }
    }

    /// Build a mask from (bands, gain) pairs
    ///
    /// Every bin whose |frequency| lies inside one of the bands is multiplied
    /// by that gain. Overlapping bands compound multiplicatively, in order.
    ///
    /// # Arguments
    /// * `transform_len` - Padded transform length N
    /// * `sample_rate` - Sample rate in Hz
    /// * `bands_with_gains` - Bands of one control paired with its gain
    pub fn build<'a, I>(transform_len: usize, sample_rate: u32, bands_with_gains: I) -> Self
    where
        I: IntoIterator<Item = (&'a [Band], f64)>,
    {
        let mut mask = Self::unity(transform_len);

        for (bands, gain) in bands_with_gains {
            for band in bands {
                let matched = mask.apply_gain(band, gain, sample_rate);
                if matched == 0 {
                    log::debug!(
                        "band [{}, {}] Hz matches no bin (N = {}, {} Hz)",
                        band.low(),
                        band.high(),
                        transform_len,
                        sample_rate
                    );
                }
            }
        }

        mask
    }

    /// Multiply every bin inside `band` by `gain`
    ///
    /// # Returns
    /// Number of bins affected
    pub fn apply_gain(&mut self, band: &Band, gain: f64, sample_rate: u32) -> usize {
        let n = self.bins.len();
        let rate = sample_rate as f64;
        let mut matched = 0;

        for (k, bin) in self.bins.iter_mut().enumerate() {
            if band.contains(bin_frequency(k, n, rate).abs()) {
                *bin *= gain;
                matched += 1;
            }
        }

        matched
    }

    /// Multiply `spectrum` by this mask elementwise
    pub fn apply(&self, spectrum: &mut [Complex64]) -> Result<(), EqualizerError> {
        if spectrum.len() != self.bins.len() {
            return Err(EqualizerError::MaskLengthMismatch {
                mask: self.bins.len(),
                spectrum: spectrum.len(),
            });
        }

        for (s, m) in spectrum.iter_mut().zip(self.bins.iter()) {
            *s *= *m;
        }

        Ok(())
    }

    /// Check mask[k] == conj(mask[N - k]) for every k in 1..N
    pub fn is_conjugate_symmetric(&self, tolerance: f64) -> bool {
        let n = self.bins.len();
        (1..n).all(|k| (self.bins[k] - self.bins[n - k].conj()).norm() <= tolerance)
    }

    /// Gain of `bin`, or `None` past the end of the mask
    pub fn gain(&self, bin: usize) -> Option<Complex64> {
        self.bins.get(bin).copied()
    }

    pub fn as_slice(&self) -> &[Complex64] {
        &self.bins
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}
