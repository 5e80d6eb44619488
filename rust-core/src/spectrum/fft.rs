//! Radix-2 FFT engine
//!
//! Iterative in-place Cooley-Tukey (decimation in time). Inputs whose length
//! is not a power of two are zero-padded up to the next one, and the returned
//! spectrum has that padded length.

use num_complex::Complex64;
use std::f64::consts::PI;

use crate::utils::{transform_len, zero_pad};

/// Planned FFT for one transform size
///
/// Twiddle factors and the bit-reversal permutation are computed once, so an
/// engine can be reused across many frames of the same size.
#[derive(Debug, Clone)]
pub struct FftEngine {
    /// Padded transform size (power of two, or 0/1)
    fft_size: usize,

    /// exp(-2πik/N) for k = 0..N/2
    twiddles: Vec<Complex64>,

    /// Bit-reversed index of every position
    bit_reversed: Vec<usize>,
}

impl FftEngine {
    /// Plan a transform for inputs of `len` samples
    ///
    /// # Arguments
    /// * `len` - Input length; the engine size is `len` rounded up to a power of two
    pub fn new(len: usize) -> Self {
        let fft_size = transform_len(len);

        let twiddles = (0..fft_size / 2)
            .map(|k| Complex64::from_polar(1.0, -2.0 * PI * k as f64 / fft_size as f64))
            .collect();

        let bit_reversed = if fft_size > 1 {
            let bits = fft_size.trailing_zeros();
            (0..fft_size)
                .map(|i| i.reverse_bits() >> (usize::BITS - bits))
                .collect()
        } else {
            (0..fft_size).collect()
        };

        log::trace!("planned FFT: {} samples -> {} points", len, fft_size);

        Self {
            fft_size,
            twiddles,
            bit_reversed,
        }
    }

    /// Transform `buffer` in place
    ///
    /// # Panics
    /// If `buffer.len()` differs from [`FftEngine::fft_size`].
    pub fn process(&self, buffer: &mut [Complex64]) {
        assert_eq!(
            buffer.len(),
            self.fft_size,
            "buffer length does not match the planned FFT size"
        );

        let n = self.fft_size;
        if n <= 1 {
            return;
        }

        for (i, &j) in self.bit_reversed.iter().enumerate() {
            if i < j {
                buffer.swap(i, j);
            }
        }

        // Butterfly stages: sub-transforms of length 2, 4, ..., n
        let mut len = 2;
        while len <= n {
            let half = len / 2;
            let stride = n / len;

            for start in (0..n).step_by(len) {
                for k in 0..half {
                    let t = self.twiddles[k * stride] * buffer[start + k + half];
                    let u = buffer[start + k];
                    buffer[start + k] = u + t;
                    buffer[start + k + half] = u - t;
                }
            }

            len <<= 1;
        }
    }

    /// Forward transform of a real signal
    ///
    /// # Arguments
    /// * `signal` - Input signal (zero-padded if shorter than fft_size)
    ///
    /// # Returns
    /// Full complex spectrum X[k] for k = 0..fft_size
    pub fn transform(&self, signal: &[f64]) -> Vec<Complex64> {
        let mut buffer: Vec<Complex64> = zero_pad(signal, self.fft_size)
            .into_iter()
            .map(|s| Complex64::new(s, 0.0))
            .collect();

        self.process(&mut buffer);
        buffer
    }

    /// Forward transform of a complex sequence
    pub fn transform_complex(&self, values: &[Complex64]) -> Vec<Complex64> {
        let mut buffer = zero_pad(values, self.fft_size);
        self.process(&mut buffer);
        buffer
    }

    /// Inverse transform via conjugation: conj(FFT(conj(X))) / N
    ///
    /// The real part is the reconstructed signal; the imaginary residue is
    /// left in place for the caller to discard.
    pub fn inverse(&self, spectrum: &[Complex64]) -> Vec<Complex64> {
        let mut buffer: Vec<Complex64> = zero_pad(spectrum, self.fft_size)
            .into_iter()
            .map(|c| c.conj())
            .collect();

        self.process(&mut buffer);

        let scale = 1.0 / self.fft_size as f64;
        for c in buffer.iter_mut() {
            *c = c.conj() * scale;
        }

        buffer
    }

    /// Magnitude of the first fft_size/2 bins (positive frequencies, mirrored
    /// half discarded)
    pub fn compute_magnitude(&self, signal: &[f64]) -> Vec<f64> {
        let spectrum = self.transform(signal);
        spectrum[..self.num_bins()].iter().map(|c| c.norm()).collect()
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Number of positive-frequency bins kept by [`FftEngine::compute_magnitude`]
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2
    }

    /// Signed frequency of `bin` in Hz for this transform size
    pub fn bin_frequency(&self, bin: usize, sample_rate: f64) -> f64 {
        bin_frequency(bin, self.fft_size, sample_rate)
    }
}

/// Forward FFT of a real sequence
///
/// The input is zero-padded to the next power of two and the spectrum has
/// that padded length. Sequences of length 0 or 1 come back unchanged.
pub fn forward(samples: &[f64]) -> Vec<Complex64> {
    FftEngine::new(samples.len()).transform(samples)
}

/// Forward FFT of a complex sequence (same padding rules as [`forward`])
pub fn forward_complex(values: &[Complex64]) -> Vec<Complex64> {
    FftEngine::new(values.len()).transform_complex(values)
}

/// Inverse FFT
///
/// Conjugate, transform forward, conjugate again and divide by the (padded)
/// length. Take `.re` of each element for the time-domain signal.
pub fn inverse(spectrum: &[Complex64]) -> Vec<Complex64> {
    FftEngine::new(spectrum.len()).inverse(spectrum)
}

/// Signed frequency of `bin` for a transform of `len` points
///
/// Bins below len/2 map to k·sr/len; the rest wrap around to the negative
/// frequency (k − len)·sr/len.
pub fn bin_frequency(bin: usize, len: usize, sample_rate: f64) -> f64 {
    let len_f = len as f64;
    if 2 * bin < len {
        bin as f64 * sample_rate / len_f
    } else {
        (bin as f64 - len_f) * sample_rate / len_f
    }
}

/// Magnitude |X[k]| of every bin
pub fn magnitude(spectrum: &[Complex64]) -> Vec<f64> {
    spectrum.iter().map(|c| c.norm()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn naive_dft(signal: &[f64]) -> Vec<Complex64> {
        let n = signal.len();
        (0..n)
            .map(|k| {
                signal
                    .iter()
                    .enumerate()
                    .map(|(t, &x)| {
                        x * Complex64::from_polar(1.0, -2.0 * PI * (k * t) as f64 / n as f64)
                    })
                    .sum()
            })
            .collect()
    }

    fn assert_close(a: Complex64, b: Complex64, tol: f64) {
        let scale = 1.0_f64.max(b.norm());
        assert!(
            (a - b).norm() <= tol * scale,
            "{} vs {} (tolerance {})",
            a,
            b,
            tol
        );
    }

    #[test]
    fn test_fft_dc_signal() {
        let spectrum = forward(&vec![1.0; 128]);

        assert_eq!(spectrum.len(), 128);
        assert!((spectrum[0].re - 128.0).abs() < 1e-9);

        // All other bins cancel exactly
        for c in &spectrum[1..] {
            assert!(c.norm() < 1e-9);
        }
    }

    #[test]
    fn test_fft_sine_wave() {
        let sample_rate = 8000.0;
        let f0 = 1000.0;
        let n = 1024;
        let signal: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * f0 * i as f64 / sample_rate).sin())
            .collect();

        let mags = magnitude(&forward(&signal));
        let (peak_bin, &peak_mag) = mags[..n / 2]
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .unwrap();

        assert_eq!(peak_bin, 128);

        // Peak magnitude of a bin-centred sine is N/2
        assert!((peak_mag - 512.0).abs() < 1e-6);
    }

    #[test]
    fn test_tone_localization_off_bin() {
        let sample_rate = 44100.0;
        let f0 = 1234.0;
        let n = 4096;
        let signal: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * f0 * i as f64 / sample_rate).sin())
            .collect();

        let mags = magnitude(&forward(&signal));
        let (peak_bin, _) = mags[..n / 2]
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .unwrap();

        let expected = (f0 * n as f64 / sample_rate).round() as i64;
        assert!((peak_bin as i64 - expected).abs() <= 1);
    }

    #[test]
    fn test_trivial_lengths_pass_through() {
        assert!(forward(&[]).is_empty());
        assert!(inverse(&[]).is_empty());

        let single = forward(&[0.7]);
        assert_eq!(single, vec![Complex64::new(0.7, 0.0)]);

        let back = inverse(&[Complex64::new(0.25, -0.5)]);
        assert_eq!(back, vec![Complex64::new(0.25, -0.5)]);
    }

    #[test]
    fn test_non_power_of_two_is_padded() {
        let spectrum = forward(&vec![0.5; 1000]);
        assert_eq!(spectrum.len(), 1024);

        let spectrum = forward(&[1.0, 2.0, 3.0]);
        assert_eq!(spectrum.len(), 4);

        // Same as transforming the explicitly padded input
        let expected = naive_dft(&[1.0, 2.0, 3.0, 0.0]);
        for (a, b) in spectrum.iter().zip(expected.iter()) {
            assert_close(*a, *b, 1e-12);
        }
    }

    #[test]
    fn test_matches_naive_dft() {
        let mut rng = StdRng::seed_from_u64(11);
        for &n in &[2, 4, 8, 32, 256] {
            let signal: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
            let fast = forward(&signal);
            let slow = naive_dft(&signal);

            for (a, b) in fast.iter().zip(slow.iter()) {
                assert_close(*a, *b, 1e-9);
            }
        }
    }

    #[test]
    fn test_matches_rustfft() {
        let mut rng = StdRng::seed_from_u64(3);
        let n = 2048;
        let signal: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();

        let mut reference: Vec<rustfft::num_complex::Complex64> = signal
            .iter()
            .map(|&s| rustfft::num_complex::Complex64::new(s, 0.0))
            .collect();
        rustfft::FftPlanner::<f64>::new()
            .plan_fft_forward(n)
            .process(&mut reference);

        let ours = forward(&signal);
        for (a, b) in ours.iter().zip(reference.iter()) {
            assert_close(*a, Complex64::new(b.re, b.im), 1e-9);
        }
    }

    #[test]
    fn test_round_trip() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let len = rng.gen_range(1..3000);
            let signal: Vec<f64> = (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect();

            let restored = inverse(&forward(&signal));
            let expected = zero_pad(&signal, transform_len(len));

            assert_eq!(restored.len(), expected.len());
            for (r, &e) in restored.iter().zip(expected.iter()) {
                assert!((r.re - e).abs() <= 1e-9 * 1.0_f64.max(e.abs()));
                assert!(r.im.abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_inverse_divides_by_length() {
        // Unit impulse spectrum -> constant 1/N signal
        let mut spectrum = vec![Complex64::new(0.0, 0.0); 16];
        spectrum[0] = Complex64::new(1.0, 0.0);

        let signal = inverse(&spectrum);
        for c in &signal {
            assert!((c.re - 1.0 / 16.0).abs() < 1e-12);
            assert!(c.im.abs() < 1e-12);
        }
    }

    #[test]
    fn test_engine_reuse_matches_free_function() {
        let engine = FftEngine::new(300);
        assert_eq!(engine.fft_size(), 512);
        assert_eq!(engine.num_bins(), 256);

        let a: Vec<f64> = (0..300).map(|i| (i as f64 * 0.1).sin()).collect();
        let b: Vec<f64> = (0..300).map(|i| (i as f64 * 0.37).cos()).collect();

        assert_eq!(engine.transform(&a), forward(&a));
        assert_eq!(engine.transform(&b), forward(&b));

        let mags = engine.compute_magnitude(&a);
        assert_eq!(mags.len(), 256);
    }

    #[test]
    fn test_bin_frequency() {
        // 8 points at 800 Hz: 100 Hz spacing
        assert_eq!(bin_frequency(0, 8, 800.0), 0.0);
        assert_eq!(bin_frequency(1, 8, 800.0), 100.0);
        assert_eq!(bin_frequency(3, 8, 800.0), 300.0);
        assert_eq!(bin_frequency(4, 8, 800.0), -400.0);
        assert_eq!(bin_frequency(7, 8, 800.0), -100.0);

        // A single-point transform only has DC
        assert_eq!(bin_frequency(0, 1, 800.0), 0.0);

        let engine = FftEngine::new(8);
        assert_eq!(engine.bin_frequency(5, 800.0), -300.0);
    }
}
