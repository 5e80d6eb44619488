//! Numeric helpers shared by the transform, equalizer and spectrogram paths

/// Length a buffer of `len` samples occupies once transformed.
///
/// Lengths of 0 and 1 are left as they are; everything else is rounded up to
/// the next power of two.
pub fn transform_len(len: usize) -> usize {
    if len <= 1 {
        len
    } else {
        len.next_power_of_two()
    }
}

/// Copy `samples` into a buffer of `len` elements, zero-filling the tail.
///
/// Samples past `len` are dropped.
pub fn zero_pad<T: Copy + Default>(samples: &[T], len: usize) -> Vec<T> {
    let mut padded = vec![T::default(); len];
    let copy_len = samples.len().min(len);
    padded[..copy_len].copy_from_slice(&samples[..copy_len]);
    padded
}

/// Largest absolute sample value (0.0 for an empty buffer)
pub fn peak_amplitude(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0_f64, |peak, &s| peak.max(s.abs()))
}

/// Rescale `samples` in place so the peak absolute value is 1.0.
///
/// A silent buffer is left untouched. Returns the peak that was divided out.
pub fn normalize_peak(samples: &mut [f64]) -> f64 {
    let peak = peak_amplitude(samples);
    if peak > 0.0 {
        for s in samples.iter_mut() {
            *s /= peak;
        }
    }
    peak
}
