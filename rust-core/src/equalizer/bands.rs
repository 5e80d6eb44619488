//! Frequency bands, sliders and gain sets

use serde::{Deserialize, Serialize};

use crate::error::EqualizerError;

/// Closed frequency interval [low, high] in Hz
///
/// Deserializes from a `[low, high]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct Band {
    low: f64,
    high: f64,
}

impl Band {
    /// Create a band
    ///
    /// Both edges must be finite and non-negative with `low <= high`. Edges
    /// above Nyquist are accepted; such a band simply matches no bin.
    pub fn new(low: f64, high: f64) -> Result<Self, EqualizerError> {
        let valid = low.is_finite() && high.is_finite() && low >= 0.0 && low <= high;
        if !valid {
            return Err(EqualizerError::InvalidBand { low, high });
        }
        Ok(Self { low, high })
    }

    /// Band covering 0 Hz up to Nyquist
    pub fn full(sample_rate: u32) -> Self {
        Self {
            low: 0.0,
            high: sample_rate as f64 / 2.0,
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Inclusive on both edges
    pub fn contains(&self, frequency: f64) -> bool {
        frequency >= self.low && frequency <= self.high
    }
}

impl TryFrom<(f64, f64)> for Band {
    type Error = EqualizerError;

    fn try_from((low, high): (f64, f64)) -> Result<Self, Self::Error> {
        Band::new(low, high)
    }
}

impl From<Band> for (f64, f64) {
    fn from(band: Band) -> Self {
        (band.low, band.high)
    }
}

/// A named equalizer control acting on one or more bands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    pub name: String,

    #[serde(rename = "frequency_bands", alias = "bands")]
    pub bands: Vec<Band>,
}

impl SliderSpec {
    pub fn new(name: impl Into<String>, bands: impl IntoIterator<Item = Band>) -> Self {
        Self {
            name: name.into(),
            bands: bands.into_iter().collect(),
        }
    }

    /// Build a slider from raw `(low, high)` pairs
    pub fn from_ranges(name: impl Into<String>, ranges: &[(f64, f64)]) -> Result<Self, EqualizerError> {
        let bands = ranges
            .iter()
            .map(|&(low, high)| Band::new(low, high))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(name, bands))
    }
}

/// One gain per slider; 1.0 leaves a slider's bands unchanged
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GainSet(Vec<f64>);

impl GainSet {
    /// Validate gains (finite, >= 0)
    pub fn new(gains: Vec<f64>) -> Result<Self, EqualizerError> {
        if let Some((index, &gain)) = gains
            .iter()
            .enumerate()
            .find(|(_, g)| !g.is_finite() || **g < 0.0)
        {
            return Err(EqualizerError::InvalidGain { index, gain });
        }
        Ok(Self(gains))
    }

    /// `count` gains of 1.0
    pub fn unity(count: usize) -> Self {
        Self(vec![1.0; count])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_validation() {
        assert!(Band::new(100.0, 200.0).is_ok());
        assert!(Band::new(150.0, 150.0).is_ok());
        assert!(Band::new(30_000.0, 40_000.0).is_ok());

        assert_eq!(
            Band::new(200.0, 100.0),
            Err(EqualizerError::InvalidBand { low: 200.0, high: 100.0 })
        );
        assert!(Band::new(-1.0, 100.0).is_err());
        assert!(Band::new(0.0, f64::INFINITY).is_err());
        assert!(Band::new(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn test_band_contains_is_inclusive() {
        let band = Band::new(900.0, 1100.0).unwrap();
        assert!(band.contains(900.0));
        assert!(band.contains(1000.0));
        assert!(band.contains(1100.0));
        assert!(!band.contains(899.99));
        assert!(!band.contains(1100.01));
    }

    #[test]
    fn test_full_band() {
        let band = Band::full(44100);
        assert_eq!(band.low(), 0.0);
        assert_eq!(band.high(), 22050.0);
    }

    #[test]
    fn test_slider_json() {
        let json = r#"{"name": "Guitar", "frequency_bands": [[80, 300], [1000, 2000]]}"#;
        let slider: SliderSpec = serde_json::from_str(json).unwrap();

        assert_eq!(slider.name, "Guitar");
        assert_eq!(slider.bands.len(), 2);
        assert_eq!(slider.bands[1], Band::new(1000.0, 2000.0).unwrap());

        let encoded = serde_json::to_value(&slider).unwrap();
        assert_eq!(encoded["frequency_bands"][0][1], 300.0);
    }

    #[test]
    fn test_slider_json_rejects_inverted_band() {
        let json = r#"{"name": "Bad", "bands": [[500, 100]]}"#;
        assert!(serde_json::from_str::<SliderSpec>(json).is_err());
    }

    #[test]
    fn test_from_ranges() {
        let slider = SliderSpec::from_ranges("Drums", &[(50.0, 150.0), (1000.0, 4000.0)]).unwrap();
        assert_eq!(slider.bands.len(), 2);

        assert!(SliderSpec::from_ranges("Bad", &[(10.0, 5.0)]).is_err());
    }

    #[test]
    fn test_gain_set() {
        assert!(GainSet::new(vec![0.0, 1.0, 2.5]).is_ok());
        assert_eq!(
            GainSet::new(vec![1.0, -0.5]),
            Err(EqualizerError::InvalidGain { index: 1, gain: -0.5 })
        );
        assert!(GainSet::new(vec![f64::NAN]).is_err());

        let unity = GainSet::unity(3);
        assert_eq!(unity.as_slice(), &[1.0, 1.0, 1.0]);
        assert_eq!(unity.len(), 3);
    }
}
