//! Built-in slider layouts for each equalizer mode
//!
//! Also parses settings documents of the form
//! `{"sliders": [{"name": "...", "frequency_bands": [[low, high], ...]}]}`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::bands::{Band, SliderSpec};
use crate::error::SettingsError;

/// Equalizer modes with a fixed slider layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Instruments,
    Animals,
    Voices,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Instruments, Mode::Animals, Mode::Voices];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Instruments => "instruments",
            Mode::Animals => "animals",
            Mode::Voices => "voices",
        }
    }

    /// Default sliders for this mode
    pub fn default_sliders(&self) -> Vec<SliderSpec> {
        match self {
            Mode::Instruments => vec![
                preset("Guitar", &[(80.0, 300.0), (1000.0, 2000.0), (4000.0, 6000.0)]),
                preset("Piano", &[(27.0, 4200.0)]),
                preset("Drums", &[(50.0, 150.0), (1000.0, 4000.0)]),
                preset("Violin", &[(200.0, 400.0), (800.0, 3500.0)]),
            ],
            Mode::Animals => vec![
                preset("Birds", &[(2000.0, 8000.0)]),
                preset("Dogs", &[(500.0, 1000.0)]),
                preset("Cats", &[(750.0, 1500.0)]),
                preset("Dolphins", &[(8000.0, 16000.0)]),
            ],
            Mode::Voices => vec![
                preset("Male Voice", &[(85.0, 180.0)]),
                preset("Female Voice", &[(165.0, 255.0)]),
                preset("Child Voice", &[(250.0, 400.0)]),
                preset("Elderly Voice", &[(100.0, 200.0)]),
            ],
        }
    }
}

// Table entries are ordered, non-negative ranges, so none are dropped
fn preset(name: &str, ranges: &[(f64, f64)]) -> SliderSpec {
    let bands = ranges.iter().filter_map(|&(low, high)| Band::new(low, high).ok());
    SliderSpec::new(name, bands)
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SettingsError::UnknownMode(s.to_string()))
    }
}

/// Slider layout of one mode
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModeSettings {
    #[serde(default)]
    pub sliders: Vec<SliderSpec>,
}

impl ModeSettings {
    /// Parse a settings document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Built-in settings for a mode name
    pub fn for_mode(name: &str) -> Result<Self, SettingsError> {
        let mode: Mode = name.parse()?;
        Ok(Self {
            sliders: mode.default_sliders(),
        })
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Generic-mode band: a gain around a center frequency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenericBand {
    pub center_freq: f64,
    pub bandwidth: f64,
    pub gain: f64,
}

impl GenericBand {
    /// One-band slider spanning center ± bandwidth/2 (clamped at 0 Hz)
    pub fn to_slider(&self, name: impl Into<String>) -> Result<SliderSpec, SettingsError> {
        let half = self.bandwidth / 2.0;
        let band = Band::new((self.center_freq - half).max(0.0), self.center_freq + half)?;
        Ok(SliderSpec::new(name, [band]))
    }

    /// Split generic bands into sliders and their gains
    pub fn split(bands: &[GenericBand]) -> Result<(Vec<SliderSpec>, Vec<f64>), SettingsError> {
        let sliders = bands
            .iter()
            .map(|band| band.to_slider(format!("{} Hz", band.center_freq)))
            .collect::<Result<Vec<_>, _>>()?;
        let gains = bands.iter().map(|band| band.gain).collect();

        Ok((sliders, gains))
    }
}
