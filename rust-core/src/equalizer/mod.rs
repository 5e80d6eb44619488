//! Multi-band frequency-domain equalizer

pub mod bands;
pub mod mask;
pub mod processor;
pub mod presets;

pub use bands::{Band, GainSet, SliderSpec};
pub use mask::FrequencyMask;
pub use processor::{apply_equalizer, apply_frequency_filter, Equalizer};
pub use presets::{GenericBand, Mode, ModeSettings};
