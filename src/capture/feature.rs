//! Name-keyed access to camera parameters.

use super::config::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A configurable camera parameter, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Frames per second.
    Framerate,
    /// Exposure time in milliseconds.
    ExposureTime,
    /// Frame width in pixels.
    Width,
    /// Frame height in pixels.
    Height,
}

impl Feature {
    /// Every configurable feature.
    pub const ALL: [Feature; 4] = [
        Feature::Framerate,
        Feature::ExposureTime,
        Feature::Width,
        Feature::Height,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Feature::Framerate => "framerate",
            Feature::ExposureTime => "exposuretime",
            Feature::Width => "width",
            Feature::Height => "height",
        }
    }

    /// True for features stored as whole pixels.
    pub fn is_integral(&self) -> bool {
        matches!(self, Feature::Width | Feature::Height)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feature {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Feature::ALL
            .into_iter()
            .find(|feature| feature.name() == lowered)
            .ok_or_else(|| ConfigError::UnknownFeature(s.to_string()))
    }
}
