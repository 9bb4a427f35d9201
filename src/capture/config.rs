//! Camera configuration state and file loading.
//!
//! Each parameter is validated independently against its own range.
//! Rejected input resets that parameter to its default and leaves the
//! others untouched.

use super::validation::{ParamRange, Validated};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Accepted frame width in pixels.
pub const WIDTH: ParamRange<u32> = ParamRange::new("width", 100..=1000, 640);
/// Accepted frame height in pixels.
pub const HEIGHT: ParamRange<u32> = ParamRange::new("height", 100..=1000, 512);
/// Accepted framerate in frames per second.
pub const FRAMERATE: ParamRange<f64> = ParamRange::new("framerate", 1.0..=50.0, 10.0);
/// Accepted exposure time in milliseconds.
pub const EXPOSURE_TIME: ParamRange<f64> = ParamRange::new("exposuretime", 0.1..=30.0, 1.0);

/// Configuration owned by one camera controller.
///
/// Fields are private so that every write goes through validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    width: u32,
    height: u32,
    framerate: f64,
    exposure_time: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: WIDTH.default,
            height: HEIGHT.default,
            framerate: FRAMERATE.default,
            exposure_time: EXPOSURE_TIME.default,
        }
    }
}

impl CameraConfig {
    /// Frame width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Framerate in frames per second.
    #[inline]
    pub fn framerate(&self) -> f64 {
        self.framerate
    }

    /// Exposure time in milliseconds.
    #[inline]
    pub fn exposure_time(&self) -> f64 {
        self.exposure_time
    }

    /// Stores `width`, or the default if it is out of range.
    pub fn set_width(&mut self, width: u32) -> Validated<u32> {
        let result = WIDTH.validate(width);
        self.width = result.value();
        result
    }

    /// Stores `height`, or the default if it is out of range.
    pub fn set_height(&mut self, height: u32) -> Validated<u32> {
        let result = HEIGHT.validate(height);
        self.height = result.value();
        result
    }

    /// Stores `framerate` (Hz), or the default if it is out of range.
    pub fn set_framerate(&mut self, framerate: f64) -> Validated<f64> {
        let result = FRAMERATE.validate(framerate);
        self.framerate = result.value();
        result
    }

    /// Stores `exposure_time` (ms), or the default if it is out of range.
    pub fn set_exposure_time(&mut self, exposure_time: f64) -> Validated<f64> {
        let result = EXPOSURE_TIME.validate(exposure_time);
        self.exposure_time = result.value();
        result
    }

    /// Number of pixels in a frame at the current dimensions.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// Configuration file errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileRead(String),
    #[error("failed to parse config file: {0}")]
    Parse(String),
    #[error("unknown camera feature: {0}")]
    UnknownFeature(String),
}

/// Full configuration file format.
///
/// ```toml
/// [camera]
/// width = 800
/// height = 600
/// framerate = 25.0
/// exposure_time = 4.5
/// seed = 42
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub camera: CameraSection,
}

/// `[camera]` section. Absent keys keep their defaults.
///
/// Dimensions are read as plain numbers so that negative, oversized or
/// fractional values reach validation instead of failing the parse.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CameraSection {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub framerate: Option<f64>,
    pub exposure_time: Option<f64>,
    /// Seed for the simulated sensor. Unset means OS entropy.
    pub seed: Option<u64>,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileRead(e.to_string()))?;
        content.parse()
    }
}

impl FromStr for FileConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
