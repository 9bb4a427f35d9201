//! Camera parameters, frames and frame sources.
//!
//! This module owns everything below the lifecycle: validated
//! configuration, the captured frame type and the sensor seam that
//! produces frames.

mod config;
mod feature;
mod frame;
mod sensor;
pub mod validation;

pub use config::{
    CameraConfig, CameraSection, ConfigError, FileConfig, EXPOSURE_TIME, FRAMERATE, HEIGHT, WIDTH,
};
pub use feature::Feature;
pub use frame::Frame;
pub use sensor::{FrameSource, SimulatedSensor};
pub use validation::{validate, ParamRange, Validated};
