//! Camera controller: one camera session's configuration and lifecycle.
//!
//! The controller exclusively owns its configuration, lifecycle state and
//! frame source. All operations take `&self` or `&mut self`, so the borrow
//! checker gives callers the single-owner access the session requires;
//! sharing across threads means wrapping it in a `Mutex`.

use super::lifecycle::CameraState;
use crate::capture::{
    CameraConfig, ConfigError, Feature, FileConfig, Frame, FrameSource, ParamRange,
    SimulatedSensor, Validated, HEIGHT, WIDTH,
};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during camera operations.
#[derive(Debug, Error)]
pub enum CameraError {
    #[error("camera is not started (state: {state})")]
    NotStarted { state: CameraState },
    #[error("failed to acquire frame: {0}")]
    Acquisition(String),
}

/// Counters describing what a controller has done so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControllerStats {
    /// Current lifecycle state.
    pub state: CameraState,
    /// Frames successfully returned by `get_frame`.
    pub frames_acquired: u64,
    /// Setter calls that stored the given value.
    pub settings_accepted: u64,
    /// Setter calls that fell back to the default.
    pub settings_defaulted: u64,
    /// Frame number of the most recent frame.
    pub last_frame_number: Option<u64>,
}

/// Controller for a single camera session.
///
/// Configuration setters never fail: a value outside a parameter's
/// accepted range resets that parameter to its default. The returned
/// [`Validated`] tells the caller which happened.
///
/// # Example
///
/// ```
/// use camera_control::create_camera;
///
/// let mut camera = create_camera();
/// camera.set_width(600);
/// camera.set_height(1001); // out of range, height falls back to 512
///
/// camera.start();
/// let frame = camera.get_frame().unwrap();
/// assert_eq!(frame.width(), 600);
/// assert_eq!(camera.height(), 512);
/// camera.stop();
/// assert!(!camera.is_started());
/// ```
pub struct CameraController<S = SimulatedSensor> {
    config: CameraConfig,
    state: CameraState,
    source: S,
    stats: ControllerStats,
}

/// Creates a controller backed by the simulated sensor.
pub fn create_camera() -> CameraController {
    CameraController::new()
}

impl CameraController<SimulatedSensor> {
    /// Creates a controller with default configuration and an
    /// entropy-seeded simulated sensor.
    pub fn new() -> Self {
        Self::with_source(SimulatedSensor::new())
    }

    /// Creates a controller from a parsed configuration file.
    ///
    /// File values go through the regular setters, so out-of-range values
    /// are replaced by defaults exactly as a direct call would.
    pub fn from_file_config(file: &FileConfig) -> Self {
        let section = &file.camera;
        let sensor = match section.seed {
            Some(seed) => SimulatedSensor::with_seed(seed),
            None => SimulatedSensor::new(),
        };

        let mut controller = Self::with_source(sensor);
        if let Some(width) = section.width {
            controller.set_feature(Feature::Width, width);
        }
        if let Some(height) = section.height {
            controller.set_feature(Feature::Height, height);
        }
        if let Some(framerate) = section.framerate {
            controller.set_framerate(framerate);
        }
        if let Some(exposure_time) = section.exposure_time {
            controller.set_exposure_time(exposure_time);
        }

        tracing::info!(config = ?controller.config, "Camera configured from file");
        controller
    }

    /// Loads a TOML configuration file and creates a controller from it.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = FileConfig::from_file(path)?;
        Ok(Self::from_file_config(&file))
    }
}

impl Default for CameraController<SimulatedSensor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FrameSource> CameraController<S> {
    /// Creates a controller on top of an arbitrary frame source.
    pub fn with_source(source: S) -> Self {
        Self {
            config: CameraConfig::default(),
            state: CameraState::Created,
            source,
            stats: ControllerStats::default(),
        }
    }

    // -- Lifecycle --------------------------------------------------------

    /// Starts frame acquisition. Starting a started camera does nothing.
    pub fn start(&mut self) {
        match self.state.on_start() {
            Some(next) => {
                self.source.configure(&self.config);
                self.state = next;
                tracing::info!(config = ?self.config, "Camera started");
            }
            None => tracing::debug!(state = %self.state, "Camera already started"),
        }
    }

    /// Stops frame acquisition. Stopping a camera that is not started does
    /// nothing; configuration stays readable either way.
    pub fn stop(&mut self) {
        match self.state.on_stop() {
            Some(next) => {
                self.state = next;
                tracing::info!(
                    frames_acquired = self.stats.frames_acquired,
                    "Camera stopped"
                );
            }
            None => tracing::debug!(state = %self.state, "Camera not started, stop ignored"),
        }
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.state.is_started()
    }

    #[inline]
    pub fn state(&self) -> CameraState {
        self.state
    }

    // -- Acquisition ------------------------------------------------------

    /// Acquires the next frame.
    ///
    /// Fails with [`CameraError::NotStarted`] unless the camera is started.
    /// Never changes configuration or lifecycle state.
    pub fn get_frame(&mut self) -> Result<Frame, CameraError> {
        if !self.state.is_started() {
            return Err(CameraError::NotStarted { state: self.state });
        }

        let frame = self.source.acquire()?;
        self.stats.frames_acquired += 1;
        self.stats.last_frame_number = Some(frame.frame_number());

        tracing::trace!(
            frame_number = frame.frame_number(),
            width = frame.width(),
            height = frame.height(),
            "Frame acquired"
        );
        Ok(frame)
    }

    // -- Configuration ----------------------------------------------------

    pub fn set_width(&mut self, width: u32) -> Validated<u32> {
        let result = self.config.set_width(width);
        self.record(WIDTH.name, width, result)
    }

    pub fn set_height(&mut self, height: u32) -> Validated<u32> {
        let result = self.config.set_height(height);
        self.record(HEIGHT.name, height, result)
    }

    pub fn set_framerate(&mut self, framerate: f64) -> Validated<f64> {
        let result = self.config.set_framerate(framerate);
        self.record(Feature::Framerate.name(), framerate, result)
    }

    pub fn set_exposure_time(&mut self, exposure_time: f64) -> Validated<f64> {
        let result = self.config.set_exposure_time(exposure_time);
        self.record(Feature::ExposureTime.name(), exposure_time, result)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.config.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.config.height()
    }

    #[inline]
    pub fn framerate(&self) -> f64 {
        self.config.framerate()
    }

    #[inline]
    pub fn exposure_time(&self) -> f64 {
        self.config.exposure_time()
    }

    /// Sets a feature by name-level identifier.
    ///
    /// Pixel features are range-checked as given and truncated toward zero
    /// only once accepted, so `1000.5` is rejected while `100.7` stores 100.
    pub fn set_feature(&mut self, feature: Feature, value: f64) -> Validated<f64> {
        match feature {
            Feature::Framerate => self.set_framerate(value),
            Feature::ExposureTime => self.set_exposure_time(value),
            Feature::Width => self
                .set_pixels(&WIDTH, CameraConfig::set_width, value)
                .map(f64::from),
            Feature::Height => self
                .set_pixels(&HEIGHT, CameraConfig::set_height, value)
                .map(f64::from),
        }
    }

    /// Reads any feature as a floating-point value.
    pub fn feature(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Framerate => self.framerate(),
            Feature::ExposureTime => self.exposure_time(),
            Feature::Width => f64::from(self.width()),
            Feature::Height => f64::from(self.height()),
        }
    }

    /// Lists the configurable features.
    pub fn features(&self) -> &'static [Feature] {
        &Feature::ALL
    }

    /// Current configuration.
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn stats(&self) -> ControllerStats {
        ControllerStats {
            state: self.state,
            ..self.stats
        }
    }

    /// Returns the frame source.
    pub fn source(&self) -> &S {
        &self.source
    }

    fn set_pixels(
        &mut self,
        range: &ParamRange<u32>,
        setter: fn(&mut CameraConfig, u32) -> Validated<u32>,
        value: f64,
    ) -> Validated<u32> {
        let bounds = f64::from(*range.accepted.start())..=f64::from(*range.accepted.end());
        let result = if bounds.contains(&value) {
            setter(&mut self.config, value as u32)
        } else {
            setter(&mut self.config, range.default);
            Validated::Defaulted(range.default)
        };
        self.record(range.name, value, result)
    }

    fn record<T, I>(
        &mut self,
        parameter: &'static str,
        input: I,
        result: Validated<T>,
    ) -> Validated<T>
    where
        T: Copy + fmt::Debug,
        I: fmt::Debug,
    {
        match result {
            Validated::Accepted(value) => {
                self.stats.settings_accepted += 1;
                tracing::debug!(parameter, value = ?value, "Camera parameter set");
            }
            Validated::Defaulted(fallback) => {
                self.stats.settings_defaulted += 1;
                tracing::warn!(
                    parameter,
                    rejected = ?input,
                    fallback = ?fallback,
                    "Camera parameter out of range, using default"
                );
            }
        }

        // A running source picks up changes on the next frame.
        if self.state.is_started() {
            self.source.configure(&self.config);
        }
        result
    }
}

impl<S> fmt::Debug for CameraController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CameraController")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("frames_acquired", &self.stats.frames_acquired)
            .finish()
    }
}
