//! Frame sources sitting beneath the controller.
//!
//! The controller only knows the [`FrameSource`] trait, so a hardware
//! binding can replace [`SimulatedSensor`] without touching lifecycle or
//! validation logic.

use super::{CameraConfig, Frame};
use crate::control::CameraError;
use chrono::{DateTime, Duration, Utc};
use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};

/// Roll threshold (out of 65535) below which a frame gap is simulated.
const DROP_THRESHOLD: u32 = 650;
/// Upper bound (exclusive) on extra frame numbers skipped per gap.
const MAX_EXTRA_SKIP: u32 = 5;
/// Signal level per millisecond of exposure.
const SIGNAL_PER_MS: f64 = 100.0;

/// Trait for frame source implementations.
pub trait FrameSource {
    /// Applies the controller's current configuration.
    fn configure(&mut self, config: &CameraConfig);

    /// Acquires a single frame with the last applied configuration.
    fn acquire(&mut self) -> Result<Frame, CameraError>;
}

/// Simulated sensor producing flat frames whose level tracks exposure.
///
/// Frame numbers advance by one per acquisition, with an occasional
/// random jump standing in for frames lost on the bus. Timestamps come
/// from a simulated clock that moves one frame period (`1 / framerate`)
/// per frame number, so spacing follows the framerate without blocking.
#[derive(Debug, Clone)]
pub struct SimulatedSensor {
    rng: ChaCha8Rng,
    config: CameraConfig,
    frame_number: u64,
    /// Wall-clock instant the simulated clock counts from.
    epoch: DateTime<Utc>,
    /// Simulated time elapsed since `epoch`.
    elapsed: Duration,
}

impl SimulatedSensor {
    /// Creates a sensor seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(ChaCha8Rng::from_entropy())
    }

    /// Creates a sensor with a fixed seed, for reproducible gap patterns.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(rng: ChaCha8Rng) -> Self {
        Self {
            rng,
            config: CameraConfig::default(),
            frame_number: 0,
            epoch: Utc::now(),
            elapsed: Duration::zero(),
        }
    }

    /// Last frame number handed out (0 before the first frame).
    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// Current reading of the simulated clock.
    pub fn clock(&self) -> DateTime<Utc> {
        self.epoch + self.elapsed
    }

    /// Advances the frame number and the clock by the same step.
    fn advance(&mut self) {
        let mut step = 1u64;
        if self.rng.next_u32() % 65535 < DROP_THRESHOLD {
            step += u64::from(self.rng.next_u32() % MAX_EXTRA_SKIP);
        }
        self.frame_number += step;
        self.elapsed = self.elapsed + frame_interval(step, self.config.framerate());
    }

    fn signal_level(&self) -> u16 {
        // Float-to-int `as` saturates at u16::MAX.
        (SIGNAL_PER_MS * self.config.exposure_time()) as u16
    }
}

/// Time covered by `frames` frame periods at `framerate` Hz.
fn frame_interval(frames: u64, framerate: f64) -> Duration {
    Duration::nanoseconds((frames as f64 * 1e9 / framerate).round() as i64)
}

impl Default for SimulatedSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSource for SimulatedSensor {
    fn configure(&mut self, config: &CameraConfig) {
        self.config = config.clone();
        tracing::debug!(?config, "SimulatedSensor configured");
    }

    fn acquire(&mut self) -> Result<Frame, CameraError> {
        let pixels = vec![self.signal_level(); self.config.pixel_count()];
        self.advance();

        let frame = Frame::new(
            pixels,
            self.config.width(),
            self.config.height(),
            self.config.exposure_time(),
            self.frame_number,
        );
        Ok(frame.with_timestamp(self.clock()))
    }
}
