//! Frame type representing a captured image with metadata.

use chrono::{DateTime, Utc};

/// A single captured frame from the camera.
///
/// Callers treat it as an opaque payload; the accessors exist for
/// diagnostics and for frame-source implementations.
#[derive(Clone)]
pub struct Frame {
    /// Row-major pixel samples, `width * height` long.
    pixels: Vec<u16>,
    width: u32,
    height: u32,
    /// Exposure time (ms) the frame was acquired with.
    exposure_time: f64,
    /// Monotonic frame number. Gaps indicate dropped frames.
    frame_number: u64,
    timestamp: DateTime<Utc>,
}

impl Frame {
    /// Creates a new frame stamped with the current time.
    pub fn new(
        pixels: Vec<u16>,
        width: u32,
        height: u32,
        exposure_time: f64,
        frame_number: u64,
    ) -> Self {
        Self {
            pixels,
            width,
            height,
            exposure_time,
            frame_number,
            timestamp: Utc::now(),
        }
    }

    /// Replaces the capture timestamp, for sources with their own clock.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Returns a reference to the raw pixel data.
    #[inline]
    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn exposure_time(&self) -> f64 {
        self.exposure_time
    }

    #[inline]
    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// Returns the capture timestamp.
    #[inline]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the total number of pixels (width * height).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Validates that the pixel buffer size matches dimensions.
    pub fn is_valid(&self) -> bool {
        self.pixels.len() == self.pixel_count()
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("frame_number", &self.frame_number)
            .field("exposure_time", &self.exposure_time)
            .field("timestamp", &self.timestamp)
            .field("pixel_samples", &self.pixels.len())
            .finish()
    }
}
