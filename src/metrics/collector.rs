//! Metrics collection and registry.

use crate::control::ControllerStats;
use prometheus::{Encoder, IntCounter, IntGauge, Registry, TextEncoder};
use thiserror::Error;

/// Errors that can occur during metrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
}

/// A snapshot of controller state for metrics update.
#[derive(Debug, Clone, Default)]
pub struct MetricsSnapshot {
    /// Whether the camera is currently acquiring.
    pub is_started: bool,
    /// Total frames acquired.
    pub frames_acquired: u64,
    /// Setter calls that stored the requested value.
    pub settings_accepted: u64,
    /// Setter calls that fell back to the default.
    pub settings_defaulted: u64,
    /// Frame number of the most recent frame.
    pub last_frame_number: Option<u64>,
}

impl From<ControllerStats> for MetricsSnapshot {
    fn from(stats: ControllerStats) -> Self {
        Self {
            is_started: stats.state.is_started(),
            frames_acquired: stats.frames_acquired,
            settings_accepted: stats.settings_accepted,
            settings_defaulted: stats.settings_defaulted,
            last_frame_number: stats.last_frame_number,
        }
    }
}

/// Prometheus metrics registry for one camera session.
pub struct MetricsRegistry {
    registry: Registry,

    camera_started: IntGauge,
    frames_acquired_total: IntCounter,
    settings_accepted_total: IntCounter,
    settings_defaulted_total: IntCounter,
    last_frame_number: IntGauge,
}

impl MetricsRegistry {
    /// Creates a new metrics registry with all camera metrics registered.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let camera_started = IntGauge::new(
            "camera_started",
            "Current acquisition state (1=started, 0=not started)",
        )?;
        let frames_acquired_total = IntCounter::new(
            "camera_frames_acquired_total",
            "Total number of frames acquired",
        )?;
        let settings_accepted_total = IntCounter::new(
            "camera_settings_accepted_total",
            "Parameter writes stored as requested",
        )?;
        let settings_defaulted_total = IntCounter::new(
            "camera_settings_defaulted_total",
            "Parameter writes rejected and reset to the default",
        )?;
        let last_frame_number = IntGauge::new(
            "camera_last_frame_number",
            "Frame number of the most recently acquired frame",
        )?;

        registry.register(Box::new(camera_started.clone()))?;
        registry.register(Box::new(frames_acquired_total.clone()))?;
        registry.register(Box::new(settings_accepted_total.clone()))?;
        registry.register(Box::new(settings_defaulted_total.clone()))?;
        registry.register(Box::new(last_frame_number.clone()))?;

        Ok(Self {
            registry,
            camera_started,
            frames_acquired_total,
            settings_accepted_total,
            settings_defaulted_total,
            last_frame_number,
        })
    }

    /// Updates all metrics from a snapshot.
    pub fn update(&self, snapshot: &MetricsSnapshot) {
        self.camera_started.set(i64::from(snapshot.is_started));

        // Counters only move forward by the difference
        advance(&self.frames_acquired_total, snapshot.frames_acquired);
        advance(&self.settings_accepted_total, snapshot.settings_accepted);
        advance(&self.settings_defaulted_total, snapshot.settings_defaulted);

        if let Some(number) = snapshot.last_frame_number {
            self.last_frame_number.set(i64::try_from(number).unwrap_or(i64::MAX));
        }
    }

    /// Returns the underlying Prometheus registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Encodes all metrics in Prometheus text format.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

fn advance(counter: &IntCounter, total: u64) {
    let current = counter.get();
    if total > current {
        counter.inc_by(total - current);
    }
}
