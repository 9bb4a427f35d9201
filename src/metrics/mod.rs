//! Prometheus metrics for camera sessions.
//!
//! # Metrics Exposed
//!
//! - `camera_started` - Acquisition state (1=started, 0=not started)
//! - `camera_frames_acquired_total` - Frames returned by `get_frame`
//! - `camera_settings_accepted_total` - Parameter writes stored verbatim
//! - `camera_settings_defaulted_total` - Parameter writes reset to default
//! - `camera_last_frame_number` - Most recent frame number
//!
//! # Example
//!
//! ```
//! use camera_control::create_camera;
//! use camera_control::metrics::MetricsRegistry;
//!
//! let mut camera = create_camera();
//! camera.start();
//! camera.get_frame().unwrap();
//!
//! let registry = MetricsRegistry::new().expect("Failed to create registry");
//! registry.update(&camera.stats().into());
//! assert!(registry.encode().unwrap().contains("camera_frames_acquired_total 1"));
//! ```

mod collector;

pub use collector::{MetricsError, MetricsRegistry, MetricsSnapshot};
