//! Camera Control Library
//!
//! A camera device controller with bounded, validated configuration and a
//! start/stop/capture lifecycle.
//!
//! # Architecture
//!
//! ```text
//! setters → validation → CameraConfig ──┐
//!                                       ↓
//! start/stop → CameraState ──→ FrameSource → Frame
//!                    ↓
//!               metrics (stats snapshot)
//! ```
//!
//! # Design Principles
//!
//! - **Silent defaulting**: out-of-range parameters reset to a fixed default;
//!   setters never fail
//! - **Independent parameters**: rejecting one value never touches another
//! - **Caller-owned sessions**: no process-wide camera instance
//! - **Pluggable sensor**: hardware binds beneath the `FrameSource` trait
//!
//! # Example
//!
//! ```
//! use camera_control::create_camera;
//!
//! let mut camera = create_camera();
//! camera.set_framerate(1.0);
//! camera.set_exposure_time(30.0);
//! camera.set_width(600);
//! camera.set_height(111);
//!
//! camera.start();
//! assert!(camera.is_started());
//!
//! for _ in 0..5 {
//!     let frame = camera.get_frame().unwrap();
//!     assert!(frame.is_valid());
//! }
//! assert_eq!(camera.width(), 600);
//!
//! camera.stop();
//! assert!(!camera.is_started());
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod capture;
pub mod control;
pub mod metrics;

// Re-export commonly used types at crate root
pub use capture::{
    CameraConfig, ConfigError, Feature, FileConfig, Frame, FrameSource, SimulatedSensor,
    Validated,
};
pub use control::{create_camera, CameraController, CameraError, CameraState, ControllerStats};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
