//! Camera session control: lifecycle state machine and the controller
//! that ties configuration, lifecycle and acquisition together.

mod controller;
mod lifecycle;

pub use controller::{create_camera, CameraController, CameraError, ControllerStats};
pub use lifecycle::CameraState;
