//! Camera session lifecycle.
//!
//! ```text
//! Created --start--> Started --stop--> Stopped
//!                       ^                 |
//!                       +------start------+
//! ```
//!
//! Starting a started camera and stopping a camera that is not started are
//! no-ops rather than errors.

use std::fmt;

/// Lifecycle state of a camera session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CameraState {
    /// Constructed, never started.
    #[default]
    Created,
    /// Acquiring frames.
    Started,
    /// Acquisition stopped; configuration is still readable.
    Stopped,
}

impl CameraState {
    /// True only while frames can be acquired.
    #[inline]
    pub fn is_started(self) -> bool {
        self == CameraState::Started
    }

    /// Target state of a start request, or `None` if it is a no-op.
    pub fn on_start(self) -> Option<CameraState> {
        match self {
            CameraState::Created | CameraState::Stopped => Some(CameraState::Started),
            CameraState::Started => None,
        }
    }

    /// Target state of a stop request, or `None` if it is a no-op.
    pub fn on_stop(self) -> Option<CameraState> {
        match self {
            CameraState::Started => Some(CameraState::Stopped),
            CameraState::Created | CameraState::Stopped => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CameraState::Created => "created",
            CameraState::Started => "started",
            CameraState::Stopped => "stopped",
        }
    }
}

impl fmt::Display for CameraState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
