use serde::{Deserialize, Serialize};

use crate::components::FlightMode;

/// Angular offsets of the orbit camera around the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraOffsets {
    /// Heading offset [deg]
    pub heading_offset: f64,
    /// Pitch offset [deg], 90 looks at the horizon
    pub pitch_offset: f64,
    /// Orbit radius
    pub distance: f64,
}

impl Default for CameraOffsets {
    fn default() -> Self {
        Self {
            heading_offset: 0.0,
            pitch_offset: 90.0,
            distance: 500.0,
        }
    }
}

impl CameraOffsets {
    pub fn at_distance(distance: f64) -> Self {
        Self {
            distance,
            ..Default::default()
        }
    }
}

/// Camera controller flags implied by a flight mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraSyncConfig {
    /// Whether the user may drag the camera offsets.
    pub offset_interactive: bool,
    pub auto_heading: bool,
    pub auto_pitch: bool,
    pub auto_roll: bool,
    /// Pitch offset pinned on entry to the mode, if any.
    pub pitch_lock: Option<f64>,
}

impl CameraSyncConfig {
    /// Flags for `mode`, pinning pitch to `pitch_baseline` when the mode locks the camera.
    pub fn for_mode(mode: FlightMode, pitch_baseline: f64) -> Self {
        match mode {
            FlightMode::Manual => Self {
                offset_interactive: true,
                auto_heading: false,
                auto_pitch: false,
                auto_roll: false,
                pitch_lock: None,
            },
            FlightMode::Autopilot => Self {
                offset_interactive: false,
                auto_heading: true,
                auto_pitch: true,
                auto_roll: true,
                pitch_lock: Some(pitch_baseline),
            },
        }
    }
}
