use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Who drives the vehicle pose.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightMode {
    /// Key input steers the vehicle and the camera can be dragged freely.
    #[default]
    Manual,
    /// The integrator flies the vehicle and the camera follows it.
    Autopilot,
}

impl FlightMode {
    pub fn toggled(self) -> Self {
        match self {
            FlightMode::Manual => FlightMode::Autopilot,
            FlightMode::Autopilot => FlightMode::Manual,
        }
    }

    /// Whether the camera is locked to the vehicle in this mode.
    pub fn is_hard_lock(self) -> bool {
        matches!(self, FlightMode::Autopilot)
    }
}
