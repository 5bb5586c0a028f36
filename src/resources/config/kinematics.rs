use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Constants for the integrator and the banked-turn control law.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KinematicsConfig {
    /// Position delta per tick, in degrees of longitude/latitude.
    pub speed: f64,
    /// Scales the vertical rate against the horizontal one.
    pub vertical_gain: f64,
    /// Heading/pitch change per steering input [deg].
    pub turn_gain: f64,
    /// Roll change per left/right input [deg].
    pub roll_step: f64,
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self {
            speed: 0.00001,
            vertical_gain: 1.0,
            turn_gain: 1.0,
            roll_step: 4.0,
        }
    }
}

impl KinematicsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            ("speed", self.speed),
            ("vertical_gain", self.vertical_gain),
            ("turn_gain", self.turn_gain),
            ("roll_step", self.roll_step),
        ];
        for (name, value) in values {
            if !value.is_finite() {
                return Err(ConfigError::ValidationError(format!(
                    "kinematics.{} must be finite, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
