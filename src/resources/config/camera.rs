use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Tuning of the camera drift corrector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSyncSettings {
    pub heading_deadzone: f64,
    pub heading_step: f64,
    pub pitch_deadzone: f64,
    pub pitch_step: f64,
    /// Pitch offset that looks straight at the horizon [deg].
    pub pitch_baseline: f64,
    pub orbit_distance: f64,
}

impl Default for CameraSyncSettings {
    fn default() -> Self {
        Self {
            heading_deadzone: 5.0,
            heading_step: 0.4,
            pitch_deadzone: 5.0,
            pitch_step: 0.5,
            pitch_baseline: 90.0,
            orbit_distance: 500.0,
        }
    }
}

impl CameraSyncSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("heading_deadzone", self.heading_deadzone),
            ("heading_step", self.heading_step),
            ("pitch_deadzone", self.pitch_deadzone),
            ("pitch_step", self.pitch_step),
            ("orbit_distance", self.orbit_distance),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "camera.{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if !self.pitch_baseline.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "camera.pitch_baseline must be finite, got {}",
                self.pitch_baseline
            )));
        }
        Ok(())
    }
}
