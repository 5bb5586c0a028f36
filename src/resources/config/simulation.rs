use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{CameraSyncSettings, ConfigError, KinematicsConfig};
use crate::components::{FlightMode, Pose};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Rate of the autopilot and camera drift loops [Hz].
    pub tick_hz: f64,
    pub initial_mode: FlightMode,
    /// Whether key input may steer the vehicle in manual mode.
    pub drone_control: bool,
    pub seed_pose: Pose,
    pub kinematics: KinematicsConfig,
    pub camera: CameraSyncSettings,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_hz: 30.0,
            initial_mode: FlightMode::Manual,
            drone_control: true,
            seed_pose: Pose::default(),
            kinematics: KinematicsConfig::default(),
            camera: CameraSyncSettings::default(),
        }
    }
}

impl SimConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config: SimConfig = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Writes the config as yaml, creating missing parent directories.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tick_hz.is_finite() && self.tick_hz > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "tick_hz must be positive, got {}",
                self.tick_hz
            )));
        }
        self.kinematics.validate()?;
        self.camera.validate()
    }

    /// Per-user config location, `<config dir>/dronecam/config.yaml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dronecam").join("config.yaml"))
    }
}
