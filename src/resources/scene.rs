use bevy::prelude::*;
use std::any::Any;
use std::ops::{Deref, DerefMut};

use crate::components::{CameraOffsets, CameraSyncConfig, Pose};

/// The rendering engine as seen by the flight core.
///
/// The core pushes vehicle state into the scene and reads back the raw camera offsets,
/// which the user may have dragged. Implementations normalize angles on their side if
/// the engine needs it.
pub trait SceneHost: Send + Sync + 'static {
    fn set_vehicle_pose(&mut self, pose: &Pose);
    fn set_vehicle_orientation_attributes(&mut self, heading: f64, pitch: f64, roll: f64);

    fn camera_heading_offset(&self) -> f64;
    fn set_camera_heading_offset(&mut self, offset: f64);
    fn camera_pitch_offset(&self) -> f64;
    fn set_camera_pitch_offset(&mut self, offset: f64);

    fn set_camera_offset_interactive(&mut self, interactive: bool);
    fn set_auto_heading_enabled(&mut self, enabled: bool);
    fn set_auto_pitch_enabled(&mut self, enabled: bool);
    fn set_auto_roll_enabled(&mut self, enabled: bool);

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// In-memory orbit camera, used when no engine is attached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrbitCameraModel {
    pub vehicle: Pose,
    pub offsets: CameraOffsets,
    pub offset_interactive: bool,
    pub auto_heading: bool,
    pub auto_pitch: bool,
    pub auto_roll: bool,
}

impl OrbitCameraModel {
    pub fn new(distance: f64) -> Self {
        Self {
            offsets: CameraOffsets::at_distance(distance),
            offset_interactive: true,
            ..Default::default()
        }
    }

    /// Current controller flags, without the pitch lock which is not a flag.
    pub fn flags(&self) -> CameraSyncConfig {
        CameraSyncConfig {
            offset_interactive: self.offset_interactive,
            auto_heading: self.auto_heading,
            auto_pitch: self.auto_pitch,
            auto_roll: self.auto_roll,
            pitch_lock: None,
        }
    }
}

impl SceneHost for OrbitCameraModel {
    fn set_vehicle_pose(&mut self, pose: &Pose) {
        self.vehicle = *pose;
    }

    fn set_vehicle_orientation_attributes(&mut self, heading: f64, pitch: f64, roll: f64) {
        self.vehicle.heading = heading;
        self.vehicle.pitch = pitch;
        self.vehicle.roll = roll;
    }

    fn camera_heading_offset(&self) -> f64 {
        self.offsets.heading_offset
    }

    fn set_camera_heading_offset(&mut self, offset: f64) {
        self.offsets.heading_offset = offset;
    }

    fn camera_pitch_offset(&self) -> f64 {
        self.offsets.pitch_offset
    }

    fn set_camera_pitch_offset(&mut self, offset: f64) {
        self.offsets.pitch_offset = offset;
    }

    fn set_camera_offset_interactive(&mut self, interactive: bool) {
        self.offset_interactive = interactive;
    }

    fn set_auto_heading_enabled(&mut self, enabled: bool) {
        self.auto_heading = enabled;
    }

    fn set_auto_pitch_enabled(&mut self, enabled: bool) {
        self.auto_pitch = enabled;
    }

    fn set_auto_roll_enabled(&mut self, enabled: bool) {
        self.auto_roll = enabled;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Resource holding the attached scene.
#[derive(Resource)]
pub struct SceneLink {
    host: Box<dyn SceneHost>,
}

impl SceneLink {
    pub fn new<H: SceneHost>(host: H) -> Self {
        Self {
            host: Box::new(host),
        }
    }

    /// Pushes every flag of `config` and applies its pitch lock.
    pub fn apply_sync_config(&mut self, config: &CameraSyncConfig) {
        self.host.set_camera_offset_interactive(config.offset_interactive);
        self.host.set_auto_heading_enabled(config.auto_heading);
        self.host.set_auto_pitch_enabled(config.auto_pitch);
        self.host.set_auto_roll_enabled(config.auto_roll);
        if let Some(pitch) = config.pitch_lock {
            self.host.set_camera_pitch_offset(pitch);
        }
    }

    pub fn downcast_ref<H: SceneHost>(&self) -> Option<&H> {
        self.host.as_any().downcast_ref::<H>()
    }

    pub fn downcast_mut<H: SceneHost>(&mut self) -> Option<&mut H> {
        self.host.as_any_mut().downcast_mut::<H>()
    }
}

impl Default for SceneLink {
    fn default() -> Self {
        Self::new(OrbitCameraModel::new(CameraOffsets::default().distance))
    }
}

impl Deref for SceneLink {
    type Target = dyn SceneHost;

    fn deref(&self) -> &Self::Target {
        self.host.as_ref()
    }
}

impl DerefMut for SceneLink {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.host.as_mut()
    }
}
