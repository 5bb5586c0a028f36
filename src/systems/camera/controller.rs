use bevy::prelude::*;

use crate::{
    components::{FlightMode, Pose, Vehicle},
    errors::{FlightError, PeriodicTask},
    plugins::FlightErrorEvent,
    resources::{LoopHealth, SceneHost, SceneLink, SimConfig},
};

/// One step of a dead-zone corrector.
///
/// Inside `target ± deadzone` the offset is left alone, outside it moves one `step`
/// toward the target.
pub fn correct_axis(current: f64, target: f64, deadzone: f64, step: f64) -> f64 {
    let error = current - target;
    if error > deadzone {
        current - step
    } else if error < -deadzone {
        current + step
    } else {
        current
    }
}

/// Run condition for [`camera_drift_system`]: the camera is free and the loop has not faulted.
pub fn camera_drift_running(mode: Res<State<FlightMode>>, health: Res<LoopHealth>) -> bool {
    !mode.get().is_hard_lock() && health.is_running(PeriodicTask::CameraDrift)
}

/// Nudges the free camera back toward the vehicle's heading and pitch.
///
/// Heading is compared against the vehicle heading, pitch against the horizon baseline
/// plus the vehicle pitch.
pub fn camera_drift_system(
    vehicle: Query<&Pose, With<Vehicle>>,
    config: Res<SimConfig>,
    mut health: ResMut<LoopHealth>,
    mut scene: ResMut<SceneLink>,
    mut faults: EventWriter<FlightErrorEvent>,
) {
    let Ok(pose) = vehicle.get_single() else {
        return;
    };
    let settings = &config.camera;

    let heading = correct_axis(
        scene.camera_heading_offset(),
        pose.heading,
        settings.heading_deadzone,
        settings.heading_step,
    );
    let pitch = correct_axis(
        scene.camera_pitch_offset(),
        settings.pitch_baseline + pose.pitch,
        settings.pitch_deadzone,
        settings.pitch_step,
    );

    if !(heading.is_finite() && pitch.is_finite()) {
        health.halt(PeriodicTask::CameraDrift);
        faults.send(FlightErrorEvent(FlightError::TickFault {
            task: PeriodicTask::CameraDrift,
            reason: format!("non-finite offsets ({}, {}) for pose {:?}", heading, pitch, pose),
        }));
        return;
    }

    if heading != scene.camera_heading_offset() {
        scene.set_camera_heading_offset(heading);
    }
    if pitch != scene.camera_pitch_offset() {
        scene.set_camera_pitch_offset(pitch);
    }
}
