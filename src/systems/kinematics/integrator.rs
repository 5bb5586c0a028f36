use bevy::prelude::*;
use nalgebra::Vector3;

use crate::{
    components::{Pose, Vehicle},
    errors::{FlightError, PeriodicTask},
    plugins::FlightErrorEvent,
    resources::{LoopHealth, SceneHost, SceneLink, SimConfig},
};

/// Per-tick position delta for a vehicle flying along `heading`/`pitch`.
///
/// Returns (longitude, latitude, altitude) deltas. Heading 0 points along +latitude and
/// heading 90 along +longitude. Degrees of longitude and latitude are treated as flat
/// distances, so this is not geodesically correct.
pub fn integrate(heading: f64, pitch: f64, speed: f64, vertical_gain: f64) -> Vector3<f64> {
    let heading = heading.to_radians();
    let pitch = pitch.to_radians();

    Vector3::new(
        speed * pitch.cos() * heading.sin(),
        speed * pitch.cos() * heading.cos(),
        vertical_gain * speed * pitch.sin(),
    )
}

/// Run condition for [`autopilot_tick_system`].
pub fn autopilot_running(health: Res<LoopHealth>) -> bool {
    health.is_running(PeriodicTask::Autopilot)
}

/// Advances the vehicle by one tick and pushes the new pose to the scene.
///
/// The delta is computed in full before anything is written. A non-finite delta leaves
/// the pose untouched and halts the loop.
pub fn autopilot_tick_system(
    mut vehicle: Query<&mut Pose, With<Vehicle>>,
    config: Res<SimConfig>,
    mut health: ResMut<LoopHealth>,
    mut scene: ResMut<SceneLink>,
    mut faults: EventWriter<FlightErrorEvent>,
) {
    let Ok(mut pose) = vehicle.get_single_mut() else {
        return;
    };

    let kinematics = &config.kinematics;
    let delta = integrate(
        pose.heading,
        pose.pitch,
        kinematics.speed,
        kinematics.vertical_gain,
    );

    if !delta.iter().all(|d| d.is_finite()) {
        health.halt(PeriodicTask::Autopilot);
        faults.send(FlightErrorEvent(FlightError::TickFault {
            task: PeriodicTask::Autopilot,
            reason: format!("non-finite delta {:?} from pose {:?}", delta, *pose),
        }));
        return;
    }

    pose.translate(&delta);
    scene.set_vehicle_pose(&pose);
}
