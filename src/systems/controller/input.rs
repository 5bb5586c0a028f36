use bevy::prelude::*;

use super::bank_turn;
use crate::{
    components::{Pose, Vehicle},
    plugins::{DroneControlEvent, FlightInputEvent},
    resources::{DroneControl, FlightInput, KinematicsConfig, SceneHost, SceneLink, SimConfig},
};

/// Applies one steering input to `pose`.
pub fn apply_input(pose: &mut Pose, input: FlightInput, kinematics: &KinematicsConfig) {
    match input {
        FlightInput::Forward => {
            let turn = bank_turn(pose.roll, kinematics.turn_gain);
            pose.pitch -= turn.pitch;
            pose.heading -= turn.heading;
        }
        FlightInput::Backward => {
            let turn = bank_turn(pose.roll, kinematics.turn_gain);
            pose.pitch += turn.pitch;
            pose.heading += turn.heading;
        }
        FlightInput::Left => pose.roll -= kinematics.roll_step,
        FlightInput::Right => pose.roll += kinematics.roll_step,
    }
}

/// Steers the vehicle from accepted inputs and pushes each new orientation to the scene.
pub fn dispatch_input_system(
    mut inputs: EventReader<FlightInputEvent>,
    config: Res<SimConfig>,
    mut vehicle: Query<&mut Pose, With<Vehicle>>,
    mut scene: ResMut<SceneLink>,
) {
    if inputs.is_empty() {
        return;
    }
    let Ok(mut pose) = vehicle.get_single_mut() else {
        inputs.clear();
        return;
    };

    for FlightInputEvent(input) in inputs.read() {
        apply_input(&mut pose, *input, &config.kinematics);
        let (heading, pitch, roll) = pose.orientation();
        scene.set_vehicle_orientation_attributes(heading, pitch, roll);
    }
}

pub fn drone_control_system(
    mut requests: EventReader<DroneControlEvent>,
    mut control: ResMut<DroneControl>,
) {
    for request in requests.read() {
        if control.enabled != request.enabled {
            info!("Drone control {}", if request.enabled { "enabled" } else { "disabled" });
            control.enabled = request.enabled;
        }
    }
}
