use bevy::prelude::*;

use crate::{
    components::{CameraSyncConfig, FlightMode},
    errors::{FlightError, PeriodicTask},
    plugins::{FlightErrorEvent, ToggleModeEvent},
    resources::{LoopHealth, SceneLink, SimConfig},
};

/// Queues a mode change for every toggle request.
///
/// The change is applied by the state transition schedule, so a second toggle in the
/// same frame finds the first still pending and is rejected.
pub fn toggle_mode_system(
    mut toggles: EventReader<ToggleModeEvent>,
    mode: Res<State<FlightMode>>,
    mut next_mode: ResMut<NextState<FlightMode>>,
    mut faults: EventWriter<FlightErrorEvent>,
) {
    for _ in toggles.read() {
        if let NextState::Pending(pending) = *next_mode {
            faults.send(FlightErrorEvent(FlightError::InvalidModeTransition { pending }));
            continue;
        }
        let target = mode.get().toggled();
        info!("Switching flight mode {:?} -> {:?}", mode.get(), target);
        next_mode.set(target);
    }
}

/// Pushes the camera flags of the mode just entered.
pub fn apply_camera_sync_system(
    mode: Res<State<FlightMode>>,
    config: Res<SimConfig>,
    mut scene: ResMut<SceneLink>,
) {
    let sync = CameraSyncConfig::for_mode(*mode.get(), config.camera.pitch_baseline);
    debug!("Camera sync for {:?}: {:?}", mode.get(), sync);
    scene.apply_sync_config(&sync);
}

/// Clears a halt left over from the last time the loop of the entered mode ran.
pub fn rearm_loop_system(mode: Res<State<FlightMode>>, mut health: ResMut<LoopHealth>) {
    let task = match mode.get() {
        FlightMode::Autopilot => PeriodicTask::Autopilot,
        FlightMode::Manual => PeriodicTask::CameraDrift,
    };
    if !health.is_running(task) {
        info!("Restarting {} loop", task);
        health.rearm(task);
    }
}
