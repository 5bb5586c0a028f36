use bevy::{input::InputSystem, prelude::*, state::app::StatesPlugin};

use crate::{
    components::{FlightMode, Pose, Vehicle},
    plugins::{
        DroneControlEvent, FlightErrorEvent, FlightInputEvent, FlightSet, FormEditEvent,
        ReportEvent, StartupStage, ToggleModeEvent,
    },
    resources::{
        command_channel, DroneControl, FaultLog, FormLink, LoopHealth, OrbitCameraModel,
        SceneHost, SceneLink, SimConfig,
    },
    systems::{
        apply_camera_sync_system, autopilot_running, autopilot_tick_system, camera_drift_running,
        camera_drift_system, dispatch_input_system, drain_commands_system, drone_control_system,
        form_edit_system, keyboard_input_system, mirror_form_system, rearm_loop_system,
        record_faults_system, report_system, toggle_mode_system,
    },
};

/// Wires the vehicle, its two periodic loops and the input paths into an app.
///
/// A host that embeds a real engine inserts its own [`SceneLink`] and [`FormLink`] before
/// adding the plugin; otherwise in-memory collaborators are used.
pub struct FlightPlugin {
    config: SimConfig,
}

impl FlightPlugin {
    pub fn new(config: SimConfig) -> Self {
        FlightPlugin { config }
    }

    fn spawn_vehicle(mut commands: Commands, config: Res<SimConfig>) {
        info!("Spawning vehicle at {:?}", config.seed_pose);
        commands.spawn((config.seed_pose, Vehicle, Name::new("drone")));
    }

    fn sync_scene(vehicle: Query<&Pose, With<Vehicle>>, mut scene: ResMut<SceneLink>) {
        if let Ok(pose) = vehicle.get_single() {
            scene.set_vehicle_pose(pose);
        } else {
            warn!("No vehicle found when syncing the scene!");
        }
    }
}

impl Default for FlightPlugin {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();

        if !app.is_plugin_added::<StatesPlugin>() {
            app.add_plugins(StatesPlugin);
        }
        if !app.world().contains_resource::<SceneLink>() {
            app.insert_resource(SceneLink::new(OrbitCameraModel::new(
                config.camera.orbit_distance,
            )));
        }

        let (sender, receiver) = command_channel();
        app.init_resource::<FormLink>()
            .init_resource::<LoopHealth>()
            .init_resource::<FaultLog>()
            .insert_resource(DroneControl::new(config.drone_control))
            .insert_resource(sender)
            .insert_resource(receiver)
            .insert_resource(Time::<Fixed>::from_hz(config.tick_hz))
            .insert_state(config.initial_mode)
            .insert_resource(config);

        app.add_event::<FlightInputEvent>()
            .add_event::<ToggleModeEvent>()
            .add_event::<DroneControlEvent>()
            .add_event::<FormEditEvent>()
            .add_event::<ReportEvent>()
            .add_event::<FlightErrorEvent>();

        app.configure_sets(
            Startup,
            (StartupStage::SpawnVehicle, StartupStage::SyncScene).chain(),
        )
        .configure_sets(
            PreUpdate,
            (FlightSet::Intake, FlightSet::Mode)
                .chain()
                .after(InputSystem),
        )
        .configure_sets(Update, FlightSet::Control)
        .configure_sets(PostUpdate, FlightSet::Mirror);

        app.add_systems(
            Startup,
            (
                Self::spawn_vehicle.in_set(StartupStage::SpawnVehicle),
                Self::sync_scene.in_set(StartupStage::SyncScene),
            ),
        )
        .add_systems(
            PreUpdate,
            (
                (
                    keyboard_input_system.run_if(resource_exists::<ButtonInput<KeyCode>>),
                    drain_commands_system,
                )
                    .chain()
                    .in_set(FlightSet::Intake),
                toggle_mode_system.in_set(FlightSet::Mode),
            ),
        )
        .add_systems(
            OnEnter(FlightMode::Manual),
            (rearm_loop_system, apply_camera_sync_system),
        )
        .add_systems(
            OnEnter(FlightMode::Autopilot),
            (rearm_loop_system, apply_camera_sync_system),
        )
        .add_systems(
            FixedUpdate,
            (
                autopilot_tick_system
                    .run_if(in_state(FlightMode::Autopilot))
                    .run_if(autopilot_running),
                camera_drift_system.run_if(camera_drift_running),
            )
                .chain(),
        )
        .add_systems(
            Update,
            (
                drone_control_system,
                dispatch_input_system,
                form_edit_system,
                report_system,
            )
                .chain()
                .in_set(FlightSet::Control),
        )
        .add_systems(PostUpdate, mirror_form_system.in_set(FlightSet::Mirror))
        .add_systems(Last, record_faults_system);
    }
}
