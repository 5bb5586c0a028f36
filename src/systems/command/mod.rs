use bevy::prelude::*;

use crate::{
    components::{FlightMode, Pose, Vehicle},
    plugins::{
        DroneControlEvent, FlightErrorEvent, FlightInputEvent, FormEditEvent, ReportEvent,
        ToggleModeEvent,
    },
    resources::{Command, CommandReceiver, DroneControl, FaultLog, SceneHost, SceneLink},
};

/// Mode and drone control as they stand at one point of the command stream.
///
/// A toggle only takes effect at the next state transition, so inputs queued behind it
/// in the same frame are judged against the mode it will switch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputGate {
    mode: FlightMode,
    pending: Option<FlightMode>,
    control: bool,
}

impl InputGate {
    pub fn new(mode: FlightMode, pending: Option<FlightMode>, control: bool) -> Self {
        Self {
            mode,
            pending,
            control,
        }
    }

    /// A toggle while another is pending is rejected later and changes nothing.
    pub fn toggle(&mut self) {
        if self.pending.is_none() {
            self.pending = Some(self.mode.toggled());
        }
    }

    pub fn set_control(&mut self, enabled: bool) {
        self.control = enabled;
    }

    pub fn accepts_input(&self) -> bool {
        self.control && self.pending.unwrap_or(self.mode) == FlightMode::Manual
    }
}

#[derive(bevy::ecs::system::SystemParam)]
pub struct CommandWriters<'w> {
    inputs: EventWriter<'w, FlightInputEvent>,
    toggles: EventWriter<'w, ToggleModeEvent>,
    control: EventWriter<'w, DroneControlEvent>,
    edits: EventWriter<'w, FormEditEvent>,
    reports: EventWriter<'w, ReportEvent>,
    exit: EventWriter<'w, AppExit>,
}

/// Moves every queued command into this frame's events.
///
/// Steering inputs are accepted or dropped here, in arrival order, against the mode and
/// drone control left by the commands before them.
pub fn drain_commands_system(
    receiver: Res<CommandReceiver>,
    mode: Res<State<FlightMode>>,
    next_mode: Res<NextState<FlightMode>>,
    control: Res<DroneControl>,
    mut writers: CommandWriters,
) {
    let pending = match *next_mode {
        NextState::Pending(pending) => Some(pending),
        NextState::Unchanged => None,
    };
    let mut gate = InputGate::new(*mode.get(), pending, control.enabled);

    for command in receiver.try_iter() {
        match command {
            Command::Input(input) => {
                if gate.accepts_input() {
                    writers.inputs.send(FlightInputEvent(input));
                } else {
                    debug!("Dropping {:?}: {:?}", input, gate);
                }
            }
            Command::ToggleMode => {
                gate.toggle();
                writers.toggles.send(ToggleModeEvent);
            }
            Command::SetDroneControl(enabled) => {
                gate.set_control(enabled);
                writers.control.send(DroneControlEvent { enabled });
            }
            Command::SetField { field, text } => {
                writers.edits.send(FormEditEvent::Set { field, text });
            }
            Command::ApplyForm => {
                writers.edits.send(FormEditEvent::Apply);
            }
            Command::Report => {
                writers.reports.send(ReportEvent);
            }
            Command::Shutdown => {
                info!("Shutdown requested");
                writers.exit.send(AppExit::Success);
            }
        }
    }
}

pub fn report_system(
    mut reports: EventReader<ReportEvent>,
    vehicle: Query<&Pose, With<Vehicle>>,
    mode: Res<State<FlightMode>>,
    scene: Res<SceneLink>,
) {
    for _ in reports.read() {
        if let Ok(pose) = vehicle.get_single() {
            info!(
                "{:?} | lon {:.6} lat {:.6} alt {:.2} | hdg {:.2} pitch {:.2} roll {:.2} | cam hdg {:.2} pitch {:.2}",
                mode.get(),
                pose.longitude,
                pose.latitude,
                pose.altitude,
                pose.heading,
                pose.pitch,
                pose.roll,
                scene.camera_heading_offset(),
                scene.camera_pitch_offset(),
            );
        }
    }
}

/// Logs every surfaced error and keeps it in the [`FaultLog`].
pub fn record_faults_system(mut errors: EventReader<FlightErrorEvent>, mut log: ResMut<FaultLog>) {
    for FlightErrorEvent(error) in errors.read() {
        warn!("{}", error);
        log.push(error.clone());
    }
}
