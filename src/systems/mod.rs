mod camera;
mod command;
mod controller;
mod form;
mod kinematics;
mod mode;

pub use camera::{camera_drift_running, camera_drift_system, correct_axis};
pub use command::{drain_commands_system, record_faults_system, report_system, InputGate};
pub use controller::{
    apply_input, bank_turn, dispatch_input_system, drone_control_system, keyboard_input_system,
    TurnDelta,
};
pub use form::{form_edit_system, mirror_form_system, read_form};
pub use kinematics::{autopilot_running, autopilot_tick_system, integrate};
pub use mode::{apply_camera_sync_system, rearm_loop_system, toggle_mode_system};
