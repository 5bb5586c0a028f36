use approx::assert_relative_eq;
use dronecam::{
    components::{CameraSyncConfig, FlightMode},
    Command, FlightError,
};
use pretty_assertions::assert_eq;

use crate::common::{autopilot_app, manual_app, TEST_SPEED};

#[test]
fn test_manual_start_leaves_camera_free() {
    let app = manual_app();

    assert_eq!(app.mode(), FlightMode::Manual);
    let flags = app.camera().flags();
    assert!(flags.offset_interactive);
    assert!(!flags.auto_heading && !flags.auto_pitch && !flags.auto_roll);
}

#[test]
fn test_autopilot_start_locks_camera() {
    let app = autopilot_app();

    assert_eq!(app.mode(), FlightMode::Autopilot);
    let flags = app.camera().flags();
    assert!(!flags.offset_interactive);
    assert!(flags.auto_heading && flags.auto_pitch && flags.auto_roll);
    assert_eq!(app.camera().offsets.pitch_offset, 90.0);
}

#[test]
fn test_toggle_pins_camera_pitch() {
    let mut app = manual_app();
    app.camera_mut().offsets.pitch_offset = 70.0;
    app.camera_mut().offsets.heading_offset = 12.0;

    app.command(Command::ToggleMode);

    assert_eq!(app.mode(), FlightMode::Autopilot);
    assert_eq!(app.camera().offsets.pitch_offset, 90.0);
    assert_eq!(app.camera().offsets.heading_offset, 12.0);
}

#[test]
fn test_double_toggle_restores_flags() {
    let mut app = manual_app();
    let before: CameraSyncConfig = app.camera().flags();

    app.command(Command::ToggleMode);
    assert_ne!(app.camera().flags(), before);
    app.command(Command::ToggleMode);

    assert_eq!(app.mode(), FlightMode::Manual);
    assert_eq!(app.camera().flags(), before);
}

#[test]
fn test_second_toggle_in_a_frame_is_rejected() {
    let mut app = manual_app();

    app.send(Command::ToggleMode);
    app.send(Command::ToggleMode);
    app.run_frame();

    assert_eq!(app.mode(), FlightMode::Autopilot);
    assert_eq!(
        app.faults(),
        vec![FlightError::InvalidModeTransition {
            pending: FlightMode::Autopilot
        }]
    );

    // The next frame accepts toggles again.
    app.command(Command::ToggleMode);
    assert_eq!(app.mode(), FlightMode::Manual);
    assert_eq!(app.faults().len(), 1);
}

#[test]
fn test_only_the_active_loop_ticks() {
    let mut app = manual_app();
    app.camera_mut().offsets.heading_offset = 20.0;

    app.command(Command::ToggleMode);
    app.tick();
    assert_eq!(app.camera().offsets.heading_offset, 20.0);
    assert_eq!(app.pose().latitude, TEST_SPEED);

    app.command(Command::ToggleMode);
    app.tick();
    assert_relative_eq!(app.camera().offsets.heading_offset, 19.6, epsilon = 1e-12);
    assert_eq!(app.pose().latitude, TEST_SPEED);
}
