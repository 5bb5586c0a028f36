use approx::assert_relative_eq;
use bevy::prelude::*;
use dronecam::components::FlightMode;

use crate::common::{autopilot_app, manual_app};

#[test]
fn test_keys_steer_then_toggle() {
    let mut app = manual_app();

    app.press(KeyCode::KeyW);
    app.press(KeyCode::Space);
    app.run_frame();

    assert_relative_eq!(app.pose().pitch, -1.0, epsilon = 1e-12);
    assert_eq!(app.mode(), FlightMode::Autopilot);

    // Still held, but the press edge is gone.
    app.clear_key_edges();
    app.run_frame();

    assert_relative_eq!(app.pose().pitch, -1.0, epsilon = 1e-12);
    assert_eq!(app.mode(), FlightMode::Autopilot);
}

#[test]
fn test_arrow_keys_roll() {
    let mut app = manual_app();

    app.press(KeyCode::ArrowLeft);
    app.run_frame();
    app.clear_key_edges();
    app.press(KeyCode::KeyD);
    app.press(KeyCode::ArrowRight);
    app.run_frame();

    assert_relative_eq!(app.pose().roll, 4.0, epsilon = 1e-12);
}

#[test]
fn test_keys_are_ignored_in_autopilot() {
    let mut app = autopilot_app();
    let before = app.pose();

    app.press(KeyCode::KeyS);
    app.run_frame();

    assert_eq!(app.pose(), before);
}
