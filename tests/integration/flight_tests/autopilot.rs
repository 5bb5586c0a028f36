use approx::assert_relative_eq;
use dronecam::{
    components::{FlightMode, Pose, PoseField},
    Command, FlightError, PeriodicTask,
};
use std::time::Duration;

use crate::common::{
    assert_finite_pose, assert_pose_eq, autopilot_app, create_test_config, TestAppBuilder,
    TEST_SPEED,
};

#[test]
fn test_single_tick_from_origin_moves_north() {
    let mut app = autopilot_app();

    app.tick();

    let pose = app.pose();
    assert_pose_eq(
        &pose,
        &Pose::new(0.0, TEST_SPEED, 0.0, 0.0, 0.0, 0.0),
        1e-15,
    );
    assert_eq!(app.camera().vehicle, pose);
}

#[test]
fn test_pitch_drives_altitude() {
    let mut climbing = TestAppBuilder::new()
        .with_config(create_test_config())
        .with_mode(FlightMode::Autopilot)
        .with_seed_pose(Pose::new(0.0, 0.0, 100.0, 90.0, 30.0, 0.0))
        .build();
    climbing.run_ticks(10);
    let pose = climbing.pose();
    assert_relative_eq!(pose.altitude, 100.0 + 10.0 * TEST_SPEED * 0.5, epsilon = 1e-12);
    assert!(pose.longitude > 0.0);
    assert_relative_eq!(pose.latitude, 0.0, epsilon = 1e-15);

    let mut diving = TestAppBuilder::new()
        .with_config(create_test_config())
        .with_mode(FlightMode::Autopilot)
        .with_seed_pose(Pose::new(0.0, 0.0, 100.0, 0.0, -30.0, 0.0))
        .build();
    diving.run_ticks(10);
    assert!(diving.pose().altitude < 100.0);
}

#[test]
fn test_zero_speed_holds_position() {
    let seed = Pose::new(-118.24368, 34.05293, 200.0, 45.0, 10.0, 5.0);
    let mut app = TestAppBuilder::new()
        .with_mode(FlightMode::Autopilot)
        .with_seed_pose(seed)
        .with_speed(0.0)
        .build();

    app.run_ticks(20);

    assert_eq!(app.pose(), seed);
}

#[test]
fn test_ticks_follow_the_clock() {
    let mut app = TestAppBuilder::new()
        .with_config(create_test_config())
        .with_mode(FlightMode::Autopilot)
        .with_frame_time(Duration::from_secs_f64(1.0 / 30.0))
        .build();

    app.run_frames(30);

    // One fixed tick per 1/30 s frame, give or take one for accumulator rounding.
    let ticks = app.pose().latitude / TEST_SPEED;
    assert!((29.0..=31.0).contains(&ticks.round()), "ran {} ticks", ticks);
    assert_finite_pose(&app.pose());
}

#[test]
fn test_non_finite_heading_halts_the_loop() {
    let mut app = autopilot_app();
    app.run_ticks(3);
    let before = app.pose();

    app.send(Command::SetField {
        field: PoseField::Heading,
        text: "NaN".to_string(),
    });
    app.command(Command::ApplyForm);
    assert!(app.pose().heading.is_nan());

    app.tick();
    app.run_frame();

    let after = app.pose();
    assert_eq!(after.longitude, before.longitude);
    assert_eq!(after.latitude, before.latitude);
    assert_eq!(after.altitude, before.altitude);
    assert!(matches!(
        app.faults().as_slice(),
        [FlightError::TickFault {
            task: PeriodicTask::Autopilot,
            ..
        }]
    ));

    // Fixing the pose alone does not restart the loop.
    app.set_pose(before);
    app.run_ticks(5);
    assert_eq!(app.pose(), before);

    // Re-entering autopilot does.
    app.command(Command::ToggleMode);
    app.command(Command::ToggleMode);
    assert_eq!(app.mode(), FlightMode::Autopilot);
    app.tick();
    assert_relative_eq!(
        app.pose().latitude,
        before.latitude + TEST_SPEED,
        epsilon = 1e-15
    );
}
