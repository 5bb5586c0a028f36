use bevy::prelude::*;
use dronecam::{
    components::{FlightMode, Pose},
    resources::{ConfigError, SimConfig},
};
use pretty_assertions::assert_eq;
use std::{fs, time::Duration};
use tempfile::tempdir;

use crate::common::TestAppBuilder;

#[test]
fn test_config_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let mut config = SimConfig {
        tick_hz: 60.0,
        initial_mode: FlightMode::Autopilot,
        seed_pose: Pose::new(2.35, 48.85, 35.0, 270.0, 0.0, 0.0),
        ..Default::default()
    };
    config.kinematics.speed = 0.0002;
    config.camera.heading_step = 1.0;

    config.save(&path).unwrap();
    let loaded = SimConfig::load(&path).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "initial_mode: autopilot\nkinematics:\n  speed: 0.001\n").unwrap();

    let loaded = SimConfig::load(&path).unwrap();

    assert_eq!(loaded.initial_mode, FlightMode::Autopilot);
    assert_eq!(loaded.kinematics.speed, 0.001);
    assert_eq!(loaded.kinematics.turn_gain, 1.0);
    assert_eq!(loaded.tick_hz, 30.0);
    assert_eq!(loaded.seed_pose, Pose::default());
}

#[test]
fn test_load_errors() {
    let dir = tempdir().unwrap();

    let missing = SimConfig::load(dir.path().join("missing.yaml"));
    assert!(matches!(missing, Err(ConfigError::FileError(_))));

    let broken = dir.path().join("broken.yaml");
    fs::write(&broken, "tick_hz: [").unwrap();
    assert!(matches!(
        SimConfig::load(&broken),
        Err(ConfigError::YamlError(_))
    ));

    let invalid = dir.path().join("invalid.yaml");
    fs::write(&invalid, "tick_hz: -1.0\n").unwrap();
    assert!(matches!(
        SimConfig::load(&invalid),
        Err(ConfigError::ValidationError(_))
    ));
}

#[test]
fn test_app_applies_config() {
    let seed = Pose::new(2.35, 48.85, 35.0, 270.0, 0.0, 0.0);
    let mut config = SimConfig {
        tick_hz: 60.0,
        seed_pose: seed,
        ..Default::default()
    };
    config.camera.orbit_distance = 750.0;

    let mut app = TestAppBuilder::new().with_config(config).build();

    assert_eq!(app.pose(), seed);
    assert_eq!(app.camera().vehicle, seed);
    assert_eq!(app.camera().offsets.distance, 750.0);
    assert_eq!(
        app.app.world().resource::<Time<Fixed>>().timestep(),
        Duration::from_secs_f64(1.0 / 60.0)
    );
}
