mod controller;

pub use controller::{camera_drift_running, camera_drift_system, correct_axis};
