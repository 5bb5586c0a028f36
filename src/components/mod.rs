pub mod camera;
pub mod mode;
pub mod pose;

pub use camera::{CameraOffsets, CameraSyncConfig};
pub use mode::FlightMode;
pub use pose::{Pose, PoseField, Vehicle};
