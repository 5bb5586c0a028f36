pub mod camera;
pub mod errors;
pub mod kinematics;
pub mod simulation;

pub use camera::CameraSyncSettings;
pub use errors::ConfigError;
pub use kinematics::KinematicsConfig;
pub use simulation::SimConfig;
