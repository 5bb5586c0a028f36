pub mod command;
pub mod config;
mod control;
pub mod form;
pub mod scene;

pub use command::{
    command_channel, Command, CommandParseError, CommandReceiver, CommandSender, FlightInput,
};
pub use config::{CameraSyncSettings, ConfigError, KinematicsConfig, SimConfig};
pub use control::{DroneControl, FaultLog, LoopHealth};
pub use form::{FormFields, FormLink, TextForm};
pub use scene::{OrbitCameraModel, SceneHost, SceneLink};
