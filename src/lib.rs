pub mod components;
pub mod errors;
pub mod plugins;
pub mod resources;
pub mod systems;

pub use errors::{FlightError, PeriodicTask};
pub use plugins::FlightPlugin;
pub use resources::{Command, FlightInput, SimConfig};
