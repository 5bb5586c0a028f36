mod events;
mod flight;
mod staging;

pub use events::{
    DroneControlEvent, FlightErrorEvent, FlightInputEvent, FormEditEvent, ReportEvent,
    ToggleModeEvent,
};
pub use flight::FlightPlugin;
pub use staging::{FlightSet, StartupStage};
