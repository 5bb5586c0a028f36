use bevy::prelude::*;

/// Ordering of the flight systems within a frame.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    /// Commands and key presses become events.
    Intake,
    /// Toggle requests become pending mode changes.
    Mode,
    /// Discrete inputs and form edits mutate the pose.
    Control,
    /// Collaborators are brought up to date with the pose.
    Mirror,
}

/// Startup ordering, the vehicle exists before anything is pushed to the scene.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupStage {
    SpawnVehicle,
    SyncScene,
}
