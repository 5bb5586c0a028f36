use std::fmt;
use thiserror::Error;

use crate::components::{FlightMode, PoseField};

/// The periodic loops driven by the fixed tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodicTask {
    Autopilot,
    CameraDrift,
}

impl fmt::Display for PeriodicTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodicTask::Autopilot => f.write_str("autopilot"),
            PeriodicTask::CameraDrift => f.write_str("camera drift"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlightError {
    #[error("Field {field} is not a number: '{text}'")]
    Parse { field: PoseField, text: String },
    #[error("Mode change to {pending:?} is still in flight, toggle rejected")]
    InvalidModeTransition { pending: FlightMode },
    #[error("{task} tick aborted: {reason}")]
    TickFault { task: PeriodicTask, reason: String },
}

pub type Result<T> = std::result::Result<T, FlightError>;
