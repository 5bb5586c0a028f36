use bevy::prelude::*;
use std::collections::VecDeque;

use crate::errors::{FlightError, PeriodicTask};

/// Whether key input may steer the vehicle while in manual mode.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DroneControl {
    pub enabled: bool,
}

impl DroneControl {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

/// Halt flags for the periodic loops.
///
/// A loop that faults stays halted until its mode is entered again.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopHealth {
    pub autopilot_halted: bool,
    pub camera_drift_halted: bool,
}

impl LoopHealth {
    pub fn halt(&mut self, task: PeriodicTask) {
        match task {
            PeriodicTask::Autopilot => self.autopilot_halted = true,
            PeriodicTask::CameraDrift => self.camera_drift_halted = true,
        }
    }

    pub fn rearm(&mut self, task: PeriodicTask) {
        match task {
            PeriodicTask::Autopilot => self.autopilot_halted = false,
            PeriodicTask::CameraDrift => self.camera_drift_halted = false,
        }
    }

    pub fn is_running(&self, task: PeriodicTask) -> bool {
        match task {
            PeriodicTask::Autopilot => !self.autopilot_halted,
            PeriodicTask::CameraDrift => !self.camera_drift_halted,
        }
    }
}

/// Most recent errors surfaced by the simulation, oldest first.
#[derive(Resource, Debug, Clone)]
pub struct FaultLog {
    entries: VecDeque<FlightError>,
    capacity: usize,
}

impl Default for FaultLog {
    fn default() -> Self {
        Self::with_capacity(64)
    }
}

impl FaultLog {
    /// A log with capacity 0 keeps nothing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, error: FlightError) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(error);
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlightError> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

}
