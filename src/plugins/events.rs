use bevy::prelude::*;

use crate::{components::PoseField, errors::FlightError, resources::FlightInput};

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightInputEvent(pub FlightInput);

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ToggleModeEvent;

#[derive(Event, Debug, Clone, Copy)]
pub struct DroneControlEvent {
    pub enabled: bool,
}

#[derive(Event, Debug, Clone, PartialEq)]
pub enum FormEditEvent {
    Set { field: PoseField, text: String },
    Apply,
}

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ReportEvent;

#[derive(Event, Debug, Clone, PartialEq)]
pub struct FlightErrorEvent(pub FlightError);
