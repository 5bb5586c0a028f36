use bevy::prelude::*;
use crossbeam_channel::{Receiver, SendError, Sender};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::components::PoseField;

/// Discrete steering inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightInput {
    Forward,
    Backward,
    Left,
    Right,
}

/// Requests sent to the simulation from outside its schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    Input(FlightInput),
    ToggleMode,
    SetDroneControl(bool),
    /// Write raw text into one form field.
    SetField { field: PoseField, text: String },
    /// Read the form back into the pose.
    ApplyForm,
    /// Log the current pose, mode and camera offsets.
    Report,
    Shutdown,
}

#[derive(Error, Debug, PartialEq)]
pub enum CommandParseError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command: {0}")]
    Unknown(String),
    #[error("Missing argument for '{0}'")]
    MissingArgument(&'static str),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl FromStr for Command {
    type Err = CommandParseError;

    /// Parses one line of the text protocol, e.g. `forward`, `set heading 45`, `control off`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandParseError::Empty);
        };
        match head.to_ascii_lowercase().as_str() {
            "forward" | "w" => Ok(Command::Input(FlightInput::Forward)),
            "backward" | "s" => Ok(Command::Input(FlightInput::Backward)),
            "left" | "a" => Ok(Command::Input(FlightInput::Left)),
            "right" | "d" => Ok(Command::Input(FlightInput::Right)),
            "toggle" => Ok(Command::ToggleMode),
            "control" => match words.next() {
                Some("on") => Ok(Command::SetDroneControl(true)),
                Some("off") => Ok(Command::SetDroneControl(false)),
                Some(other) => Err(CommandParseError::InvalidArgument(other.to_string())),
                None => Err(CommandParseError::MissingArgument("control")),
            },
            "set" => {
                let field = words
                    .next()
                    .ok_or(CommandParseError::MissingArgument("set"))?
                    .parse::<PoseField>()
                    .map_err(CommandParseError::InvalidArgument)?;
                // The value is kept as raw text, the form decides whether it parses.
                let text = words.collect::<Vec<_>>().join(" ");
                Ok(Command::SetField { field, text })
            }
            "apply" => Ok(Command::ApplyForm),
            "pose" | "report" => Ok(Command::Report),
            "quit" | "exit" => Ok(Command::Shutdown),
            other => Err(CommandParseError::Unknown(other.to_string())),
        }
    }
}

/// Cloneable handle for producers living on other threads.
#[derive(Resource, Clone, Debug)]
pub struct CommandSender(Sender<Command>);

impl CommandSender {
    pub fn send(&self, command: Command) -> Result<(), SendError<Command>> {
        self.0.send(command)
    }
}

#[derive(Resource, Deref, Debug)]
pub struct CommandReceiver(Receiver<Command>);

pub fn command_channel() -> (CommandSender, CommandReceiver) {
    let (s, r) = crossbeam_channel::unbounded();
    (CommandSender(s), CommandReceiver(r))
}
