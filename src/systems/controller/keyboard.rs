use bevy::prelude::*;

use crate::resources::{Command, CommandSender, FlightInput};

const KEY_BINDINGS: [(KeyCode, FlightInput); 8] = [
    (KeyCode::KeyW, FlightInput::Forward),
    (KeyCode::ArrowUp, FlightInput::Forward),
    (KeyCode::KeyS, FlightInput::Backward),
    (KeyCode::ArrowDown, FlightInput::Backward),
    (KeyCode::KeyA, FlightInput::Left),
    (KeyCode::ArrowLeft, FlightInput::Left),
    (KeyCode::KeyD, FlightInput::Right),
    (KeyCode::ArrowRight, FlightInput::Right),
];

/// Maps key presses to steering commands and Space to a mode toggle.
///
/// Keys join the same command stream as every other producer, so they are gated in the
/// order pressed. Only the press edge counts, holding a key does not repeat.
pub fn keyboard_input_system(keyboard: Res<ButtonInput<KeyCode>>, sender: Res<CommandSender>) {
    let pressed = KEY_BINDINGS
        .into_iter()
        .filter(|(key, _)| keyboard.just_pressed(*key))
        .map(|(_, input)| Command::Input(input))
        .chain(keyboard.just_pressed(KeyCode::Space).then_some(Command::ToggleMode));

    for command in pressed {
        if let Err(e) = sender.send(command) {
            warn!("Dropping key command {:?}: channel closed", e.0);
        }
    }
}
