mod banked_turn;
mod input;
mod keyboard;

pub use banked_turn::{bank_turn, TurnDelta};
pub use input::{apply_input, dispatch_input_system, drone_control_system};
pub use keyboard::keyboard_input_system;
