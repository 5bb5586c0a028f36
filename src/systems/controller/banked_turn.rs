/// Pitch and heading change produced by one steering input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnDelta {
    pub pitch: f64,
    pub heading: f64,
}

/// Coordinated-turn coupling of roll into pitch and heading.
///
/// Level wings (`roll = 0`) give a pure pitch change and a 90° bank gives a pure heading
/// change, both of magnitude `turn_gain`.
pub fn bank_turn(roll: f64, turn_gain: f64) -> TurnDelta {
    let roll = roll.to_radians();
    TurnDelta {
        pitch: turn_gain * roll.cos(),
        heading: turn_gain * roll.sin(),
    }
}
