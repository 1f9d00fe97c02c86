// Logical button definitions
//
// The simulation never sees a keyboard. Whatever polls the real device maps
// physical keys onto this fixed set of logical buttons once per frame.

/// All logical buttons the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    // Directional pad
    Right,
    Left,
    Up,
    Down,

    // Face buttons; A is jump
    ButtonA,
    ButtonB,
    ButtonC,
}

impl Button {
    /// Every button, for iteration in device-mapping glue
    #[allow(dead_code)]
    pub const ALL: [Button; 7] = [
        Button::Right,
        Button::Left,
        Button::Up,
        Button::Down,
        Button::ButtonA,
        Button::ButtonB,
        Button::ButtonC,
    ];
}
