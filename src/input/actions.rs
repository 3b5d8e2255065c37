//! Game action definitions
//!
//! Four things the player can ask for. Keyboard and gamepad bindings both
//! resolve to these.

use macroquad::prelude::KeyCode;
use super::gamepad::button;

/// All possible game actions that can be triggered by input
///
/// Button mappings (Xbox/PlayStation):
/// - D-pad Left or X/Square = Chop left
/// - D-pad Right or B/Circle = Chop right
/// - Start = Start / restart
/// - Select = Quit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    Start,
    ChopLeft,
    ChopRight,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::Quit,
        Action::Start,
        Action::ChopLeft,
        Action::ChopRight,
    ];

    /// Keyboard key bound to this action
    pub fn key(&self) -> KeyCode {
        match self {
            Action::Quit => KeyCode::Escape,
            Action::Start => KeyCode::Enter,
            Action::ChopLeft => KeyCode::Left,
            Action::ChopRight => KeyCode::Right,
        }
    }

    /// Gamepad buttons bound to this action
    pub fn buttons(&self) -> &'static [u32] {
        match self {
            Action::Quit => &[button::SELECT],
            Action::Start => &[button::START],
            Action::ChopLeft => &[button::DPAD_LEFT, button::X],
            Action::ChopRight => &[button::DPAD_RIGHT, button::B],
        }
    }
}
