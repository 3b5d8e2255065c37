//! Input state management
//!
//! Polls keyboard (macroquad) and gamepad once per frame and folds both
//! into a single `FrameInput` snapshot for the game to consume.

use macroquad::prelude::*;
use crate::game::Side;
use super::gamepad::{ButtonMask, Gamepad};
use super::Action;

/// What the player asked for this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub quit: bool,
    /// Start was pressed this frame (edge, not held)
    pub start: bool,
    /// Chop key currently held; Right wins if both are down
    pub chop: Option<Side>,
    /// Some key or button came up this frame
    pub released: bool,
}

impl FrameInput {
    /// Fold raw per-action state into a frame snapshot.
    ///
    /// `down` reports held actions, `pressed` actions that went down this
    /// frame.
    pub fn resolve(
        down: impl Fn(Action) -> bool,
        pressed: impl Fn(Action) -> bool,
        released: bool,
    ) -> Self {
        let chop = if down(Action::ChopRight) {
            Some(Side::Right)
        } else if down(Action::ChopLeft) {
            Some(Side::Left)
        } else {
            None
        };

        Self {
            quit: down(Action::Quit),
            start: pressed(Action::Start),
            chop,
            released,
        }
    }
}

/// Unified input state that handles both keyboard and gamepad
pub struct InputState {
    gamepad: Gamepad,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            gamepad: Gamepad::new(),
        }
    }

    /// Call once per frame
    pub fn poll(&mut self) -> FrameInput {
        self.gamepad.poll();
        let buttons = self.gamepad.buttons();

        let released = !get_keys_released().is_empty() || buttons.any_released();

        FrameInput::resolve(
            |action| is_key_down(action.key()) || gamepad_down(&buttons, action),
            |action| is_key_pressed(action.key()) || gamepad_pressed(&buttons, action),
            released,
        )
    }

    pub fn has_gamepad(&self) -> bool {
        self.gamepad.has_gamepad()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn gamepad_down(buttons: &ButtonMask, action: Action) -> bool {
    action.buttons().iter().any(|b| buttons.is_down(*b))
}

fn gamepad_pressed(buttons: &ButtonMask, action: Action) -> bool {
    action.buttons().iter().any(|b| buttons.is_pressed(*b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::gamepad::button;

    #[test]
    fn test_right_wins_when_both_held() {
        let input = FrameInput::resolve(
            |a| matches!(a, Action::ChopLeft | Action::ChopRight),
            |_| false,
            false,
        );
        assert_eq!(input.chop, Some(Side::Right));
    }

    #[test]
    fn test_start_needs_press_edge() {
        let held = FrameInput::resolve(|a| a == Action::Start, |_| false, false);
        assert!(!held.start);

        let pressed = FrameInput::resolve(|a| a == Action::Start, |a| a == Action::Start, false);
        assert!(pressed.start);
    }

    #[test]
    fn test_idle_frame() {
        let input = FrameInput::resolve(|_| false, |_| false, true);
        assert_eq!(
            input,
            FrameInput { quit: false, start: false, chop: None, released: true }
        );
    }

    #[test]
    fn test_gamepad_bindings() {
        let mut buttons = ButtonMask::default();
        buttons.advance(1 << button::DPAD_LEFT);
        assert!(gamepad_down(&buttons, Action::ChopLeft));
        assert!(!gamepad_down(&buttons, Action::ChopRight));

        buttons.advance(1 << button::START);
        assert!(gamepad_pressed(&buttons, Action::Start));
        assert!(buttons.any_released());
    }
}
