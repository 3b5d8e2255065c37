//! Gamepad support
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: No gamepad; the keyboard is the only input

// Standard gamepad button indices (matches Web Gamepad API standard mapping)
// These correspond to Xbox layout used by most platforms
pub mod button {
    pub const A: u32 = 0;           // ActionDown / South
    pub const B: u32 = 1;           // ActionRight / East
    pub const X: u32 = 2;           // ActionLeft / West
    pub const Y: u32 = 3;           // ActionUp / North
    pub const SELECT: u32 = 8;      // Back/Select
    pub const START: u32 = 9;       // Start/Options
    pub const DPAD_UP: u32 = 12;
    pub const DPAD_DOWN: u32 = 13;
    pub const DPAD_LEFT: u32 = 14;
    pub const DPAD_RIGHT: u32 = 15;
}

/// Button masks from this frame and the previous one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonMask {
    pub current: u32,
    pub previous: u32,
}

impl ButtonMask {
    /// Shift in this frame's raw mask
    pub fn advance(&mut self, raw: u32) {
        self.previous = self.current;
        self.current = raw;
    }

    pub fn is_down(&self, button: u32) -> bool {
        self.current & (1 << button) != 0
    }

    /// Went down this frame
    pub fn is_pressed(&self, button: u32) -> bool {
        self.is_down(button) && self.previous & (1 << button) == 0
    }

    /// Any button came up this frame
    pub fn any_released(&self) -> bool {
        self.previous & !self.current != 0
    }
}

// ============================================================================
// WASM Implementation (none)
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod platform {
    use super::ButtonMask;

    pub struct Gamepad {
        mask: ButtonMask,
    }

    impl Gamepad {
        pub fn new() -> Self {
            Self { mask: ButtonMask::default() }
        }

        pub fn poll(&mut self) {}

        pub fn has_gamepad(&self) -> bool {
            false
        }

        pub fn buttons(&self) -> ButtonMask {
            self.mask
        }
    }
}

// ============================================================================
// Native Implementation (gilrs)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use super::{button, ButtonMask};
    use gilrs::{Button as GilrsButton, Gilrs};

    pub struct Gamepad {
        /// `None` when the platform backend could not be opened
        gilrs: Option<Gilrs>,
        mask: ButtonMask,
    }

    impl Gamepad {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(g) => Some(g),
                Err(e) => {
                    eprintln!("Gamepad support unavailable: {}", e);
                    None
                }
            };
            Self {
                gilrs,
                mask: ButtonMask::default(),
            }
        }

        /// Call once per frame before reading buttons
        pub fn poll(&mut self) {
            let raw = match self.gilrs.as_mut() {
                Some(gilrs) => {
                    // Process gilrs events to update internal state
                    while gilrs.next_event().is_some() {}
                    read_mask(gilrs)
                }
                None => 0,
            };
            self.mask.advance(raw);
        }

        pub fn has_gamepad(&self) -> bool {
            self.gilrs
                .as_ref()
                .map(|g| g.gamepads().next().is_some())
                .unwrap_or(false)
        }

        pub fn buttons(&self) -> ButtonMask {
            self.mask
        }
    }

    fn read_mask(gilrs: &Gilrs) -> u32 {
        let Some((_, gp)) = gilrs.gamepads().next() else { return 0 };
        let mut mask = 0u32;

        if gp.is_pressed(GilrsButton::South) { mask |= 1 << button::A; }
        if gp.is_pressed(GilrsButton::East) { mask |= 1 << button::B; }
        if gp.is_pressed(GilrsButton::West) { mask |= 1 << button::X; }
        if gp.is_pressed(GilrsButton::North) { mask |= 1 << button::Y; }
        if gp.is_pressed(GilrsButton::Select) { mask |= 1 << button::SELECT; }
        if gp.is_pressed(GilrsButton::Start) { mask |= 1 << button::START; }
        if gp.is_pressed(GilrsButton::DPadUp) { mask |= 1 << button::DPAD_UP; }
        if gp.is_pressed(GilrsButton::DPadDown) { mask |= 1 << button::DPAD_DOWN; }
        if gp.is_pressed(GilrsButton::DPadLeft) { mask |= 1 << button::DPAD_LEFT; }
        if gp.is_pressed(GilrsButton::DPadRight) { mask |= 1 << button::DPAD_RIGHT; }

        mask
    }
}

impl Default for Gamepad {
    fn default() -> Self {
        Self::new()
    }
}

// Re-export the platform-specific implementation
pub use platform::Gamepad;
