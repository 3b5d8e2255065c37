//! Application state
//!
//! The round plus the one random generator the whole process uses. The RNG
//! is seeded once at startup and never reseeded; reseeding per draw from a
//! coarse clock hands out correlated (often identical) values.

use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::game::GameState;
use crate::input::FrameInput;

pub struct AppState {
    pub game: GameState,
    rng: StdRng,
}

impl AppState {
    pub fn new(seed: u64) -> Self {
        Self {
            game: GameState::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Apply one frame of input, then simulate `delta_time` seconds.
    ///
    /// Input order: key release, start, chop. Quit is handled by the caller.
    pub fn step(&mut self, input: &FrameInput, delta_time: f32) {
        if input.released {
            self.game.key_released();
        }
        if input.start {
            self.game.start();
        }
        if let Some(side) = input.chop {
            self.game.chop(side, &mut self.rng);
        }
        self.game.update(delta_time, &mut self.rng);
    }
}
