//! Game Module
//!
//! Everything that decides what happens in a round, independent of the
//! window, the audio device and the asset files:
//! - Branch queue: the scrolling column of obstacles
//! - Ambient actors: bee, clouds and the flying log
//! - Game state: score, timer, input debounce and endgame detection
//! - Events: what happened this frame, for audio and logging to react to

pub mod actor;
pub mod branch;
pub mod config;
pub mod event;
pub mod state;

// Re-export main types
pub use branch::Side;
pub use event::GameEvent;
pub use state::{GameState, Phase};
