//! Sound cues
//!
//! Three one-shot effects, triggered from game events. Playback is
//! fire-and-forget through macroquad's audio backend.

use macroquad::audio::play_sound_once;
use serde::{Deserialize, Serialize};
use crate::asset::Assets;
use crate::game::GameEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    Chop,
    Death,
    OutOfTime,
}

impl SoundCue {
    pub const ALL: [SoundCue; 3] = [SoundCue::Chop, SoundCue::Death, SoundCue::OutOfTime];

    /// Which cue (if any) an event makes
    pub fn for_event(event: &GameEvent) -> Option<SoundCue> {
        match event {
            GameEvent::Started => None,
            GameEvent::Chopped { .. } => Some(SoundCue::Chop),
            GameEvent::Squished { .. } => Some(SoundCue::Death),
            GameEvent::OutOfTime { .. } => Some(SoundCue::OutOfTime),
        }
    }
}

/// Play the cue for `event`, if it has one
pub fn play_event(event: &GameEvent, assets: &Assets) {
    let Some(cue) = SoundCue::for_event(event) else { return };
    if let Some(sound) = assets.sound(cue) {
        play_sound_once(sound);
    }
}
