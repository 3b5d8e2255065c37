//! Round state and per-frame update
//!
//! Owns everything that changes during play: score, timer, branch column,
//! player side, input debounce and the ambient actors. Rendering only ever
//! sees `&GameState`.

use macroquad::prelude::Vec2;
use rand::Rng;
use super::actor::{AmbientActor, FlyingLog};
use super::branch::{BranchQueue, Side};
use super::config::{BEE_LANE, CLOUD_LANES, LAYOUT, TUNING};
use super::event::{EventQueue, GameEvent};

/// Where the round is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Before the first Enter
    #[default]
    Waiting,
    Playing,
    /// Terminal: timer reached zero
    OutOfTime,
    /// Terminal: bottom branch landed on the player
    Squished,
}

impl Phase {
    /// Banner text shown while the game is paused
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Phase::Waiting => Some("Press Enter to start!"),
            Phase::Playing => None,
            Phase::OutOfTime => Some("Out of time!!"),
            Phase::Squished => Some("SQUISHED!!"),
        }
    }
}

/// Seconds added by a chop that brought the score to `score`.
///
/// Integer division keeps the bonus at 2.15, 1.15, then a flat 0.15.
/// The divisor is clamped so a zero score cannot divide by zero.
pub fn chop_bonus(score: u32) -> f32 {
    (TUNING.bonus_numerator / score.max(1)) as f32 + TUNING.bonus_flat
}

pub struct GameState {
    pub phase: Phase,
    pub score: u32,
    /// Seconds left; may dip below zero on the frame the round ends
    pub time_remaining: f32,
    pub player_side: Side,
    /// Cleared by a chop, set again by the next key release
    pub accept_input: bool,
    /// Axe is drawn from a chop until the next key release
    pub axe_visible: bool,
    pub branches: BranchQueue,
    pub bee: AmbientActor,
    pub clouds: [AmbientActor; 3],
    pub log: FlyingLog,
    pub events: EventQueue<GameEvent>,
}

impl GameState {
    pub fn new() -> Self {
        let [c0, c1, c2] = CLOUD_LANES;
        let [s0, s1, s2] = LAYOUT.cloud_starts;
        Self {
            phase: Phase::Waiting,
            score: 0,
            time_remaining: TUNING.idle_time,
            player_side: Side::Left,
            accept_input: false,
            axe_visible: true,
            branches: BranchQueue::new(),
            bee: AmbientActor::new(BEE_LANE, LAYOUT.bee_start),
            clouds: [
                AmbientActor::new(c0, s0),
                AmbientActor::new(c1, s1),
                AmbientActor::new(c2, s2),
            ],
            log: FlyingLog::new(LAYOUT.log_origin),
            events: EventQueue::new(),
        }
    }

    /// Anything other than an active round
    pub fn is_paused(&self) -> bool {
        self.phase != Phase::Playing
    }

    /// Start or restart a round (Enter)
    pub fn start(&mut self) {
        self.phase = Phase::Playing;
        self.score = 0;
        self.time_remaining = TUNING.start_time;
        self.branches.clear();
        self.player_side = Side::Left;
        self.log.reset();
        self.accept_input = true;
        self.events.send(GameEvent::Started);
    }

    /// Any key came up: re-arm chopping and put the axe away
    pub fn key_released(&mut self) {
        if self.is_paused() {
            return;
        }
        self.accept_input = true;
        self.axe_visible = false;
    }

    /// Chop from `side`. Returns false when the chop was ignored.
    pub fn chop<R: Rng>(&mut self, side: Side, rng: &mut R) -> bool {
        if self.is_paused() || !self.accept_input {
            return false;
        }

        self.player_side = side;
        self.score += 1;
        self.time_remaining += chop_bonus(self.score);
        self.axe_visible = true;
        self.branches.advance(rng);
        self.log.launch(side);
        self.accept_input = false;

        self.events.send(GameEvent::Chopped { side, score: self.score });
        true
    }

    /// Advance one frame of simulation. Does nothing while paused.
    ///
    /// Endgame checks run after motion. If the timer expires on the same
    /// frame the player is squished, the timer wins.
    pub fn update<R: Rng>(&mut self, delta_time: f32, rng: &mut R) {
        if self.is_paused() {
            return;
        }

        self.time_remaining -= delta_time;

        self.bee.update(delta_time, rng);
        for cloud in &mut self.clouds {
            cloud.update(delta_time, rng);
        }
        self.log.update(delta_time);

        if self.time_remaining <= 0.0 {
            self.phase = Phase::OutOfTime;
            self.accept_input = false;
            self.events.send(GameEvent::OutOfTime { score: self.score });
        } else if self.branches.bottom() == Some(self.player_side) {
            self.phase = Phase::Squished;
            self.accept_input = false;
            self.events.send(GameEvent::Squished { score: self.score });
        }
    }

    /// Player sprite position, or `None` once squished
    pub fn player_position(&self) -> Option<Vec2> {
        if self.phase == Phase::Squished {
            return None;
        }
        Some(match self.player_side {
            Side::Left => LAYOUT.player_left,
            Side::Right => LAYOUT.player_right,
        })
    }

    /// Axe position while it is out
    pub fn axe_position(&self) -> Option<Vec2> {
        if !self.axe_visible {
            return None;
        }
        let x = match self.player_side {
            Side::Left => LAYOUT.axe_left_x,
            Side::Right => LAYOUT.axe_right_x,
        };
        Some(Vec2::new(x, LAYOUT.axe_y))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::NUM_BRANCHES;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0xC0FFEE)
    }

    fn started() -> GameState {
        let mut game = GameState::new();
        game.start();
        game.events.clear();
        game
    }

    #[test]
    fn test_initial_state_waits_for_enter() {
        let game = GameState::new();
        assert_eq!(game.phase, Phase::Waiting);
        assert!(game.is_paused());
        assert!(!game.accept_input);
        assert_eq!(game.time_remaining, TUNING.idle_time);
        assert_eq!(game.phase.message(), Some("Press Enter to start!"));
    }

    #[test]
    fn test_start_resets_round() {
        let mut rng = rng();
        let mut game = started();
        game.branches.set(2, Some(Side::Right));
        game.chop(Side::Right, &mut rng);
        game.update(4.0, &mut rng);

        game.start();

        assert_eq!(game.phase, Phase::Playing);
        assert_eq!(game.score, 0);
        assert_eq!(game.time_remaining, 5.0);
        assert!(game.branches.is_bare());
        assert_eq!(game.player_side, Side::Left);
        assert!(game.accept_input);
        assert!(!game.log.active);
        assert_eq!(game.log.position, LAYOUT.log_origin);
        assert_eq!(game.events.iter().last(), Some(&GameEvent::Started));
    }

    #[test]
    fn test_chop_scores_and_debounces() {
        let mut rng = rng();
        let mut game = started();

        assert!(game.chop(Side::Right, &mut rng));
        assert_eq!(game.score, 1);
        assert_eq!(game.player_side, Side::Right);
        assert!(!game.accept_input);
        assert!(game.log.active);

        // Held key: ignored until a release
        assert!(!game.chop(Side::Right, &mut rng));
        assert_eq!(game.score, 1);

        game.key_released();
        assert!(game.accept_input);
        assert!(!game.axe_visible);
        assert!(game.chop(Side::Left, &mut rng));
        assert_eq!(game.score, 2);
    }

    #[test]
    fn test_chop_time_bonus() {
        let mut rng = rng();
        let mut game = started();

        game.chop(Side::Left, &mut rng);
        assert!((game.time_remaining - 7.15).abs() < 1e-5);

        game.key_released();
        game.chop(Side::Left, &mut rng);
        assert!((game.time_remaining - 8.30).abs() < 1e-5);

        game.key_released();
        game.chop(Side::Left, &mut rng);
        assert!((game.time_remaining - 8.45).abs() < 1e-5);
    }

    #[test]
    fn test_chop_bonus_values() {
        assert!((chop_bonus(1) - 2.15).abs() < 1e-6);
        assert!((chop_bonus(2) - 1.15).abs() < 1e-6);
        assert!((chop_bonus(3) - 0.15).abs() < 1e-6);
        assert!((chop_bonus(0) - 2.15).abs() < 1e-6);
    }

    #[test]
    fn test_chop_shifts_branches_once() {
        let mut rng = rng();
        let mut game = started();
        game.branches.set(0, Some(Side::Left));
        game.branches.set(1, Some(Side::Right));
        let before = *game.branches.slots();

        game.chop(Side::Left, &mut rng);

        assert_eq!(&game.branches.slots()[1..], &before[..NUM_BRANCHES - 1]);
    }

    #[test]
    fn test_chop_ignored_while_paused() {
        let mut rng = rng();
        let mut game = GameState::new();
        game.accept_input = true;
        assert!(!game.chop(Side::Left, &mut rng));
        assert_eq!(game.score, 0);
        assert!(game.events.is_empty());
    }

    #[test]
    fn test_release_ignored_while_paused() {
        let mut game = GameState::new();
        game.key_released();
        assert!(!game.accept_input);
        assert!(game.axe_visible);
    }

    #[test]
    fn test_out_of_time() {
        let mut rng = rng();
        let mut game = started();

        for _ in 0..9 {
            game.update(0.5, &mut rng);
            assert_eq!(game.phase, Phase::Playing);
        }
        game.update(0.5, &mut rng);

        assert_eq!(game.phase, Phase::OutOfTime);
        assert!(game.is_paused());
        assert_eq!(game.phase.message(), Some("Out of time!!"));
        let events: Vec<_> = game.events.drain().collect();
        assert_eq!(events, vec![GameEvent::OutOfTime { score: 0 }]);
    }

    #[test]
    fn test_squished_when_branch_lands_on_player() {
        let mut rng = rng();
        let mut game = started();
        // Slot 4 scrolls into the collision row on the next chop
        game.branches.set(NUM_BRANCHES - 2, Some(Side::Right));

        game.chop(Side::Right, &mut rng);
        assert_eq!(game.branches.bottom(), Some(Side::Right));
        game.update(0.016, &mut rng);

        assert_eq!(game.phase, Phase::Squished);
        assert!(!game.accept_input);
        assert_eq!(game.player_position(), None);
        assert!(game.events.iter().any(|e| *e == GameEvent::Squished { score: 1 }));
    }

    #[test]
    fn test_squish_regardless_of_timer() {
        let mut rng = rng();
        let mut game = started();
        game.time_remaining = 1000.0;
        game.branches.set(NUM_BRANCHES - 1, Some(Side::Left));
        game.update(0.016, &mut rng);
        assert_eq!(game.phase, Phase::Squished);
    }

    #[test]
    fn test_branch_on_other_side_is_safe() {
        let mut rng = rng();
        let mut game = started();
        game.branches.set(NUM_BRANCHES - 1, Some(Side::Right));
        game.update(0.016, &mut rng);
        assert_eq!(game.phase, Phase::Playing);
    }

    #[test]
    fn test_timer_wins_tie() {
        let mut rng = rng();
        let mut game = started();
        game.branches.set(NUM_BRANCHES - 1, Some(Side::Left));
        game.update(10.0, &mut rng);

        assert_eq!(game.phase, Phase::OutOfTime);
        let events: Vec<_> = game.events.drain().collect();
        assert_eq!(events, vec![GameEvent::OutOfTime { score: 0 }]);
    }

    #[test]
    fn test_no_update_while_paused() {
        let mut rng = rng();
        let mut game = GameState::new();
        game.update(1.0, &mut rng);
        assert_eq!(game.time_remaining, TUNING.idle_time);
        assert!(!game.bee.active);
        assert_eq!(game.bee.position, LAYOUT.bee_start);
    }

    #[test]
    fn test_restart_after_squish() {
        let mut rng = rng();
        let mut game = started();
        game.branches.set(NUM_BRANCHES - 1, Some(Side::Left));
        game.update(0.016, &mut rng);
        assert_eq!(game.phase, Phase::Squished);

        game.start();
        assert_eq!(game.phase, Phase::Playing);
        assert!(game.player_position().is_some());
        game.update(0.016, &mut rng);
        assert_eq!(game.phase, Phase::Playing);
    }

    #[test]
    fn test_axe_follows_player_side() {
        let mut rng = rng();
        let mut game = started();
        game.chop(Side::Right, &mut rng);
        assert_eq!(game.axe_position(), Some(Vec2::new(LAYOUT.axe_right_x, LAYOUT.axe_y)));
        game.key_released();
        assert_eq!(game.axe_position(), None);
    }
}
