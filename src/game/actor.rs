//! Ambient actors
//!
//! The bee, the clouds and the flying log are decoration: they never touch
//! the score or the branches. Each is a two-state machine. An inactive actor
//! rolls a new speed and height on its next update and starts moving; once
//! it crosses its off-screen bound it goes inactive again.

use macroquad::prelude::Vec2;
use rand::Rng;
use super::branch::Side;
use super::config::{Heading, Lane, TUNING};

/// Bee or cloud drifting across the sky along one axis
#[derive(Debug, Clone)]
pub struct AmbientActor {
    pub lane: Lane,
    pub active: bool,
    pub position: Vec2,
    /// Pixels per second, always non-negative (direction comes from the lane)
    pub speed: f32,
}

impl AmbientActor {
    pub fn new(lane: Lane, start: Vec2) -> Self {
        Self {
            lane,
            active: false,
            position: start,
            speed: 0.0,
        }
    }

    /// Advance one frame.
    ///
    /// The activation frame only places the actor; it starts moving on the
    /// following update.
    pub fn update<R: Rng>(&mut self, delta_time: f32, rng: &mut R) {
        if !self.active {
            self.speed = rng.gen_range(self.lane.speed.clone());
            let height = rng.gen_range(self.lane.height.clone());
            self.position = Vec2::new(self.lane.spawn_x, height);
            self.active = true;
            return;
        }

        let step = self.speed * delta_time;
        match self.lane.heading {
            Heading::Left => {
                self.position.x -= step;
                if self.position.x < self.lane.despawn_x {
                    self.active = false;
                }
            }
            Heading::Right => {
                self.position.x += step;
                if self.position.x > self.lane.despawn_x {
                    self.active = false;
                }
            }
        }
    }
}

/// The chunk of wood knocked off by each chop
#[derive(Debug, Clone)]
pub struct FlyingLog {
    pub origin: Vec2,
    pub active: bool,
    pub position: Vec2,
    pub velocity: Vec2,
}

impl FlyingLog {
    pub fn new(origin: Vec2) -> Self {
        Self {
            origin,
            active: false,
            position: origin,
            velocity: Vec2::new(TUNING.log_speed_x, TUNING.log_speed_y),
        }
    }

    /// Toss the log away from the side the player chopped from
    pub fn launch(&mut self, chopped_from: Side) {
        let direction = match chopped_from.opposite() {
            Side::Left => -1.0,
            Side::Right => 1.0,
        };
        self.position = self.origin;
        self.velocity = Vec2::new(direction * TUNING.log_speed_x, TUNING.log_speed_y);
        self.active = true;
    }

    /// Put the log back on the stump without launching it
    pub fn reset(&mut self) {
        self.active = false;
        self.position = self.origin;
    }

    pub fn update(&mut self, delta_time: f32) {
        if !self.active {
            return;
        }

        self.position += self.velocity * delta_time;

        if self.position.x < TUNING.log_min_x || self.position.x > TUNING.log_max_x {
            self.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::{BEE_LANE, CLOUD_LANES, LAYOUT};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_activation_rolls_within_lane() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let mut bee = AmbientActor::new(BEE_LANE, LAYOUT.bee_start);
            bee.update(0.016, &mut rng);
            assert!(bee.active);
            assert_eq!(bee.position.x, BEE_LANE.spawn_x);
            assert!(BEE_LANE.speed.contains(&bee.speed));
            assert!(BEE_LANE.height.contains(&bee.position.y));
        }
    }

    #[test]
    fn test_bee_flies_left_then_deactivates() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut bee = AmbientActor::new(BEE_LANE, LAYOUT.bee_start);
        bee.update(0.1, &mut rng);

        let start_x = bee.position.x;
        bee.update(0.5, &mut rng);
        assert!((start_x - bee.position.x - bee.speed * 0.5).abs() < 1e-3);

        let dt = 0.1;
        let mut frames = 0;
        while bee.active {
            bee.update(dt, &mut rng);
            assert!(bee.position.x >= BEE_LANE.despawn_x - bee.speed * dt);
            frames += 1;
            assert!(frames < 10_000);
        }
    }

    #[test]
    fn test_speed_rerolled_on_reactivation() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut cloud = AmbientActor::new(CLOUD_LANES[0].clone(), LAYOUT.cloud_starts[0]);
        cloud.update(0.0, &mut rng);
        cloud.speed = 150.0;
        cloud.position.x = CLOUD_LANES[0].despawn_x - 1.0;

        cloud.update(0.1, &mut rng);
        assert!(!cloud.active);

        cloud.update(0.1, &mut rng);
        assert!(cloud.active);
        assert_eq!(cloud.position.x, CLOUD_LANES[0].spawn_x);
    }

    #[test]
    fn test_clouds_never_overshoot_more_than_one_step() {
        let mut rng = StdRng::seed_from_u64(77);
        for (lane, start) in CLOUD_LANES.iter().zip(LAYOUT.cloud_starts) {
            let mut cloud = AmbientActor::new(lane.clone(), start);
            let dt = 0.25;
            for _ in 0..2000 {
                cloud.update(dt, &mut rng);
                assert!(cloud.position.x <= lane.despawn_x + cloud.speed * dt);
            }
        }
    }

    #[test]
    fn test_log_flies_away_from_chop_side() {
        let mut log = FlyingLog::new(LAYOUT.log_origin);

        log.launch(Side::Left);
        assert!(log.velocity.x > 0.0);
        assert!(log.velocity.y < 0.0);

        log.launch(Side::Right);
        assert!(log.velocity.x < 0.0);
        assert_eq!(log.position, LAYOUT.log_origin);
    }

    #[test]
    fn test_log_returns_to_origin_off_screen() {
        let mut log = FlyingLog::new(LAYOUT.log_origin);
        log.launch(Side::Right);

        log.update(0.1);
        assert!(log.active);
        assert_eq!(log.position, LAYOUT.log_origin + Vec2::new(-500.0, -150.0));

        log.update(0.1);
        assert!(!log.active);
        assert_eq!(log.position, LAYOUT.log_origin);
    }

    #[test]
    fn test_inactive_log_stays_put() {
        let mut log = FlyingLog::new(LAYOUT.log_origin);
        log.update(1.0);
        assert_eq!(log.position, LAYOUT.log_origin);
    }
}
