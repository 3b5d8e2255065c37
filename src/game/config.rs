//! Layout and tuning tables
//!
//! Every screen coordinate and gameplay constant lives here, so the update
//! and render code never carries bare pixel literals. Coordinates are in the
//! 1920x1080 logical canvas; the renderer scales them to the window.

use std::ops::Range;
use macroquad::prelude::{Color, Vec2};

/// Logical canvas width
pub const CANVAS_WIDTH: f32 = 1920.0;
/// Logical canvas height
pub const CANVAS_HEIGHT: f32 = 1080.0;

/// Number of branch slots on the tree (index 0 = top, last = collision row)
pub const NUM_BRANCHES: usize = 6;

/// Where everything sits on the canvas
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub background: Vec2,
    pub tree: Vec2,

    /// Player sprite when standing left / right of the trunk
    pub player_left: Vec2,
    pub player_right: Vec2,

    /// Axe x positions line the blade up with the trunk
    pub axe_left_x: f32,
    pub axe_right_x: f32,
    pub axe_y: f32,

    /// Gravestone shown in place of a squished player
    pub gravestone: Vec2,

    /// Branch sprites: x per side, vertical spacing between slots,
    /// and the sprite origin used as the rotation pivot
    pub branch_left_x: f32,
    pub branch_right_x: f32,
    pub branch_spacing: f32,
    pub branch_origin: Vec2,

    /// Flying log rest position (the tree base)
    pub log_origin: Vec2,

    /// Ambient actor positions before their first activation
    pub bee_start: Vec2,
    pub cloud_starts: [Vec2; 3],

    /// Time bar (full width corresponds to `Tuning::idle_time`)
    pub time_bar_pos: Vec2,
    pub time_bar_width: f32,
    pub time_bar_height: f32,
    pub time_bar_color: Color,

    pub score_pos: Vec2,
    pub score_size: u16,
    pub message_center: Vec2,
    pub message_size: u16,
    pub text_color: Color,
}

pub const LAYOUT: Layout = Layout {
    background: Vec2::new(0.0, 0.0),
    tree: Vec2::new(810.0, 0.0),

    player_left: Vec2::new(580.0, 720.0),
    player_right: Vec2::new(1200.0, 720.0),

    axe_left_x: 700.0,
    axe_right_x: 1075.0,
    axe_y: 830.0,

    gravestone: Vec2::new(525.0, 760.0),

    branch_left_x: 610.0,
    branch_right_x: 1330.0,
    branch_spacing: 150.0,
    branch_origin: Vec2::new(220.0, 20.0),

    log_origin: Vec2::new(810.0, 720.0),

    bee_start: Vec2::new(0.0, 800.0),
    cloud_starts: [
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 250.0),
        Vec2::new(0.0, 500.0),
    ],

    time_bar_pos: Vec2::new(CANVAS_WIDTH / 2.0 - 200.0, 980.0),
    time_bar_width: 400.0,
    time_bar_height: 80.0,
    time_bar_color: Color::new(1.0, 0.0, 0.0, 1.0),

    score_pos: Vec2::new(20.0, 20.0),
    score_size: 100,
    message_center: Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0),
    message_size: 75,
    text_color: Color::new(1.0, 1.0, 1.0, 1.0),
};

/// Gameplay numbers
#[derive(Debug, Clone, Copy)]
pub struct Tuning {
    /// Timer value after pressing Enter
    pub start_time: f32,
    /// Timer value shown before the first round (also the full time bar)
    pub idle_time: f32,
    /// Chop bonus is `bonus_numerator / score + bonus_flat` (integer division)
    pub bonus_numerator: u32,
    pub bonus_flat: f32,
    /// Flying log launch speed (x sign depends on chop side)
    pub log_speed_x: f32,
    pub log_speed_y: f32,
    /// Log is recalled once it leaves this horizontal span
    pub log_min_x: f32,
    pub log_max_x: f32,
}

pub const TUNING: Tuning = Tuning {
    start_time: 5.0,
    idle_time: 6.0,
    bonus_numerator: 2,
    bonus_flat: 0.15,
    log_speed_x: 5000.0,
    log_speed_y: -1500.0,
    log_min_x: -100.0,
    log_max_x: 2000.0,
};

/// Horizontal travel direction of an ambient actor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Left,
    Right,
}

/// Spawn rules for one ambient actor
#[derive(Debug, Clone)]
pub struct Lane {
    /// x the actor reappears at when it becomes active
    pub spawn_x: f32,
    pub heading: Heading,
    /// Deactivate once x passes this bound in the direction of travel
    pub despawn_x: f32,
    /// Speed in pixels per second, re-rolled on every activation
    pub speed: Range<f32>,
    /// Spawn height, re-rolled on every activation
    pub height: Range<f32>,
}

pub const BEE_LANE: Lane = Lane {
    spawn_x: 2000.0,
    heading: Heading::Left,
    despawn_x: -100.0,
    speed: 200.0..400.0,
    height: 500.0..1000.0,
};

pub const CLOUD_LANES: [Lane; 3] = [
    Lane {
        spawn_x: -200.0,
        heading: Heading::Right,
        despawn_x: CANVAS_WIDTH,
        speed: 0.0..200.0,
        height: 0.0..150.0,
    },
    Lane {
        spawn_x: -200.0,
        heading: Heading::Right,
        despawn_x: CANVAS_WIDTH,
        speed: 0.0..200.0,
        height: -150.0..150.0,
    },
    Lane {
        spawn_x: -200.0,
        heading: Heading::Right,
        despawn_x: CANVAS_WIDTH,
        speed: 0.0..200.0,
        height: -150.0..300.0,
    },
];
