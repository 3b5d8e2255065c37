//! Scene building
//!
//! Turns a `GameState` into the ordered list of things to draw this frame.
//! Pure: no window, no textures, no mutation. The renderer executes the
//! list; tests inspect it directly.

use std::f32::consts::PI;
use macroquad::prelude::{Color, Vec2};
use serde::{Deserialize, Serialize};
use crate::game::config::{LAYOUT, TUNING};
use crate::game::{GameState, Phase, Side};

/// Every texture the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    Background,
    Tree,
    Bee,
    Cloud,
    Branch,
    Player,
    Gravestone,
    Axe,
    Log,
}

impl SpriteId {
    pub const ALL: [SpriteId; 9] = [
        SpriteId::Background,
        SpriteId::Tree,
        SpriteId::Bee,
        SpriteId::Cloud,
        SpriteId::Branch,
        SpriteId::Player,
        SpriteId::Gravestone,
        SpriteId::Axe,
        SpriteId::Log,
    ];
}

/// How a text command's position relates to the text box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    TopLeft,
    Center,
}

/// One primitive, in canvas coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// `position` is where the sprite's `origin` lands; rotation (radians)
    /// pivots around that point
    Sprite {
        sprite: SpriteId,
        position: Vec2,
        origin: Vec2,
        rotation: f32,
    },
    Rect {
        position: Vec2,
        size: Vec2,
        color: Color,
    },
    Text {
        text: String,
        position: Vec2,
        size: u16,
        anchor: TextAnchor,
        color: Color,
    },
}

impl DrawCommand {
    fn sprite(sprite: SpriteId, position: Vec2) -> Self {
        DrawCommand::Sprite {
            sprite,
            position,
            origin: Vec2::ZERO,
            rotation: 0.0,
        }
    }
}

/// Build the frame, back to front
pub fn build_scene(game: &GameState) -> Vec<DrawCommand> {
    let mut cmds = Vec::with_capacity(24);

    cmds.push(DrawCommand::sprite(SpriteId::Background, LAYOUT.background));

    for cloud in &game.clouds {
        cmds.push(DrawCommand::sprite(SpriteId::Cloud, cloud.position));
    }

    for (i, slot) in game.branches.slots().iter().enumerate() {
        let y = i as f32 * LAYOUT.branch_spacing;
        let (x, rotation) = match slot {
            Some(Side::Left) => (LAYOUT.branch_left_x, PI),
            Some(Side::Right) => (LAYOUT.branch_right_x, 0.0),
            None => continue,
        };
        cmds.push(DrawCommand::Sprite {
            sprite: SpriteId::Branch,
            position: Vec2::new(x, y),
            origin: LAYOUT.branch_origin,
            rotation,
        });
    }

    cmds.push(DrawCommand::sprite(SpriteId::Tree, LAYOUT.tree));

    if let Some(pos) = game.player_position() {
        cmds.push(DrawCommand::sprite(SpriteId::Player, pos));
    }
    if let Some(pos) = game.axe_position() {
        cmds.push(DrawCommand::sprite(SpriteId::Axe, pos));
    }

    cmds.push(DrawCommand::sprite(SpriteId::Log, game.log.position));

    if game.phase == Phase::Squished {
        cmds.push(DrawCommand::sprite(SpriteId::Gravestone, LAYOUT.gravestone));
    }

    cmds.push(DrawCommand::sprite(SpriteId::Bee, game.bee.position));

    cmds.push(DrawCommand::Rect {
        position: LAYOUT.time_bar_pos,
        size: Vec2::new(time_bar_width(game.time_remaining), LAYOUT.time_bar_height),
        color: LAYOUT.time_bar_color,
    });

    cmds.push(DrawCommand::Text {
        text: format!("Score = {}", game.score),
        position: LAYOUT.score_pos,
        size: LAYOUT.score_size,
        anchor: TextAnchor::TopLeft,
        color: LAYOUT.text_color,
    });

    if let Some(message) = game.phase.message() {
        cmds.push(DrawCommand::Text {
            text: message.to_string(),
            position: LAYOUT.message_center,
            size: LAYOUT.message_size,
            anchor: TextAnchor::Center,
            color: LAYOUT.text_color,
        });
    }

    cmds
}

/// Time bar width: full at the idle timer value, empty at zero
pub fn time_bar_width(time_remaining: f32) -> f32 {
    let per_second = LAYOUT.time_bar_width / TUNING.idle_time;
    per_second * time_remaining.max(0.0)
}
