//! Scene renderer
//!
//! Executes the draw list from `scene::build_scene` with macroquad. The
//! game is laid out on a fixed 1920x1080 canvas; the viewport scales it
//! uniformly to the window and letterboxes the rest.

use macroquad::prelude::*;
use crate::asset::Assets;
use crate::game::config::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::scene::{DrawCommand, TextAnchor};

/// Letterbox color outside the canvas
const BORDER_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Canvas-to-screen mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub offset: Vec2,
}

impl Viewport {
    /// Largest uniform scale that fits the canvas in the screen, centered
    pub fn fit(screen_w: f32, screen_h: f32) -> Self {
        let scale = (screen_w / CANVAS_WIDTH).min(screen_h / CANVAS_HEIGHT);
        let offset = Vec2::new(
            (screen_w - CANVAS_WIDTH * scale) / 2.0,
            (screen_h - CANVAS_HEIGHT * scale) / 2.0,
        );
        Self { scale, offset }
    }

    pub fn to_screen(&self, p: Vec2) -> Vec2 {
        self.offset + p * self.scale
    }
}

/// Draw one frame's commands in order
pub fn draw_scene(commands: &[DrawCommand], assets: &Assets) {
    clear_background(BORDER_COLOR);
    let view = Viewport::fit(screen_width(), screen_height());

    for cmd in commands {
        match cmd {
            DrawCommand::Sprite { sprite, position, origin, rotation } => {
                let Some(texture) = assets.texture(*sprite) else { continue };
                let top_left = view.to_screen(*position - *origin);
                draw_texture_ex(
                    texture,
                    top_left.x,
                    top_left.y,
                    WHITE,
                    DrawTextureParams {
                        dest_size: Some(texture.size() * view.scale),
                        rotation: *rotation,
                        pivot: Some(view.to_screen(*position)),
                        ..Default::default()
                    },
                );
            }
            DrawCommand::Rect { position, size, color } => {
                let p = view.to_screen(*position);
                let s = *size * view.scale;
                draw_rectangle(p.x, p.y, s.x, s.y, *color);
            }
            DrawCommand::Text { text, position, size, anchor, color } => {
                let font = Some(assets.font());
                let dims = measure_text(text, font, *size, view.scale);
                let p = view.to_screen(*position);
                // draw_text_ex places the baseline at y
                let (x, y) = match anchor {
                    TextAnchor::TopLeft => (p.x, p.y + dims.offset_y),
                    TextAnchor::Center => (
                        p.x - dims.width / 2.0,
                        p.y - dims.height / 2.0 + dims.offset_y,
                    ),
                };
                draw_text_ex(
                    text,
                    x,
                    y,
                    TextParams {
                        font,
                        font_size: *size,
                        font_scale: view.scale,
                        color: *color,
                        ..Default::default()
                    },
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_exact() {
        let view = Viewport::fit(1920.0, 1080.0);
        assert_eq!(view.scale, 1.0);
        assert_eq!(view.offset, Vec2::ZERO);
    }

    #[test]
    fn test_fit_letterbox() {
        // 4:3 screen is width-limited
        let view = Viewport::fit(960.0, 720.0);
        assert_eq!(view.scale, 0.5);
        assert_eq!(view.offset, Vec2::new(0.0, 90.0));
        assert_eq!(view.to_screen(Vec2::new(1920.0, 1080.0)), Vec2::new(960.0, 630.0));
    }

    #[test]
    fn test_fit_wide() {
        let view = Viewport::fit(3840.0, 1080.0);
        assert_eq!(view.scale, 1.0);
        assert_eq!(view.offset, Vec2::new(960.0, 0.0));
    }
}
